//! Quantization of time-of-day values onto the grid.
//!
//! Moves and resizes use separate increments (0.1 h and 0.15 h by
//! default). The two are configured independently in `TimelineSettings`.

/// Round `hour` to the nearest multiple of `increment_hours`.
///
/// Non-positive or non-finite increments leave the value untouched.
pub fn snap(hour: f64, increment_hours: f64) -> f64 {
    if !hour.is_finite() || !increment_hours.is_finite() || increment_hours <= 0.0 {
        return hour;
    }
    (hour / increment_hours).round() * increment_hours
}

/// Round `hour` down to the start of its slot of `slot_minutes`.
pub fn floor_to_slot(hour: f64, slot_minutes: u32) -> f64 {
    if slot_minutes == 0 || !hour.is_finite() {
        return hour;
    }
    let slot_hours = slot_minutes as f64 / 60.0;
    // Tolerate float noise just below a slot boundary
    ((hour / slot_hours) + 1e-9).floor() * slot_hours
}
