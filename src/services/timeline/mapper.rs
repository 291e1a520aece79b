//! Conversion between vertical pixel offsets in a day column and
//! time-of-day values.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const HOURS_PER_DAY: f64 = 24.0;

/// Fixed-scale mapper between pixels and hours.
///
/// Offsets are measured from the top of a day column (00:00). Hours are
/// clamped to `[0, 24]`, where `24.0` is the end-of-day boundary an event
/// may end on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeMapper {
    pixels_per_hour: f32,
}

impl TimeMapper {
    pub fn new(pixels_per_hour: f32) -> Self {
        let pixels_per_hour = if pixels_per_hour.is_finite() && pixels_per_hour > 0.0 {
            pixels_per_hour
        } else {
            log::warn!(
                "Invalid pixels_per_hour {}, falling back to 60",
                pixels_per_hour
            );
            60.0
        };
        Self { pixels_per_hour }
    }

    pub fn pixels_per_hour(&self) -> f32 {
        self.pixels_per_hour
    }

    /// Height of a full day column in pixels
    pub fn day_height(&self) -> f32 {
        self.hour_to_pixel(HOURS_PER_DAY)
    }

    pub fn pixel_to_hour(&self, y: f32) -> f64 {
        if !y.is_finite() {
            return if y == f32::INFINITY { HOURS_PER_DAY } else { 0.0 };
        }
        clamp_hour(y as f64 / self.pixels_per_hour as f64)
    }

    pub fn hour_to_pixel(&self, hour: f64) -> f32 {
        (clamp_hour(hour) * self.pixels_per_hour as f64) as f32
    }

    /// Length in hours of a vertical travel of `dy` pixels. Not clamped, so
    /// it can move an instant across day boundaries.
    pub fn span_hours(&self, dy: f32) -> f64 {
        if !dy.is_finite() {
            return 0.0;
        }
        dy as f64 / self.pixels_per_hour as f64
    }

    /// Hours elapsed between the start of `day` and `at`, clamped to the day.
    pub fn hour_of(&self, day: NaiveDate, at: NaiveDateTime) -> f64 {
        let offset = at - day.and_time(NaiveTime::MIN);
        clamp_hour(offset.num_seconds() as f64 / 3600.0)
    }

    /// Instant at `hour` hours into `day`, rounded to the nearest second.
    pub fn datetime_at(&self, day: NaiveDate, hour: f64) -> NaiveDateTime {
        day.and_time(NaiveTime::MIN) + hour_to_offset(clamp_hour(hour))
    }
}

impl Default for TimeMapper {
    fn default() -> Self {
        Self::new(60.0)
    }
}

/// Fractional hours as a duration, rounded to the nearest second
pub fn hour_to_offset(hour: f64) -> Duration {
    Duration::seconds((hour * 3600.0).round() as i64)
}

fn clamp_hour(hour: f64) -> f64 {
    if hour.is_nan() {
        0.0
    } else {
        hour.clamp(0.0, HOURS_PER_DAY)
    }
}
