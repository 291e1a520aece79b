// Settings module
// Tunable constants of the timeline grid and its pointer interaction

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clock format used for slot labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} must be a positive number (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    pub pixels_per_hour: f32,
    /// Snap increment (hours) applied while moving an event
    pub move_snap_hours: f64,
    /// Snap increment (hours) applied while resizing an event
    pub resize_snap_hours: f64,
    /// Pointer travel (px) that turns a press on an event into a drag
    pub drag_threshold_px: f32,
    pub min_visual_height_px: f32,
    /// Window after a commit during which slot clicks are ignored
    pub click_cooldown_ms: u64,
    /// Shortest interval a resize may produce
    pub min_resize_minutes: i64,
    /// Granularity of the start time offered for an empty-slot click
    pub slot_minutes: u32,
    pub default_event_minutes: u32,
    pub time_format: TimeFormat,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    pub initial_scroll_hour: f64,
    pub initial_scroll_delay_ms: u64,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            pixels_per_hour: 60.0,
            move_snap_hours: 0.1,
            resize_snap_hours: 0.15,
            drag_threshold_px: 5.0,
            min_visual_height_px: 20.0,
            click_cooldown_ms: 300,
            min_resize_minutes: 15,
            slot_minutes: 15,
            default_event_minutes: 60,
            time_format: TimeFormat::default(),
            first_day_of_week: 0, // Sunday
            initial_scroll_hour: 8.0,
            initial_scroll_delay_ms: 100,
        }
    }
}

impl TimelineSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("pixels_per_hour", self.pixels_per_hour as f64)?;
        positive("move_snap_hours", self.move_snap_hours)?;
        positive("resize_snap_hours", self.resize_snap_hours)?;
        positive("drag_threshold_px", self.drag_threshold_px as f64)?;
        positive("min_visual_height_px", self.min_visual_height_px as f64)?;

        within("move_snap_hours", self.move_snap_hours, 0.0, 24.0)?;
        within("resize_snap_hours", self.resize_snap_hours, 0.0, 24.0)?;
        within("min_resize_minutes", self.min_resize_minutes as f64, 1.0, 1440.0)?;
        within("slot_minutes", self.slot_minutes as f64, 1.0, 1440.0)?;
        within("default_event_minutes", self.default_event_minutes as f64, 1.0, 1440.0)?;
        within("first_day_of_week", self.first_day_of_week as f64, 0.0, 6.0)?;
        within("initial_scroll_hour", self.initial_scroll_hour, 0.0, 24.0)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NotPositive { field, value })
    }
}

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), SettingsError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
