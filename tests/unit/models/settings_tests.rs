// Unit tests for TimelineSettings validation and TOML parsing

use calendar_timeline::models::settings::{SettingsError, TimeFormat, TimelineSettings};
use test_case::test_case;

fn with(update: impl FnOnce(&mut TimelineSettings)) -> TimelineSettings {
    let mut settings = TimelineSettings::default();
    update(&mut settings);
    settings
}

#[test_case(with(|s| s.pixels_per_hour = 0.0), "pixels_per_hour" ; "zero pixels per hour")]
#[test_case(with(|s| s.pixels_per_hour = f32::NAN), "pixels_per_hour" ; "nan pixels per hour")]
#[test_case(with(|s| s.move_snap_hours = -0.1), "move_snap_hours" ; "negative move snap")]
#[test_case(with(|s| s.resize_snap_hours = 0.0), "resize_snap_hours" ; "zero resize snap")]
#[test_case(with(|s| s.drag_threshold_px = 0.0), "drag_threshold_px" ; "zero drag threshold")]
#[test_case(with(|s| s.min_resize_minutes = 0), "min_resize_minutes" ; "zero minimum resize")]
#[test_case(with(|s| s.slot_minutes = 0), "slot_minutes" ; "zero slot")]
#[test_case(with(|s| s.first_day_of_week = 7), "first_day_of_week" ; "weekday out of range")]
#[test_case(with(|s| s.initial_scroll_hour = 25.0), "initial_scroll_hour" ; "scroll hour past midnight")]
fn test_invalid_settings_name_the_field(settings: TimelineSettings, expected: &str) {
    let field = match settings.validate() {
        Err(SettingsError::NotPositive { field, .. }) => field,
        Err(SettingsError::OutOfRange { field, .. }) => field,
        Ok(()) => panic!("expected {} to be rejected", expected),
    };
    assert_eq!(field, expected);
}

#[test_case("24h", TimeFormat::TwentyFourHour ; "twenty four hour")]
#[test_case("12h", TimeFormat::TwelveHour ; "twelve hour")]
fn test_time_format_from_toml(value: &str, expected: TimeFormat) {
    let parsed: TimelineSettings = toml::from_str(&format!("time_format = \"{}\"", value)).unwrap();
    assert_eq!(parsed.time_format, expected);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let parsed: TimelineSettings = toml::from_str("pixels_per_hour = 48.0\nslot_minutes = 30").unwrap();
    assert_eq!(parsed.pixels_per_hour, 48.0);
    assert_eq!(parsed.slot_minutes, 30);
    assert_eq!(parsed.move_snap_hours, 0.1);
    assert_eq!(parsed.resize_snap_hours, 0.15);
    assert!(parsed.validate().is_ok());
}
