// Test fixtures - reusable test data
// Provides consistent events and views across the integration tests

#![allow(dead_code)]

use calendar_timeline::models::event::{CalendarEvent, EventId};
use calendar_timeline::models::settings::TimelineSettings;
use calendar_timeline::ui_egui::views::{SlotCreateRequest, TimelineHandler, TimelineView};
use chrono::{NaiveDate, NaiveDateTime};
use egui::{Pos2, Rect, Vec2};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, March 10, 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// `hour:minute` on `monday()`
    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        monday().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn timed(id: i64, title: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        CalendarEvent::new(id, title, start, end).unwrap()
    }

    /// 09:00-10:00, 09:30-10:30 and 11:00-12:00 on Monday
    pub fn overlapping_morning() -> Vec<CalendarEvent> {
        vec![
            timed(1, "Standup", dates::at(9, 0), dates::at(10, 0)),
            timed(2, "Review", dates::at(9, 30), dates::at(10, 30)),
            timed(3, "Lunch prep", dates::at(11, 0), dates::at(12, 0)),
        ]
    }
}

/// Day view over Monday with the grid at the origin, 400px wide
pub fn monday_view(events: Vec<CalendarEvent>) -> TimelineView {
    let mut view = TimelineView::day(dates::monday(), TimelineSettings::default());
    view.set_grid_rect(Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 1440.0)));
    view.set_events(events);
    view
}

/// Handler that records every callback
#[derive(Default)]
pub struct RecordingHandler {
    pub created: Vec<SlotCreateRequest>,
    pub resized: Vec<(EventId, NaiveDateTime, NaiveDateTime)>,
}

impl TimelineHandler for RecordingHandler {
    fn on_event_create(&mut self, request: SlotCreateRequest) {
        self.created.push(request);
    }

    fn on_event_resize(&mut self, event_id: EventId, start: NaiveDateTime, end: NaiveDateTime) {
        self.resized.push((event_id, start, end));
    }
}
