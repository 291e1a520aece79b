use chrono::{NaiveDate, NaiveDateTime};
use egui::Rect;

use crate::models::event::EventId;

pub mod day_view;
pub mod week_shared;
pub mod week_view;

pub use week_shared::TimelineView;

/// Which grid a `TimelineView` renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Day,
    Week,
}

/// Request to create an event from a click on an empty slot
#[derive(Clone, Debug, PartialEq)]
pub struct SlotCreateRequest {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub start_label: String,
    pub end_label: String,
    /// On-screen rect of the clicked slot, for anchoring a popup
    pub anchor: Rect,
}

/// Callbacks into the collaborator that owns the events.
///
/// `on_event_resize` is the only mutation channel: it fires exactly once
/// per completed drag or resize, after which the caller is expected to
/// supply an updated event snapshot.
#[cfg_attr(test, mockall::automock)]
pub trait TimelineHandler {
    fn on_event_create(&mut self, request: SlotCreateRequest);
    fn on_event_resize(&mut self, event_id: EventId, start: NaiveDateTime, end: NaiveDateTime);
}
