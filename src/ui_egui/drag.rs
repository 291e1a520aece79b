use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use egui::{Pos2, Vec2};

use super::grid::GridGeometry;
use crate::models::event::{CalendarEvent, EventId};
use crate::services::timeline::mapper::hour_to_offset;
use crate::services::timeline::{snap, TimeMapper, HOURS_PER_DAY};

/// Move-in-progress state for one event.
///
/// The start follows the pointer's vertical travel from the anchor, snapped
/// to the move increment. In multi-column grids each column crossed moves
/// the event by one day. The duration never changes.
#[derive(Clone, Debug)]
pub struct DragContext {
    pub event_id: EventId,
    pub original_start: NaiveDateTime,
    pub original_end: NaiveDateTime,
    pub duration: Duration,
    pub anchor: Pos2,
    pub pointer_pos: Option<Pos2>,
    pub hovered_date: Option<NaiveDate>,
    pub hovered_time: Option<NaiveTime>,
    origin_hour: f64,
}

impl DragContext {
    pub fn from_event(event: &CalendarEvent, anchor: Pos2) -> Self {
        let origin = event.start - event.start.date().and_time(NaiveTime::MIN);
        Self {
            event_id: event.id,
            duration: event.end - event.start,
            original_start: event.start,
            original_end: event.end,
            anchor,
            pointer_pos: None,
            hovered_date: Some(event.start.date()),
            hovered_time: Some(event.start.time()),
            origin_hour: origin.num_seconds() as f64 / 3600.0,
        }
    }

    /// Pointer travel since pointer-down
    pub fn displacement(&self, pos: Pos2) -> Vec2 {
        pos - self.anchor
    }

    /// New `(start, end)` for the pointer at `pos`, without recording it.
    ///
    /// Vertical travel shifts the start's time of day, snapped to
    /// `increment_hours`. Horizontal travel shifts it by the number of day
    /// columns between the grabbed column and the one under the pointer.
    /// An event that fits inside one day is kept inside its target day.
    pub fn candidate(
        &self,
        pos: Pos2,
        grid: &GridGeometry,
        mapper: &TimeMapper,
        increment_hours: f64,
    ) -> (NaiveDateTime, NaiveDateTime) {
        let grabbed = grid.date_at(self.anchor.x);
        let target = grid.date_at(pos.x);
        let day_shift = match (grabbed, target) {
            (Some(grabbed), Some(target)) => target - grabbed,
            _ => Duration::zero(),
        };

        let dy = pos.y - self.anchor.y;
        let hour = if dy == 0.0 {
            self.origin_hour
        } else {
            snap(self.origin_hour + mapper.span_hours(dy), increment_hours)
        };

        let duration_hours = self.duration.num_seconds() as f64 / 3600.0;
        let hour = if self.within_one_day() {
            hour.clamp(0.0, (HOURS_PER_DAY - duration_hours).max(0.0))
        } else {
            hour
        };

        let start_day = self.original_start.date().and_time(NaiveTime::MIN) + day_shift;
        let start = if hour == self.origin_hour {
            self.original_start + day_shift
        } else {
            start_day + hour_to_offset(hour)
        };
        (start, start + self.duration)
    }

    /// Whether the original event starts and ends on the same day (an end
    /// at the following midnight still counts).
    fn within_one_day(&self) -> bool {
        let next_midnight = self.original_start.date().and_time(NaiveTime::MIN) + Duration::days(1);
        self.original_end <= next_midnight
    }

    /// Compute the candidate for `pos` and remember it as the hovered slot
    pub fn update_hover(
        &mut self,
        pos: Pos2,
        grid: &GridGeometry,
        mapper: &TimeMapper,
        increment_hours: f64,
    ) -> (NaiveDateTime, NaiveDateTime) {
        let (start, end) = self.candidate(pos, grid, mapper, increment_hours);
        self.pointer_pos = Some(pos);
        self.hovered_date = Some(start.date());
        self.hovered_time = Some(start.time());
        (start, end)
    }

    pub fn hovered_start(&self) -> Option<NaiveDateTime> {
        match (self.hovered_date, self.hovered_time) {
            (Some(date), Some(time)) => Some(date.and_time(time)),
            _ => None,
        }
    }
}
