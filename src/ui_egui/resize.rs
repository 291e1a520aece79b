// Event Resize System
//
// Resizing a timed event by dragging the handle on its top or bottom border.
// - Top handle: adjusts start time, end stays put
// - Bottom handle: adjusts end time, start stays put

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use egui::{Pos2, Rect, Vec2};

use crate::models::event::{CalendarEvent, EventId};
use crate::services::timeline::{snap, TimeMapper, HOURS_PER_DAY};

/// Which edge of the event is being resized
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    /// Top edge - adjusts start time
    Top,
    /// Bottom edge - adjusts end time
    Bottom,
}

impl ResizeEdge {
    /// Returns the cursor icon for this handle
    pub fn cursor_icon(&self) -> egui::CursorIcon {
        egui::CursorIcon::ResizeVertical
    }
}

/// Maximum height of the resize hit zone at each edge
pub const HANDLE_SIZE: f32 = 8.0;

/// Context for an active resize operation
#[derive(Clone, Debug)]
pub struct ResizeContext {
    /// The event being resized
    pub event_id: EventId,
    /// Which edge is being dragged
    pub edge: ResizeEdge,
    /// Original event start time
    pub original_start: NaiveDateTime,
    /// Original event end time
    pub original_end: NaiveDateTime,
    /// Pointer position at pointer-down
    pub anchor: Pos2,
    /// Day the dragged edge is measured against
    edge_date: NaiveDate,
    /// Hour of the dragged edge within `edge_date`
    edge_hour: f64,
}

impl ResizeContext {
    pub fn from_event(event: &CalendarEvent, edge: ResizeEdge, anchor: Pos2) -> Self {
        let (edge_date, edge_hour) = match edge {
            ResizeEdge::Top => (event.start.date(), hours_into_day(event.start)),
            // An end exactly at midnight belongs to the previous day's column
            ResizeEdge::Bottom
                if event.end.time() == NaiveTime::MIN && event.end.date() > event.start.date() =>
            {
                (event.end.date() - Duration::days(1), HOURS_PER_DAY)
            }
            ResizeEdge::Bottom => (event.end.date(), hours_into_day(event.end)),
        };

        Self {
            event_id: event.id,
            edge,
            original_start: event.start,
            original_end: event.end,
            anchor,
            edge_date,
            edge_hour,
        }
    }

    /// New `(start, end)` for the pointer at `pos`.
    ///
    /// Only the dragged edge moves. It is snapped to `increment_hours` and
    /// kept at least `min_duration` away from the fixed edge, or the original
    /// length if that is already shorter. Without vertical travel the event
    /// is returned unchanged.
    pub fn candidate(
        &self,
        pos: Pos2,
        mapper: &TimeMapper,
        increment_hours: f64,
        min_duration: Duration,
    ) -> (NaiveDateTime, NaiveDateTime) {
        let dy = pos.y - self.anchor.y;
        if dy == 0.0 {
            return (self.original_start, self.original_end);
        }

        let raw = mapper.pixel_to_hour(mapper.hour_to_pixel(self.edge_hour) + dy);
        let moved_edge = mapper.datetime_at(self.edge_date, snap(raw, increment_hours));
        let floor = min_duration
            .min(self.original_end - self.original_start)
            .max(Duration::zero());

        match self.edge {
            ResizeEdge::Top => {
                let latest = self.original_end - floor;
                (moved_edge.min(latest), self.original_end)
            }
            ResizeEdge::Bottom => {
                let earliest = self.original_start + floor;
                (self.original_start, moved_edge.max(earliest))
            }
        }
    }
}

fn hours_into_day(at: NaiveDateTime) -> f64 {
    let offset = at - at.date().and_time(NaiveTime::MIN);
    offset.num_seconds() as f64 / 3600.0
}

/// Hit zones of the resize handles of a timed event
pub struct HandleRects {
    pub top: Rect,
    pub bottom: Rect,
}

impl HandleRects {
    /// Create handle rects for a timed event.
    ///
    /// Each zone spans the full width and takes at most a quarter of the
    /// event height, leaving the middle of even a short event draggable.
    pub fn for_timed_event(event_rect: Rect) -> Self {
        let zone_height = (event_rect.height() / 4.0).min(HANDLE_SIZE);

        Self {
            top: Rect::from_min_size(
                Pos2::new(event_rect.left(), event_rect.top()),
                Vec2::new(event_rect.width(), zone_height),
            ),
            bottom: Rect::from_min_size(
                Pos2::new(event_rect.left(), event_rect.bottom() - zone_height),
                Vec2::new(event_rect.width(), zone_height),
            ),
        }
    }

    /// Check if a point hits a handle and return which one
    pub fn hit_test(&self, pos: Pos2) -> Option<ResizeEdge> {
        if self.top.contains(pos) {
            Some(ResizeEdge::Top)
        } else if self.bottom.contains(pos) {
            Some(ResizeEdge::Bottom)
        } else {
            None
        }
    }

    pub fn get(&self, edge: ResizeEdge) -> Rect {
        match edge {
            ResizeEdge::Top => self.top,
            ResizeEdge::Bottom => self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn meeting() -> CalendarEvent {
        CalendarEvent::new(1, "Meeting", at(10, 9, 0), at(10, 10, 0)).unwrap()
    }

    #[test]
    fn test_top_edge_to_quarter_past_eight() {
        let mapper = TimeMapper::default();
        let ctx = ResizeContext::from_event(&meeting(), ResizeEdge::Top, Pos2::new(0.0, 541.0));
        let (start, end) = ctx.candidate(
            Pos2::new(0.0, 496.0),
            &mapper,
            0.15,
            Duration::minutes(15),
        );
        assert_eq!(start, at(10, 8, 15));
        assert_eq!(end, at(10, 10, 0));
    }

    #[test]
    fn test_bottom_edge_keeps_start() {
        let mapper = TimeMapper::default();
        let ctx = ResizeContext::from_event(&meeting(), ResizeEdge::Bottom, Pos2::new(0.0, 598.0));
        let (start, end) = ctx.candidate(
            Pos2::new(0.0, 688.0),
            &mapper,
            0.15,
            Duration::minutes(15),
        );
        assert_eq!(start, at(10, 9, 0));
        // 10:00 + 1.5h = 11.5h, snapped to the 0.15h grid → 11.55h
        assert_eq!(end, at(10, 11, 33));
    }

    #[test]
    fn test_minimum_duration_prevents_inversion() {
        let mapper = TimeMapper::default();
        let ctx = ResizeContext::from_event(&meeting(), ResizeEdge::Bottom, Pos2::new(0.0, 600.0));
        let (start, end) =
            ctx.candidate(Pos2::new(0.0, 300.0), &mapper, 0.15, Duration::minutes(15));
        assert_eq!(start, at(10, 9, 0));
        assert_eq!(end, at(10, 9, 15));

        let ctx = ResizeContext::from_event(&meeting(), ResizeEdge::Top, Pos2::new(0.0, 540.0));
        let (start, end) =
            ctx.candidate(Pos2::new(0.0, 900.0), &mapper, 0.15, Duration::minutes(1));
        assert_eq!(start, at(10, 9, 59));
        assert_eq!(end, at(10, 10, 0));
    }

    #[test]
    fn test_no_vertical_travel_keeps_times() {
        let mapper = TimeMapper::default();
        let ctx = ResizeContext::from_event(&meeting(), ResizeEdge::Bottom, Pos2::new(0.0, 598.0));
        let (start, end) =
            ctx.candidate(Pos2::new(40.0, 598.0), &mapper, 0.15, Duration::minutes(15));
        assert_eq!((start, end), (at(10, 9, 0), at(10, 10, 0)));
    }

    #[test]
    fn test_short_event_untouched_without_travel() {
        let mapper = TimeMapper::default();
        let blip = CalendarEvent::new(3, "Blip", at(10, 9, 0), at(10, 9, 5)).unwrap();
        for edge in [ResizeEdge::Top, ResizeEdge::Bottom] {
            let ctx = ResizeContext::from_event(&blip, edge, Pos2::new(200.0, 541.0));
            let (start, end) =
                ctx.candidate(Pos2::new(200.0, 541.0), &mapper, 0.15, Duration::minutes(15));
            assert_eq!((start, end), (at(10, 9, 0), at(10, 9, 5)));
        }
    }

    #[test]
    fn test_short_event_never_shrinks_below_its_length() {
        let mapper = TimeMapper::default();
        let blip = CalendarEvent::new(3, "Blip", at(10, 9, 0), at(10, 9, 5)).unwrap();
        let ctx = ResizeContext::from_event(&blip, ResizeEdge::Top, Pos2::new(200.0, 541.0));
        let (start, end) =
            ctx.candidate(Pos2::new(200.0, 560.0), &mapper, 0.15, Duration::minutes(15));
        assert_eq!((start, end), (at(10, 9, 0), at(10, 9, 5)));

        let (start, _) =
            ctx.candidate(Pos2::new(200.0, 511.0), &mapper, 0.15, Duration::minutes(15));
        assert_eq!(start, at(10, 8, 33));
    }

    #[test]
    fn test_bottom_edge_at_midnight_measured_from_previous_day() {
        let mapper = TimeMapper::default();
        let late = CalendarEvent::new(2, "Late", at(10, 22, 0), at(11, 0, 0)).unwrap();
        let ctx = ResizeContext::from_event(&late, ResizeEdge::Bottom, Pos2::new(0.0, 1440.0));
        let (_, end) = ctx.candidate(Pos2::new(0.0, 1380.0), &mapper, 0.15, Duration::minutes(15));
        // 23.0h on the 0.15h grid is 22.95h
        assert_eq!(end, at(10, 22, 57));
    }

    #[test]
    fn test_handle_rects_for_timed_event() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 100.0), Vec2::new(200.0, 60.0));
        let handles = HandleRects::for_timed_event(rect);
        assert_eq!(handles.top.height(), HANDLE_SIZE);
        assert_eq!(handles.get(ResizeEdge::Bottom).bottom(), 160.0);
    }

    #[test]
    fn test_handle_hit_test() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 100.0), Vec2::new(200.0, 60.0));
        let handles = HandleRects::for_timed_event(rect);

        assert_eq!(handles.hit_test(Pos2::new(200.0, 102.0)), Some(ResizeEdge::Top));
        assert_eq!(handles.hit_test(Pos2::new(200.0, 157.0)), Some(ResizeEdge::Bottom));
        assert_eq!(handles.hit_test(Pos2::new(200.0, 130.0)), None);
    }

    #[test]
    fn test_short_event_keeps_draggable_middle() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(100.0, 20.0));
        let handles = HandleRects::for_timed_event(rect);
        assert_eq!(handles.top.height(), 5.0);
        assert_eq!(handles.hit_test(Pos2::new(50.0, 10.0)), None);
    }
}
