// Property-based tests for the layout engine, quantizer and gestures
// Random event sets and pointer positions must keep the grid invariants

use calendar_timeline::models::event::CalendarEvent;
use calendar_timeline::models::geometry::LayoutKey;
use calendar_timeline::models::settings::TimelineSettings;
use calendar_timeline::services::timeline::{layout_day, pack_columns, snap, TimeMapper};
use calendar_timeline::ui_egui::drag::DragContext;
use calendar_timeline::ui_egui::grid::GridGeometry;
use calendar_timeline::ui_egui::resize::{ResizeContext, ResizeEdge};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use egui::{Pos2, Rect, Vec2};
use proptest::prelude::*;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn minute(m: i64) -> NaiveDateTime {
    day().and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(m)
}

/// Up to 12 events of 15-240 minutes starting anywhere in the day
fn event_set() -> impl Strategy<Value = Vec<CalendarEvent>> {
    prop::collection::vec((0i64..1380, 15i64..240), 0..12).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (start, len))| {
                let end = (start + len).min(1440);
                CalendarEvent::new(i as i64 + 1, "Generated", minute(start), minute(end)).unwrap()
            })
            .collect()
    })
}

/// Start minute within the first day and a length from one minute up to
/// three days, so short, overnight and multi-day events all occur
fn span() -> impl Strategy<Value = (i64, i64)> {
    prop_oneof![
        (0i64..1440, 1i64..15),
        (0i64..1380, 15i64..240),
        (1200i64..1440, 60i64..600),
        (0i64..1440, 1440i64..4320),
    ]
}

/// Seven columns of 100px starting on the 10th
fn week_grid() -> GridGeometry {
    let dates: Vec<NaiveDate> = day().iter_days().take(7).collect();
    GridGeometry::new(Rect::from_min_size(Pos2::ZERO, Vec2::new(700.0, 1440.0)), dates)
}

fn overlaps(a: &CalendarEvent, b: &CalendarEvent) -> bool {
    a.start < b.end && b.start < a.end
}

proptest! {
    /// Property: overlapping events never share a column
    #[test]
    fn prop_overlapping_events_get_distinct_columns(events in event_set()) {
        let layout = layout_day(day(), &events, None, &TimelineSettings::default());
        prop_assert_eq!(layout.len(), events.len());

        for a in &events {
            for b in &events {
                if a.id == b.id || !overlaps(a, b) {
                    continue;
                }
                let ga = layout.get(LayoutKey::Event(a.id)).unwrap();
                let gb = layout.get(LayoutKey::Event(b.id)).unwrap();
                prop_assert_ne!(ga.column, gb.column);
                prop_assert!(ga.column < ga.total_columns);
            }
        }
    }

    /// Property: an event overlapping nothing spans the whole column
    #[test]
    fn prop_isolated_events_are_full_width(events in event_set()) {
        let layout = layout_day(day(), &events, None, &TimelineSettings::default());
        for event in &events {
            if events.iter().any(|other| other.id != event.id && overlaps(event, other)) {
                continue;
            }
            let geometry = layout.get(LayoutKey::Event(event.id)).unwrap();
            prop_assert_eq!(geometry.column, 0);
            prop_assert_eq!(geometry.total_columns, 1);
        }
    }

    /// Property: layout does not depend on input order
    #[test]
    fn prop_layout_is_deterministic(events in event_set()) {
        let settings = TimelineSettings::default();
        let forward = layout_day(day(), &events, None, &settings);
        let reversed: Vec<CalendarEvent> = events.iter().rev().cloned().collect();
        let backward = layout_day(day(), &reversed, None, &settings);

        for event in &events {
            let key = LayoutKey::Event(event.id);
            prop_assert_eq!(forward.get(key), backward.get(key));
        }
    }

    /// Property: column packing keeps every assignment inside its width
    #[test]
    fn prop_pack_columns_within_width(mut spans in prop::collection::vec((0u32..1000, 0u32..200), 0..30)) {
        let mut intervals: Vec<(u32, u32)> = spans.drain(..).map(|(s, l)| (s, s + l)).collect();
        intervals.sort();
        for slot in pack_columns(&intervals) {
            prop_assert!(slot.column < slot.total_columns);
        }
    }

    /// Property: snapping twice equals snapping once
    #[test]
    fn prop_snap_is_idempotent(hour in 0.0f64..24.0, increment in prop::sample::select(vec![0.1, 0.15, 0.25, 0.5])) {
        let once = snap(hour, increment);
        prop_assert!((snap(once, increment) - once).abs() < 1e-9);
    }

    /// Property: hour -> pixel -> hour round-trips within float tolerance
    #[test]
    fn prop_mapper_round_trip(hour in 0.0f64..=24.0, pph in 20.0f32..200.0) {
        let mapper = TimeMapper::new(pph);
        let back = mapper.pixel_to_hour(mapper.hour_to_pixel(hour));
        prop_assert!((back - hour).abs() < 1e-3);
    }

    /// Property: dragging never changes an event's duration, including
    /// events that cross midnight or span several days
    #[test]
    fn prop_drag_preserves_duration(
        (start, len) in span(),
        dx in -300.0f32..300.0,
        dy in -800.0f32..800.0,
    ) {
        let event = CalendarEvent::new(1, "Drag", minute(start), minute(start + len)).unwrap();
        let anchor = Pos2::new(50.0, 700.0);
        let ctx = DragContext::from_event(&event, anchor);

        let (new_start, new_end) =
            ctx.candidate(anchor + Vec2::new(dx, dy), &week_grid(), &TimeMapper::default(), 0.1);
        prop_assert_eq!(new_end - new_start, event.duration());
    }

    /// Property: without vertical travel a drag only shifts by whole days,
    /// and without any travel it changes nothing
    #[test]
    fn prop_drag_without_vertical_travel_keeps_time_of_day(
        (start, len) in span(),
        dx in -300.0f32..300.0,
    ) {
        let event = CalendarEvent::new(1, "Drag", minute(start), minute(start + len)).unwrap();
        let anchor = Pos2::new(350.0, 400.0);
        let ctx = DragContext::from_event(&event, anchor);
        let mapper = TimeMapper::default();

        let (new_start, new_end) = ctx.candidate(anchor, &week_grid(), &mapper, 0.1);
        prop_assert_eq!((new_start, new_end), (event.start, event.end));

        let (shifted, _) = ctx.candidate(anchor + Vec2::new(dx, 0.0), &week_grid(), &mapper, 0.1);
        prop_assert_eq!((shifted - event.start).num_seconds() % 86_400, 0);
    }

    /// Property: resizing moves only the dragged edge and never shrinks an
    /// event below the minimum or its own original length
    #[test]
    fn prop_resize_preserves_fixed_edge(
        (start, len) in span(),
        dy in -600.0f32..600.0,
        top in any::<bool>(),
    ) {
        let event = CalendarEvent::new(1, "Resize", minute(start), minute(start + len)).unwrap();
        let edge = if top { ResizeEdge::Top } else { ResizeEdge::Bottom };
        let anchor = Pos2::new(50.0, 300.0);
        let ctx = ResizeContext::from_event(&event, edge, anchor);
        let min_duration = Duration::minutes(15);

        let (new_start, new_end) = ctx.candidate(
            anchor + Vec2::new(0.0, dy),
            &TimeMapper::default(),
            0.15,
            min_duration,
        );
        match edge {
            ResizeEdge::Top => prop_assert_eq!(new_end, event.end),
            ResizeEdge::Bottom => prop_assert_eq!(new_start, event.start),
        }
        prop_assert!(new_end - new_start >= min_duration.min(event.duration()));
    }

    /// Property: pressing and releasing a handle in place changes nothing,
    /// even for events shorter than the resize minimum
    #[test]
    fn prop_resize_without_travel_is_noop(
        (start, len) in span(),
        dx in -50.0f32..50.0,
        top in any::<bool>(),
    ) {
        let event = CalendarEvent::new(1, "Resize", minute(start), minute(start + len)).unwrap();
        let edge = if top { ResizeEdge::Top } else { ResizeEdge::Bottom };
        let anchor = Pos2::new(50.0, 300.0);
        let ctx = ResizeContext::from_event(&event, edge, anchor);

        let candidate = ctx.candidate(
            anchor + Vec2::new(dx, 0.0),
            &TimeMapper::default(),
            0.15,
            Duration::minutes(15),
        );
        prop_assert_eq!(candidate, (event.start, event.end));
    }
}
