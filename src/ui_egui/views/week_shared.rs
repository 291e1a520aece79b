//! Shared state and pointer handling for the day and week time grids.
//!
//! A `TimelineView` owns the event snapshot, the container geometry, the
//! single interaction session and the view's timers. Day and week views
//! differ only in which dates they show (see `day_view` and `week_view`).

use chrono::{Duration as ChronoDuration, NaiveDate, NaiveTime};
use egui::{Pos2, Rect, Vec2};
use std::time::{Duration, Instant};

use super::{day_view, week_view, SlotCreateRequest, TimelineHandler, ViewKind};
use crate::models::event::CalendarEvent;
use crate::models::geometry::LayoutKey;
use crate::models::settings::TimelineSettings;
use crate::services::timeline::{floor_to_slot, layout_day, DayLayout, TimeMapper, HOURS_PER_DAY};
use crate::ui_egui::grid::GridGeometry;
use crate::ui_egui::input::PointerInput;
use crate::ui_egui::interaction::{
    Commit, InteractionSession, Phase, PointerTarget, PointerUpOutcome, TimelineInteraction,
};
use crate::ui_egui::resize::HandleRects;
use crate::ui_egui::timers::{ClickCooldown, ClickGuard, DeferredScroll};
use crate::utils::date::format_time_label;

/// Column width used until the host reports the real grid rect
pub const DEFAULT_COLUMN_WIDTH: f32 = 120.0;

pub struct TimelineView {
    kind: ViewKind,
    dates: Vec<NaiveDate>,
    settings: TimelineSettings,
    mapper: TimeMapper,
    events: Vec<CalendarEvent>,
    grid_rect: Rect,
    interaction: TimelineInteraction,
    cooldown: ClickCooldown,
    scroll: DeferredScroll,
    /// Press on empty grid space that may become a slot click
    slot_press: Option<Pos2>,
}

impl TimelineView {
    pub(super) fn with_dates(
        kind: ViewKind,
        dates: Vec<NaiveDate>,
        settings: TimelineSettings,
    ) -> Self {
        if let Err(err) = settings.validate() {
            log::warn!("Timeline view created with invalid settings: {}", err);
        }
        let mapper = TimeMapper::new(settings.pixels_per_hour);
        let grid_rect = Rect::from_min_size(
            Pos2::ZERO,
            Vec2::new(DEFAULT_COLUMN_WIDTH * dates.len() as f32, mapper.day_height()),
        );

        Self {
            kind,
            dates,
            interaction: TimelineInteraction::new(&settings),
            settings,
            mapper,
            events: Vec::new(),
            grid_rect,
            cooldown: ClickCooldown::new(),
            scroll: DeferredScroll::new(),
            slot_press: None,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn settings(&self) -> &TimelineSettings {
        &self.settings
    }

    pub fn mapper(&self) -> &TimeMapper {
        &self.mapper
    }

    /// Replace the event snapshot.
    ///
    /// A gesture whose event is no longer present is abandoned.
    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        let orphaned = self
            .interaction
            .session()
            .map(|s| s.origin().id)
            .filter(|id| !events.iter().any(|e| e.id == *id));
        if let Some(id) = orphaned {
            log::debug!("Event {} vanished from snapshot, cancelling gesture", id);
            self.interaction.cancel();
        }
        self.events = events;
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Report where the day columns are drawn. The top edge is 00:00.
    pub fn set_grid_rect(&mut self, rect: Rect) {
        self.grid_rect = rect;
    }

    pub fn grid(&self) -> GridGeometry {
        GridGeometry::new(self.grid_rect, self.dates.clone())
    }

    /// Show the period containing `date`, abandoning any open gesture
    pub fn show_date(&mut self, date: NaiveDate) {
        let dates = match self.kind {
            ViewKind::Day => day_view::day_dates(date),
            ViewKind::Week => week_view::week_dates(date, self.settings.first_day_of_week),
        };
        if dates != self.dates {
            self.interaction.cancel();
            self.slot_press = None;
            self.dates = dates;
        }
    }

    /// Move by `periods` days (day view) or weeks (week view)
    pub fn step(&mut self, periods: i64) {
        let days = match self.kind {
            ViewKind::Day => periods,
            ViewKind::Week => periods * 7,
        };
        if let Some(first) = self.dates.first().copied() {
            self.show_date(first + ChronoDuration::days(days));
        }
    }

    pub fn phase(&self) -> Phase {
        self.interaction.phase()
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        self.interaction.session()
    }

    pub fn preview(&self) -> Option<&CalendarEvent> {
        self.interaction.preview()
    }

    /// Layout of one day, including the live preview
    pub fn layout_for(&self, date: NaiveDate) -> DayLayout {
        layout_day(date, &self.events, self.interaction.preview(), &self.settings)
    }

    pub fn layouts(&self) -> Vec<DayLayout> {
        self.dates.iter().map(|date| self.layout_for(*date)).collect()
    }

    /// On-screen rect of a laid-out entry in the column of `date`
    pub fn entry_rect(&self, layout: &DayLayout, key: LayoutKey) -> Option<Rect> {
        let grid = self.grid();
        let column = grid.column_rect(grid.index_of(layout.date())?)?;
        Some(layout.geometry_or_default(key).rect_in(column))
    }

    /// Event (and handle, if any) under `pos`. The preview is never a target.
    pub fn hit_test(&self, pos: Pos2) -> Option<PointerTarget> {
        let grid = self.grid();
        let index = grid.column_index_at(pos.x)?;
        let column = grid.column_rect(index)?;
        if !column.contains(pos) {
            return None;
        }

        let layout = self.layout_for(grid.dates[index]);
        // Later entries are painted on top
        let target = layout
            .iter()
            .rev()
            .filter(|geometry| !geometry.key.is_preview())
            .find_map(|geometry| {
                let rect = geometry.rect_in(column);
                if !rect.contains(pos) {
                    return None;
                }
                let event = self.events.iter().find(|e| e.id == geometry.key.event_id())?;
                Some(match HandleRects::for_timed_event(rect).hit_test(pos) {
                    Some(edge) => PointerTarget::ResizeHandle(event.clone(), edge),
                    None => PointerTarget::EventBody(event.clone()),
                })
            });
        target
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.interaction.is_active() {
            log::warn!("Pointer-down at {:?} while a gesture is open, ignoring", pos);
            return;
        }

        match self.hit_test(pos) {
            Some(target) => {
                self.slot_press = None;
                self.interaction.pointer_down(target, pos, self.grid());
            }
            None if self.grid_rect.contains(pos) => self.slot_press = Some(pos),
            None => self.slot_press = None,
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.interaction.pointer_move(pos);
    }

    /// Finish the current gesture.
    ///
    /// A completed drag or resize is reported through
    /// `TimelineHandler::on_event_resize` exactly once and starts the click
    /// cooldown. A short press on empty grid space becomes a slot click.
    pub fn pointer_up(
        &mut self,
        pos: Pos2,
        now: Instant,
        handler: &mut dyn TimelineHandler,
    ) -> Option<Commit> {
        let slot_press = self.slot_press.take();

        match self.interaction.pointer_up(pos) {
            PointerUpOutcome::Committed(commit) => {
                handler.on_event_resize(commit.event_id, commit.start, commit.end);
                self.cooldown
                    .start(now, Duration::from_millis(self.settings.click_cooldown_ms));
                Some(commit)
            }
            PointerUpOutcome::Released => None,
            PointerUpOutcome::NoSession => {
                let within_threshold = slot_press
                    .map_or(false, |press| (pos - press).length() <= self.settings.drag_threshold_px);
                if within_threshold {
                    let guard = self.click_guard(now);
                    self.handle_slot_click(pos, guard, handler);
                }
                None
            }
        }
    }

    /// Abandon any open gesture and pending slot press
    pub fn cancel_interaction(&mut self) {
        self.interaction.cancel();
        self.slot_press = None;
    }

    /// Feed translated pointer input through the view in order
    pub fn handle_input(
        &mut self,
        inputs: &[PointerInput],
        now: Instant,
        handler: &mut dyn TimelineHandler,
    ) -> Vec<Commit> {
        let mut commits = Vec::new();
        for input in inputs {
            match *input {
                PointerInput::Down(pos) => self.pointer_down(pos),
                PointerInput::Move(pos) => self.pointer_move(pos),
                PointerInput::Up(pos) => commits.extend(self.pointer_up(pos, now, handler)),
                PointerInput::Cancel => self.cancel_interaction(),
            }
        }
        commits
    }

    /// Suppression token for click handling at `now`
    pub fn click_guard(&mut self, now: Instant) -> ClickGuard {
        self.cooldown.guard(now)
    }

    /// Create-event request for a click at `pos`, if it lands on empty grid
    pub fn slot_request(&self, pos: Pos2) -> Option<SlotCreateRequest> {
        let grid = self.grid();
        if !grid.rect.contains(pos) {
            return None;
        }
        let index = grid.column_index_at(pos.x)?;
        let date = grid.dates[index];
        let column = grid.column_rect(index)?;

        let slot_hours = self.settings.slot_minutes as f64 / 60.0;
        let hour = self.mapper.pixel_to_hour(grid.offset_y(pos));
        let start_hour = floor_to_slot(hour, self.settings.slot_minutes)
            .min((HOURS_PER_DAY - slot_hours).max(0.0));

        let start = self.mapper.datetime_at(date, start_hour);
        let day_end = date.and_time(NaiveTime::MIN) + ChronoDuration::days(1);
        let end = (start + ChronoDuration::minutes(self.settings.default_event_minutes as i64))
            .min(day_end);

        let format = self.settings.time_format;
        let top = column.top() + self.mapper.hour_to_pixel(start_hour);
        let anchor = Rect::from_min_size(
            Pos2::new(column.left(), top),
            Vec2::new(column.width(), self.mapper.hour_to_pixel(slot_hours)),
        );

        Some(SlotCreateRequest {
            date,
            start,
            end,
            start_label: format_time_label(date, start, format),
            end_label: format_time_label(date, end, format),
            anchor,
        })
    }

    /// Handle a click on the grid. Only empty slots react, and only when
    /// `guard` allows it. Returns whether `on_event_create` was invoked.
    pub fn handle_slot_click(
        &self,
        pos: Pos2,
        guard: ClickGuard,
        handler: &mut dyn TimelineHandler,
    ) -> bool {
        if !guard.is_allowed() {
            log::debug!("Slot click at {:?} suppressed by cooldown", pos);
            return false;
        }
        if self.hit_test(pos).is_some() {
            return false;
        }
        match self.slot_request(pos) {
            Some(request) => {
                log::debug!(
                    "Empty slot clicked on {} at {}",
                    request.date,
                    request.start_label
                );
                handler.on_event_create(request);
                true
            }
            None => false,
        }
    }

    /// Arm the one-shot initial scroll towards the earliest visible event,
    /// or the configured default hour when the period is empty.
    pub fn schedule_initial_scroll(&mut self, now: Instant) {
        let earliest = self
            .dates
            .iter()
            .flat_map(|date| {
                self.events
                    .iter()
                    .filter(|e| !e.all_day)
                    .filter_map(move |e| e.segment_for_date(*date).map(|(start, _)| (*date, start)))
            })
            .map(|(date, start)| self.mapper.hour_of(date, start))
            .fold(None, |min: Option<f64>, hour| Some(min.map_or(hour, |m| m.min(hour))));

        let hour = earliest.unwrap_or(self.settings.initial_scroll_hour);
        let offset = self.mapper.hour_to_pixel(hour);
        self.scroll.schedule(
            now,
            Duration::from_millis(self.settings.initial_scroll_delay_ms),
            offset,
        );
    }

    /// Scroll offset (px from 00:00) once the initial scroll is due
    pub fn poll_scroll(&mut self, now: Instant) -> Option<f32> {
        self.scroll.poll(now)
    }

    pub fn is_cooling_down(&self, now: Instant) -> bool {
        self.cooldown.is_active(now)
    }

    /// Clear timers and any open gesture so nothing fires after the view
    /// is gone.
    pub fn teardown(&mut self) {
        self.cooldown.cancel();
        self.scroll.cancel();
        self.cancel_interaction();
    }
}

impl Drop for TimelineView {
    fn drop(&mut self) {
        self.teardown();
    }
}
