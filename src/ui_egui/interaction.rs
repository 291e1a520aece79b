//! Pointer interaction state machine for timed events.
//!
//! ```text
//! Idle ──down on body──▶ PendingClick ──moved > threshold──▶ Dragging
//!  │                          │                                  │
//!  │                          └──up──▶ Idle (no-op)              └──up──▶ commit
//!  └──down on handle──▶ Resizing ──────────────────────────────────up──▶ commit
//! ```
//!
//! A press that is released before crossing the drag threshold does
//! nothing: opening an event on click is intentionally not offered, so the
//! only gestures on an event are move and resize.

use chrono::{Duration, NaiveDateTime};
use egui::Pos2;

use super::drag::DragContext;
use super::grid::GridGeometry;
use super::resize::{ResizeContext, ResizeEdge};
use crate::models::event::{CalendarEvent, EventId};
use crate::models::settings::TimelineSettings;
use crate::services::timeline::TimeMapper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PendingClick,
    Dragging,
    Resizing,
}

/// What a pointer-down landed on
#[derive(Clone, Debug, PartialEq)]
pub enum PointerTarget {
    EventBody(CalendarEvent),
    ResizeHandle(CalendarEvent, ResizeEdge),
}

impl PointerTarget {
    pub fn event(&self) -> &CalendarEvent {
        match self {
            PointerTarget::EventBody(event) | PointerTarget::ResizeHandle(event, _) => event,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitKind {
    Move,
    Resize(ResizeEdge),
}

/// Final time range of a completed gesture
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    pub event_id: EventId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: CommitKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerUpOutcome {
    /// No session was open
    NoSession,
    /// A press on an event was released without becoming a drag
    Released,
    Committed(Commit),
}

#[derive(Clone, Debug)]
enum Gesture {
    Move(DragContext),
    Resize(ResizeContext),
}

/// The single live gesture of a view
#[derive(Clone, Debug)]
pub struct InteractionSession {
    phase: Phase,
    anchor: Pos2,
    origin: CalendarEvent,
    grid: GridGeometry,
    gesture: Gesture,
    preview: Option<CalendarEvent>,
}

impl InteractionSession {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn origin(&self) -> &CalendarEvent {
        &self.origin
    }

    pub fn grid(&self) -> &GridGeometry {
        &self.grid
    }

    pub fn edge(&self) -> Option<ResizeEdge> {
        match &self.gesture {
            Gesture::Resize(ctx) => Some(ctx.edge),
            Gesture::Move(_) => None,
        }
    }

    pub fn preview(&self) -> Option<&CalendarEvent> {
        self.preview.as_ref()
    }
}

#[derive(Clone, Copy, Debug)]
struct Tuning {
    mapper: TimeMapper,
    move_snap_hours: f64,
    resize_snap_hours: f64,
    drag_threshold: f32,
    min_duration: Duration,
}

impl Tuning {
    fn candidate(&self, session: &mut InteractionSession, pos: Pos2) -> (NaiveDateTime, NaiveDateTime) {
        let grid = &session.grid;
        match &mut session.gesture {
            Gesture::Move(ctx) => ctx.update_hover(pos, grid, &self.mapper, self.move_snap_hours),
            Gesture::Resize(ctx) => {
                ctx.candidate(pos, &self.mapper, self.resize_snap_hours, self.min_duration)
            }
        }
    }
}

pub struct TimelineInteraction {
    tuning: Tuning,
    session: Option<InteractionSession>,
}

impl TimelineInteraction {
    pub fn new(settings: &TimelineSettings) -> Self {
        Self {
            tuning: Tuning {
                mapper: TimeMapper::new(settings.pixels_per_hour),
                move_snap_hours: settings.move_snap_hours,
                resize_snap_hours: settings.resize_snap_hours,
                drag_threshold: settings.drag_threshold_px,
                min_duration: Duration::minutes(settings.min_resize_minutes.max(1)),
            },
            session: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Idle, |s| s.phase)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    /// Live preview of the event under manipulation, if any
    pub fn preview(&self) -> Option<&CalendarEvent> {
        self.session.as_ref().and_then(|s| s.preview.as_ref())
    }

    /// Open a session. Returns `false` if one is already open.
    pub fn pointer_down(&mut self, target: PointerTarget, pos: Pos2, grid: GridGeometry) -> bool {
        if let Some(session) = &self.session {
            log::warn!(
                "Ignoring pointer-down while event {} is in {:?}",
                session.origin.id,
                session.phase
            );
            return false;
        }

        let (phase, gesture, origin) = match target {
            PointerTarget::EventBody(event) => (
                Phase::PendingClick,
                Gesture::Move(DragContext::from_event(&event, pos)),
                event,
            ),
            PointerTarget::ResizeHandle(event, edge) => (
                Phase::Resizing,
                Gesture::Resize(ResizeContext::from_event(&event, edge, pos)),
                event,
            ),
        };

        log::debug!("Event {}: Idle -> {:?}", origin.id, phase);
        self.session = Some(InteractionSession {
            phase,
            anchor: pos,
            origin,
            grid,
            gesture,
            preview: None,
        });
        true
    }

    /// Advance the open session for the pointer at `pos`.
    ///
    /// The preview depends only on the session and `pos`, so repeating a
    /// move with the same position yields the same preview.
    pub fn pointer_move(&mut self, pos: Pos2) -> Option<&CalendarEvent> {
        let tuning = self.tuning;
        let session = self.session.as_mut()?;

        if session.phase == Phase::PendingClick {
            let travelled = (pos - session.anchor).length();
            if travelled <= tuning.drag_threshold {
                return None;
            }
            log::debug!(
                "Event {}: PendingClick -> Dragging after {:.1}px",
                session.origin.id,
                travelled
            );
            session.phase = Phase::Dragging;
        }

        let (start, end) = tuning.candidate(session, pos);
        session.preview = Some(session.origin.with_times(start, end));
        session.preview.as_ref()
    }

    /// Close the session. A drag or resize yields its commit exactly once.
    pub fn pointer_up(&mut self, pos: Pos2) -> PointerUpOutcome {
        let tuning = self.tuning;
        let Some(mut session) = self.session.take() else {
            return PointerUpOutcome::NoSession;
        };

        match session.phase {
            Phase::Dragging | Phase::Resizing => {
                let (start, end) = tuning.candidate(&mut session, pos);
                let kind = session.edge().map_or(CommitKind::Move, CommitKind::Resize);
                log::debug!(
                    "Event {}: {:?} committed {} - {}",
                    session.origin.id,
                    kind,
                    start,
                    end
                );
                PointerUpOutcome::Committed(Commit {
                    event_id: session.origin.id,
                    start,
                    end,
                    kind,
                })
            }
            Phase::PendingClick | Phase::Idle => {
                log::debug!("Event {}: released before drag threshold", session.origin.id);
                PointerUpOutcome::Released
            }
        }
    }

    /// Abandon the open session without committing
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("Event {}: {:?} cancelled", session.origin.id, session.phase);
        }
    }
}
