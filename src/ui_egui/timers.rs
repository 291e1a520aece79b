//! Fire-once, cancellable timers owned by a timeline view.
//!
//! Nothing here spawns threads; the view polls with the current `Instant`.

use std::time::{Duration, Instant};

/// Whether a click reaching the slot-click boundary may act.
///
/// Passed explicitly into click handling so suppression never depends on
/// shared global state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickGuard {
    Allowed,
    Suppressed,
}

impl ClickGuard {
    pub fn is_allowed(self) -> bool {
        self == ClickGuard::Allowed
    }
}

/// Short window after a drag/resize commit during which the click produced
/// by the same pointer release is ignored.
#[derive(Clone, Debug, Default)]
pub struct ClickCooldown {
    until: Option<Instant>,
}

impl ClickCooldown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, now: Instant, length: Duration) {
        self.until = Some(now + length);
    }

    pub fn cancel(&mut self) {
        self.until = None;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.map_or(false, |until| now < until)
    }

    pub fn guard(&mut self, now: Instant) -> ClickGuard {
        if self.is_active(now) {
            ClickGuard::Suppressed
        } else {
            self.until = None;
            ClickGuard::Allowed
        }
    }
}

/// Initial scroll request that fires once after a short delay, giving the
/// host a frame to lay out the grid first.
#[derive(Clone, Debug, Default)]
pub struct DeferredScroll {
    pending: Option<(Instant, f32)>,
}

impl DeferredScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, offset: f32) {
        self.pending = Some((now + delay, offset));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the scroll offset once the delay has elapsed, then disarms.
    pub fn poll(&mut self, now: Instant) -> Option<f32> {
        match self.pending {
            Some((due, offset)) if now >= due => {
                self.pending = None;
                Some(offset)
            }
            _ => None,
        }
    }
}
