// Geometry module
// Derived per-event placement inside a day column

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::event::EventId;

/// Identifies an entry in a day layout.
///
/// The live drag/resize preview is laid out under its own key so it can
/// never be confused with the stored event it stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum LayoutKey {
    Event(EventId),
    Preview(EventId),
}

impl LayoutKey {
    pub fn event_id(&self) -> EventId {
        match self {
            LayoutKey::Event(id) | LayoutKey::Preview(id) => *id,
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, LayoutKey::Preview(_))
    }
}

/// Placement of one event within its day column.
///
/// `top` and `height` are pixels from the start of the day; `left` and
/// `width` are percentages of the column width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventGeometry {
    pub key: LayoutKey,
    pub top: f32,
    pub height: f32,
    pub column: usize,
    pub total_columns: usize,
    pub left: f32,
    pub width: f32,
    /// Styling hint, equal to `total_columns`
    pub overlap_level: usize,
}

impl EventGeometry {
    /// Single-column, full-width placement used when a key is not part of
    /// the current layout.
    pub fn fallback(key: LayoutKey, min_height: f32) -> Self {
        Self {
            key,
            top: 0.0,
            height: min_height,
            column: 0,
            total_columns: 1,
            left: 0.0,
            width: 100.0,
            overlap_level: 1,
        }
    }

    /// Map this geometry onto a day column's on-screen rect, whose top edge
    /// is 00:00.
    pub fn rect_in(&self, column_rect: Rect) -> Rect {
        let x = column_rect.left() + column_rect.width() * self.left / 100.0;
        let w = column_rect.width() * self.width / 100.0;
        Rect::from_min_size(
            Pos2::new(x, column_rect.top() + self.top),
            Vec2::new(w, self.height),
        )
    }
}
