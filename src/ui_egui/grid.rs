//! Container geometry of a time grid.
//!
//! A `GridGeometry` is a plain snapshot of where the day columns sit on
//! screen. Interactions capture one at pointer-down and compute against it
//! for the rest of the gesture.

use chrono::NaiveDate;
use egui::{Pos2, Rect, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry {
    /// Area covered by the day columns; the top edge is 00:00
    pub rect: Rect,
    pub dates: Vec<NaiveDate>,
}

impl GridGeometry {
    pub fn new(rect: Rect, dates: Vec<NaiveDate>) -> Self {
        Self { rect, dates }
    }

    pub fn column_count(&self) -> usize {
        self.dates.len()
    }

    pub fn column_width(&self) -> f32 {
        if self.dates.is_empty() {
            return 0.0;
        }
        self.rect.width() / self.dates.len() as f32
    }

    pub fn column_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.dates.len() {
            return None;
        }
        let width = self.column_width();
        Some(Rect::from_min_size(
            Pos2::new(self.rect.left() + width * index as f32, self.rect.top()),
            Vec2::new(width, self.rect.height()),
        ))
    }

    /// Column under `x`, clamped to the visible range
    pub fn column_index_at(&self, x: f32) -> Option<usize> {
        let last = self.dates.len().checked_sub(1)?;
        let width = self.column_width();
        if width <= 0.0 || !x.is_finite() {
            return Some(0);
        }
        let raw = ((x - self.rect.left()) / width).floor();
        Some(raw.clamp(0.0, last as f32) as usize)
    }

    pub fn date_at(&self, x: f32) -> Option<NaiveDate> {
        self.column_index_at(x).map(|i| self.dates[i])
    }

    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().position(|d| *d == date)
    }

    /// Vertical offset of `pos` from the 00:00 line
    pub fn offset_y(&self, pos: Pos2) -> f32 {
        pos.y - self.rect.top()
    }
}
