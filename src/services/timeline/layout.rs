//! Overlap-aware column layout for a single day.
//!
//! Events are swept in start order into clusters of transitively
//! overlapping intervals. Inside a cluster each event takes the lowest
//! column whose previous occupant has already ended (first-fit). This is a
//! greedy packing that is deterministic but not guaranteed to use the
//! minimum number of columns for every input, which is fine for a
//! calendar grid but not for general interval scheduling.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use super::mapper::TimeMapper;
use crate::models::event::CalendarEvent;
use crate::models::geometry::{EventGeometry, LayoutKey};
use crate::models::settings::TimelineSettings;

/// Column assignment produced by [`pack_columns`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSlot {
    pub column: usize,
    pub total_columns: usize,
    /// Index of the cluster within the input, in sweep order
    pub cluster: usize,
}

/// Assign columns to half-open intervals `[start, end)` that are already
/// sorted by start ascending.
///
/// Intervals whose end precedes their start are treated as zero-length.
pub fn pack_columns<T: Ord + Copy>(intervals: &[(T, T)]) -> Vec<ColumnSlot> {
    let mut slots = Vec::with_capacity(intervals.len());
    let mut cluster_start = 0;
    let mut cluster = 0;
    let mut running_end: Option<T> = None;
    // End of the most recent interval placed in each column
    let mut column_ends: Vec<T> = Vec::new();

    for (index, &(start, end)) in intervals.iter().enumerate() {
        let end = end.max(start);

        if running_end.map_or(false, |max_end| start >= max_end) {
            close_cluster(&mut slots[cluster_start..index], column_ends.len());
            cluster_start = index;
            cluster += 1;
            column_ends.clear();
        }

        let column = match column_ends.iter().position(|&col_end| col_end <= start) {
            Some(free) => {
                column_ends[free] = end;
                free
            }
            None => {
                column_ends.push(end);
                column_ends.len() - 1
            }
        };

        running_end = Some(running_end.map_or(end, |max_end| max_end.max(end)));
        slots.push(ColumnSlot {
            column,
            total_columns: 0,
            cluster,
        });
    }

    close_cluster(&mut slots[cluster_start..], column_ends.len());
    slots
}

fn close_cluster(slots: &mut [ColumnSlot], width: usize) {
    for slot in slots {
        slot.total_columns = width.max(1);
    }
}

/// Geometry of every timed event on one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    date: NaiveDate,
    min_height: f32,
    geometries: Vec<EventGeometry>,
    index: HashMap<LayoutKey, usize>,
}

impl DayLayout {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Geometries in sweep order (start, end, key)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &EventGeometry> + '_ {
        self.geometries.iter()
    }

    pub fn get(&self, key: LayoutKey) -> Option<&EventGeometry> {
        self.index.get(&key).map(|&i| &self.geometries[i])
    }

    /// Geometry for `key`, or a single-column full-width default when the
    /// key is not part of this layout (e.g. the original of an event that
    /// is currently being dragged).
    pub fn geometry_or_default(&self, key: LayoutKey) -> EventGeometry {
        match self.get(key) {
            Some(geometry) => *geometry,
            None => {
                log::trace!("No geometry for {:?} on {}, using default", key, self.date);
                EventGeometry::fallback(key, self.min_height)
            }
        }
    }
}

struct LayoutEntry {
    key: LayoutKey,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Lay out the timed events that intersect `date`.
///
/// When `preview` is given it stands in for the stored event with the same
/// id on every day, and is placed under [`LayoutKey::Preview`] on the days
/// it touches, so live drag feedback goes through the same packing as the
/// static grid.
pub fn layout_day<'a, I>(
    date: NaiveDate,
    events: I,
    preview: Option<&'a CalendarEvent>,
    settings: &TimelineSettings,
) -> DayLayout
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    let mapper = TimeMapper::new(settings.pixels_per_hour);
    let replaced = preview.map(|p| p.id);

    let stored = events
        .into_iter()
        .filter(|event| Some(event.id) != replaced)
        .map(|event| (LayoutKey::Event(event.id), event));
    let previewed = preview.map(|event| (LayoutKey::Preview(event.id), event));

    let mut entries: Vec<LayoutEntry> = stored
        .chain(previewed)
        .filter(|(_, event)| !event.all_day)
        .filter_map(|(key, event)| {
            event
                .segment_for_date(date)
                .map(|(start, end)| LayoutEntry { key, start, end })
        })
        .collect();

    entries.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(a.end.cmp(&b.end))
            .then(a.key.cmp(&b.key))
    });

    let intervals: Vec<(NaiveDateTime, NaiveDateTime)> =
        entries.iter().map(|e| (e.start, e.end)).collect();
    let slots = pack_columns(&intervals);

    let min_height = settings.min_visual_height_px;
    let geometries: Vec<EventGeometry> = entries
        .iter()
        .zip(slots)
        .map(|(entry, slot)| {
            let top = mapper.hour_to_pixel(mapper.hour_of(date, entry.start));
            let bottom = mapper.hour_to_pixel(mapper.hour_of(date, entry.end));
            let total = slot.total_columns as f32;
            EventGeometry {
                key: entry.key,
                top,
                height: (bottom - top).max(min_height),
                column: slot.column,
                total_columns: slot.total_columns,
                left: slot.column as f32 / total * 100.0,
                width: 100.0 / total,
                overlap_level: slot.total_columns,
            }
        })
        .collect();

    let index = geometries
        .iter()
        .enumerate()
        .map(|(i, geometry)| (geometry.key, i))
        .collect();

    DayLayout {
        date,
        min_height,
        geometries,
        index,
    }
}
