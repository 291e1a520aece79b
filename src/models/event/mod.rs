// Event module
// Timeline event model consumed by the layout engine and interaction views

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable identifier of a calendar event, owned by the collaborator that
/// supplies the event snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub i64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for EventId {
    fn from(value: i32) -> Self {
        Self(value as i64)
    }
}

/// Fixed colour palette for timeline events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Red,
    Orange,
    Purple,
    Teal,
    Gray,
}

impl EventColor {
    pub const ALL: [EventColor; 7] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Red,
        EventColor::Orange,
        EventColor::Purple,
        EventColor::Teal,
        EventColor::Gray,
    ];

    /// Hex representation (#RRGGBB)
    pub fn to_hex(self) -> &'static str {
        match self {
            EventColor::Blue => "#6496C8",
            EventColor::Green => "#4CAF50",
            EventColor::Red => "#E53935",
            EventColor::Orange => "#FB8C00",
            EventColor::Purple => "#8E24AA",
            EventColor::Teal => "#00897B",
            EventColor::Gray => "#757575",
        }
    }

    pub fn color32(self) -> Color32 {
        let hex = self.to_hex().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).unwrap_or(0)
        };
        Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
    }
}

/// Validation failures when constructing an event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time must be after start time")]
    InvalidRange,
    #[error("Event {0} is required")]
    MissingField(&'static str),
}

/// Calendar event as seen by the timeline.
///
/// Instants are local wall-clock values; any timezone conversion has
/// already happened upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub color: EventColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub all_day: bool,
}

impl CalendarEvent {
    /// Create a new timed event with required fields
    ///
    /// # Examples
    /// ```
    /// use calendar_timeline::models::event::{CalendarEvent, EventId};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let start = day.and_hms_opt(9, 0, 0).unwrap();
    /// let end = day.and_hms_opt(10, 0, 0).unwrap();
    /// let event = CalendarEvent::new(EventId(1), "Team Meeting", start, end).unwrap();
    /// assert_eq!(event.duration().num_minutes(), 60);
    /// ```
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, EventError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            color: EventColor::default(),
            location: None,
            all_day: false,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        if self.end <= self.start {
            return Err(EventError::InvalidRange);
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Copy of this event carrying a different time range
    pub fn with_times(&self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }

    /// Returns the portion of the event that falls on `date`.
    ///
    /// The segment is clipped to `[date 00:00, date+1 00:00)`. An event whose
    /// end is not after its start yields a zero-length segment at `start`
    /// on the start date only.
    pub fn segment_for_date(&self, date: NaiveDate) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let day_start = date.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);

        if self.end <= self.start {
            return (self.start.date() == date).then_some((self.start, self.start));
        }

        if self.end <= day_start || self.start >= day_end {
            return None;
        }

        Some((self.start.max(day_start), self.end.min(day_end)))
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    color: EventColor,
    location: Option<String>,
    all_day: bool,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            start: None,
            end: None,
            color: EventColor::default(),
            location: None,
            all_day: false,
        }
    }

    pub fn id(mut self, id: impl Into<EventId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, EventError> {
        let id = self.id.ok_or(EventError::MissingField("id"))?;
        let title = self.title.ok_or(EventError::MissingField("title"))?;
        let start = self.start.ok_or(EventError::MissingField("start"))?;
        let end = self.end.ok_or(EventError::MissingField("end"))?;

        let event = CalendarEvent {
            id,
            title,
            start,
            end,
            color: self.color,
            location: self.location,
            all_day: self.all_day,
        };
        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
