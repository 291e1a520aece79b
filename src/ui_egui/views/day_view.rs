use chrono::NaiveDate;

use super::{TimelineView, ViewKind};
use crate::models::settings::TimelineSettings;

pub(super) fn day_dates(date: NaiveDate) -> Vec<NaiveDate> {
    vec![date]
}

impl TimelineView {
    /// Single-column time grid for `date`
    pub fn day(date: NaiveDate, settings: TimelineSettings) -> Self {
        Self::with_dates(ViewKind::Day, day_dates(date), settings)
    }
}
