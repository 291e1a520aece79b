use chrono::NaiveDate;

use super::{TimelineView, ViewKind};
use crate::models::settings::TimelineSettings;
use crate::utils::date::{consecutive_dates, get_week_start};

pub const DAYS_PER_WEEK: usize = 7;

/// The seven dates of the week containing `date`
pub(super) fn week_dates(date: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    consecutive_dates(get_week_start(date, first_day_of_week), DAYS_PER_WEEK)
}

impl TimelineView {
    /// Seven-column time grid for the week containing `date`, starting on
    /// the configured first day of the week.
    pub fn week(date: NaiveDate, settings: TimelineSettings) -> Self {
        let dates = week_dates(date, settings.first_day_of_week);
        Self::with_dates(ViewKind::Week, dates, settings)
    }
}
