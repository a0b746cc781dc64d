//! Fixed six-week month grid.
//!
//! Every month fits in 6 rows of 7 days whatever weekday it starts on, so
//! the grid always has the same shape and the view never reflows. The first
//! and last representable months are never displayed: their grids would
//! run past `NaiveDate::MIN`/`NaiveDate::MAX`, so the neighbouring month is
//! shown instead.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::settings::WeekStart;
use crate::utils::date::{add_days, shift_month, start_of_month, start_of_week};

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_DAYS: usize = DAYS_PER_WEEK * GRID_WEEKS;

/// 42 consecutive dates covering `display_month`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    month: NaiveDate,
    dates: Vec<NaiveDate>,
}

impl CalendarGrid {
    pub fn generate(display_month: NaiveDate, week_start: WeekStart) -> Self {
        let month =
            start_of_month(display_month).clamp(Self::earliest_month(), Self::latest_month());
        let first = start_of_week(month, week_start.first_day_of_week());
        let dates = (0..GRID_DAYS as i64).map(|i| add_days(first, i)).collect();
        Self { month, dates }
    }

    /// Earliest month whose grid fits after `NaiveDate::MIN`
    pub fn earliest_month() -> NaiveDate {
        shift_month(start_of_month(NaiveDate::MIN), 1)
    }

    /// Latest month whose grid fits before `NaiveDate::MAX`
    pub fn latest_month() -> NaiveDate {
        shift_month(start_of_month(NaiveDate::MAX), -1)
    }

    /// First day of the month the grid was built for
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn first(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.dates[GRID_DAYS - 1]
    }

    /// Rows of seven days, top to bottom
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.dates.chunks(DAYS_PER_WEEK)
    }

    pub fn in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.month.year() && date.month() == self.month.month()
    }
}

/// Everything the view needs to draw one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub in_range: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    pub out_of_focus: bool,
}
