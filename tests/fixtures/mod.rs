// Test fixtures - reusable test data
// Provides consistent dates and pickers across all test files
#![allow(dead_code)]

use chrono::NaiveDate;
use date_range_picker::models::settings::PickerOptions;
use date_range_picker::services::picker::{DateRangePicker, FixedClock, PickerEvent};
use std::cell::RefCell;
use std::rc::Rc;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Jun 12, 2024
    pub fn mid_june_2024() -> NaiveDate {
        ymd(2024, 6, 12)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }

    /// Wednesday, Jan 1, 2025
    pub fn new_year_2025() -> NaiveDate {
        ymd(2025, 1, 1)
    }
}

/// Pickers with a fixed "today"
pub mod pickers {
    use super::*;

    pub fn picker_on(today: NaiveDate, options: PickerOptions) -> DateRangePicker {
        DateRangePicker::with_clock(None, None, Some(options), Box::new(FixedClock(today)))
    }

    pub fn picker_with_range(
        today: NaiveDate,
        from: NaiveDate,
        to: NaiveDate,
        options: PickerOptions,
    ) -> DateRangePicker {
        DateRangePicker::with_clock(Some(from), Some(to), Some(options), Box::new(FixedClock(today)))
    }

    /// Collect every event the picker emits from now on
    pub fn record_events(picker: &mut DateRangePicker) -> Rc<RefCell<Vec<PickerEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        picker.subscribe(move |e| sink.borrow_mut().push(*e));
        events
    }
}
