// Preset ranges
// Computes the from/to pair for each named shortcut relative to today

use chrono::NaiveDate;

use crate::models::preset::PresetRange;
use crate::models::range::DateRange;
use crate::models::settings::WeekStart;
use crate::utils::date::{
    add_days, end_of_month, end_of_week, end_of_year, shift_month, shift_year, start_of_month,
    start_of_week, start_of_year,
};

/// Compute the range a preset covers relative to `today`.
///
/// The `Last*` presets step one unit back first and then take the same
/// bounds as their `This*` counterpart. Near the ends of the calendar the
/// anchor stops at `NaiveDate::MIN`/`NaiveDate::MAX`.
pub fn preset_range(preset: PresetRange, today: NaiveDate, week_start: WeekStart) -> DateRange {
    let first_day = week_start.first_day_of_week();
    match preset {
        PresetRange::ThisWeek | PresetRange::LastWeek => {
            let anchor = if preset.is_previous() {
                add_days(today, -7)
            } else {
                today
            };
            DateRange::new(
                start_of_week(anchor, first_day),
                end_of_week(anchor, first_day),
            )
        }
        PresetRange::ThisMonth | PresetRange::LastMonth => {
            let anchor = if preset.is_previous() {
                shift_month(today, -1)
            } else {
                today
            };
            DateRange::new(start_of_month(anchor), end_of_month(anchor))
        }
        PresetRange::ThisYear | PresetRange::LastYear => {
            let anchor = if preset.is_previous() {
                shift_year(today, -1)
            } else {
                today
            };
            DateRange::new(start_of_year(anchor), end_of_year(anchor))
        }
    }
}
