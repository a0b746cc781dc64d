// Property-based tests for grid generation, presets and clamping
// Checks calendar invariants across random dates and options

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Datelike, Duration, NaiveDate};
use date_range_picker::models::preset::PresetRange;
use date_range_picker::models::range::{DateRange, InvertPolicy};
use date_range_picker::models::settings::{PickerOptions, WeekStart};
use date_range_picker::models::ui::OpenState;
use date_range_picker::services::picker::{preset_range, CalendarGrid, PickerEvent, GRID_DAYS};
use fixtures::pickers::{picker_on, record_events};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 plus up to ~80 years
    (0i64..29_000).prop_map(|offset| NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset))
}

fn any_week_start() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Sunday), Just(WeekStart::Monday)]
}

fn any_policy() -> impl Strategy<Value = InvertPolicy> {
    prop_oneof![Just(InvertPolicy::Clear), Just(InvertPolicy::Clamp)]
}

proptest! {
    /// Property: the grid is 42 consecutive days containing the whole month
    #[test]
    fn prop_grid_is_42_consecutive_days(date in any_date(), week_start in any_week_start()) {
        let grid = CalendarGrid::generate(date, week_start);
        let days = grid.dates();

        prop_assert_eq!(days.len(), GRID_DAYS);
        for pair in days.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }

        let first_of_month = date.with_day(1).unwrap();
        prop_assert!(days.contains(&first_of_month));
        prop_assert!(days[0] <= first_of_month);
        prop_assert!((first_of_month - days[0]).num_days() < 7);
        prop_assert_eq!(days[0].weekday().num_days_from_sunday() as u8, week_start.first_day_of_week());
    }

    /// Property: last week ends exactly seven days before this week
    #[test]
    fn prop_last_week_is_seven_days_back(today in any_date(), week_start in any_week_start()) {
        let mut picker = picker_on(today, PickerOptions { week_start, ..Default::default() });
        picker.select_preset(PresetRange::ThisWeek);
        let this_to = picker.to().unwrap();
        picker.select_preset(PresetRange::LastWeek);
        let last_to = picker.to().unwrap();

        prop_assert_eq!(this_to - last_to, Duration::days(7));
    }

    /// Property: every preset yields an ordered range containing its anchor
    #[test]
    fn prop_presets_are_ordered(today in any_date(), week_start in any_week_start()) {
        for preset in PresetRange::all() {
            let range = preset_range(*preset, today, week_start);
            let (from, to) = (range.from.unwrap(), range.to.unwrap());
            prop_assert!(from <= to);
            if !preset.is_previous() {
                prop_assert!(range.contains(today));
            } else {
                prop_assert!(to < today);
            }
        }
    }

    /// Property: emitting twice without a mutation reports the same range
    #[test]
    fn prop_clamp_and_emit_idempotent(
        today in any_date(),
        min in proptest::option::of(any_date()),
        max in proptest::option::of(any_date()),
    ) {
        let mut picker = picker_on(today, PickerOptions { min_date: min, max_date: max, ..Default::default() });
        let events = record_events(&mut picker);
        picker.clamp_and_emit();
        picker.clamp_and_emit();

        let events = events.borrow();
        prop_assert_eq!(events.len(), 2);
        prop_assert_eq!(events[0], events[1]);
    }

    /// Property: with min == max every endpoint lands on that day
    #[test]
    fn prop_single_day_bounds(today in any_date(), day in any_date(), picked in any_date()) {
        let mut picker = picker_on(today, PickerOptions { min_date: Some(day), max_date: Some(day), ..Default::default() });
        picker.toggle_open(OpenState::EditingFrom);
        picker.select_date(picked);

        let range = picker.range();
        prop_assert_eq!(range.from, Some(day));
        prop_assert!(range.to.map_or(true, |to| to == day));
    }

    /// Property: any sequence of clicks keeps from <= to
    #[test]
    fn prop_selection_never_inverts(
        today in any_date(),
        policy in any_policy(),
        clicks in proptest::collection::vec((any::<bool>(), any_date()), 1..20),
    ) {
        let mut picker = picker_on(today, PickerOptions { invert_policy: policy, ..Default::default() });
        let events = record_events(&mut picker);

        for (editing_from, date) in clicks {
            let target = if editing_from { OpenState::EditingFrom } else { OpenState::EditingTo };
            if picker.open_state() != target {
                picker.toggle_open(target);
            }
            picker.select_date(date);

            if let DateRange { from: Some(from), to: Some(to) } = picker.range() {
                prop_assert!(from <= to);
            }
        }

        let last = *events.borrow().last().unwrap();
        prop_assert_eq!(last, PickerEvent::RangeChanged(picker.range()));
    }
}
