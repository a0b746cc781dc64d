// Unit tests for preset ranges
// Parameterized over every preset and both week starts

use chrono::NaiveDate;
use date_range_picker::models::preset::PresetRange;
use date_range_picker::models::settings::{OptionsError, PickerTexts, WeekStart};
use date_range_picker::services::picker::preset_range;
use test_case::test_case;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// Wednesday, Jun 12, 2024
#[test_case(PresetRange::ThisWeek, WeekStart::Sunday, (2024, 6, 9), (2024, 6, 15); "this week from sunday")]
#[test_case(PresetRange::ThisWeek, WeekStart::Monday, (2024, 6, 10), (2024, 6, 16); "this week from monday")]
#[test_case(PresetRange::LastWeek, WeekStart::Sunday, (2024, 6, 2), (2024, 6, 8); "last week from sunday")]
#[test_case(PresetRange::LastWeek, WeekStart::Monday, (2024, 6, 3), (2024, 6, 9); "last week from monday")]
#[test_case(PresetRange::ThisMonth, WeekStart::Sunday, (2024, 6, 1), (2024, 6, 30); "this month")]
#[test_case(PresetRange::LastMonth, WeekStart::Sunday, (2024, 5, 1), (2024, 5, 31); "last month")]
#[test_case(PresetRange::ThisYear, WeekStart::Monday, (2024, 1, 1), (2024, 12, 31); "this year")]
#[test_case(PresetRange::LastYear, WeekStart::Monday, (2023, 1, 1), (2023, 12, 31); "last year")]
fn test_presets_mid_june(
    preset: PresetRange,
    week_start: WeekStart,
    from: (i32, u32, u32),
    to: (i32, u32, u32),
) {
    let range = preset_range(preset, ymd(2024, 6, 12), week_start);
    assert_eq!(range.from, Some(ymd(from.0, from.1, from.2)));
    assert_eq!(range.to, Some(ymd(to.0, to.1, to.2)));
}

#[test_case("tw", PresetRange::ThisWeek; "this week")]
#[test_case("lw", PresetRange::LastWeek; "last week")]
#[test_case("tm", PresetRange::ThisMonth; "this month")]
#[test_case("lm", PresetRange::LastMonth; "last month")]
#[test_case("ty", PresetRange::ThisYear; "this year")]
#[test_case(" LY ", PresetRange::LastYear; "last year with padding")]
fn test_preset_codes(code: &str, expected: PresetRange) {
    assert_eq!(code.parse::<PresetRange>(), Ok(expected));
}

#[test]
fn test_unknown_code() {
    assert_eq!(
        "yesterday".parse::<PresetRange>(),
        Err(OptionsError::UnknownPreset("yesterday".to_string()))
    );
}

#[test]
fn test_code_round_trip_through_display() {
    for preset in PresetRange::all() {
        assert_eq!(preset.to_string().parse::<PresetRange>(), Ok(*preset));
    }
}

#[test]
fn test_labels_follow_texts() {
    let mut texts = PickerTexts::default();
    texts.this_week = "Diese Woche".to_string();
    assert_eq!(PresetRange::ThisWeek.label(&texts), "Diese Woche");
    assert_eq!(PresetRange::ThisYear.label(&texts), "This year");
}
