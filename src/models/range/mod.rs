// Range module
// Selected from/to pair, compared at day granularity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How an inverted selection is repaired when one endpoint is picked past
/// the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvertPolicy {
    /// Drop the opposite endpoint so the user picks it again
    #[default]
    Clear,
    /// Snap the opposite endpoint onto the newly picked date
    Clamp,
}

/// A possibly incomplete date range.
///
/// When both endpoints are set the picker keeps `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Both endpoints are set
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// Inclusive containment check. False unless both endpoints are set.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            _ => false,
        }
    }

    /// Number of days covered, counting both endpoints.
    pub fn num_days(&self) -> Option<i64> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some((to - from).num_days() + 1),
            _ => None,
        }
    }

    /// Replace the start, repairing `to` if the new start reaches or passes it.
    pub fn set_from(&mut self, date: NaiveDate, policy: InvertPolicy) {
        self.from = Some(date);
        if matches!(self.to, Some(to) if date >= to) {
            self.to = match policy {
                InvertPolicy::Clear => None,
                InvertPolicy::Clamp => Some(date),
            };
        }
    }

    /// Replace the end, repairing `from` if the new end reaches or precedes it.
    pub fn set_to(&mut self, date: NaiveDate, policy: InvertPolicy) {
        self.to = Some(date);
        if matches!(self.from, Some(from) if date <= from) {
            self.from = match policy {
                InvertPolicy::Clear => None,
                InvertPolicy::Clamp => Some(date),
            };
        }
    }

    /// Force both endpoints into `[min, max]`.
    ///
    /// The min check runs before the max check, so with `max < min` every
    /// endpoint ends up on `max`.
    pub fn clamped(self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self {
            from: self.from.map(|d| clamp_date(d, min, max)),
            to: self.to.map(|d| clamp_date(d, min, max)),
        }
    }
}

pub fn clamp_date(date: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> NaiveDate {
    let mut value = date;
    if let Some(min) = min {
        if value <= min {
            value = min;
        }
    }
    if let Some(max) = max {
        if max <= value {
            value = max;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(ymd(2024, 6, 9), ymd(2024, 6, 15));
        assert!(range.contains(ymd(2024, 6, 9)));
        assert!(range.contains(ymd(2024, 6, 12)));
        assert!(range.contains(ymd(2024, 6, 15)));
        assert!(!range.contains(ymd(2024, 6, 16)));
    }

    #[test]
    fn test_contains_requires_both_endpoints() {
        let range = DateRange {
            from: Some(ymd(2024, 6, 9)),
            to: None,
        };
        assert!(!range.contains(ymd(2024, 6, 9)));
        assert_eq!(range.num_days(), None);
    }

    #[test]
    fn test_set_from_past_end_clears() {
        let mut range = DateRange::new(ymd(2024, 6, 1), ymd(2024, 6, 10));
        range.set_from(ymd(2024, 6, 15), InvertPolicy::Clear);
        assert_eq!(range.from, Some(ymd(2024, 6, 15)));
        assert_eq!(range.to, None);
    }

    #[test]
    fn test_set_from_past_end_clamps() {
        let mut range = DateRange::new(ymd(2024, 6, 1), ymd(2024, 6, 10));
        range.set_from(ymd(2024, 6, 15), InvertPolicy::Clamp);
        assert_eq!(range, DateRange::new(ymd(2024, 6, 15), ymd(2024, 6, 15)));
    }

    #[test]
    fn test_set_from_on_end_invalidates_end() {
        let mut range = DateRange::new(ymd(2024, 6, 1), ymd(2024, 6, 10));
        range.set_from(ymd(2024, 6, 10), InvertPolicy::Clear);
        assert_eq!(range.to, None);
    }

    #[test]
    fn test_set_to_before_start() {
        let mut range = DateRange::new(ymd(2024, 6, 5), ymd(2024, 6, 10));
        range.set_to(ymd(2024, 6, 5), InvertPolicy::Clear);
        assert_eq!(range.from, None);
        assert_eq!(range.to, Some(ymd(2024, 6, 5)));

        let mut range = DateRange::new(ymd(2024, 6, 5), ymd(2024, 6, 10));
        range.set_to(ymd(2024, 6, 1), InvertPolicy::Clamp);
        assert_eq!(range, DateRange::new(ymd(2024, 6, 1), ymd(2024, 6, 1)));
    }

    #[test]
    fn test_set_to_after_start_keeps_start() {
        let mut range = DateRange::new(ymd(2024, 6, 5), ymd(2024, 6, 10));
        range.set_to(ymd(2024, 6, 20), InvertPolicy::Clear);
        assert_eq!(range, DateRange::new(ymd(2024, 6, 5), ymd(2024, 6, 20)));
        assert_eq!(range.num_days(), Some(16));
    }

    #[test]
    fn test_clamp_date_bounds() {
        let min = Some(ymd(2024, 6, 5));
        let max = Some(ymd(2024, 6, 20));
        assert_eq!(clamp_date(ymd(2024, 6, 1), min, max), ymd(2024, 6, 5));
        assert_eq!(clamp_date(ymd(2024, 6, 10), min, max), ymd(2024, 6, 10));
        assert_eq!(clamp_date(ymd(2024, 7, 1), min, max), ymd(2024, 6, 20));
        assert_eq!(clamp_date(ymd(2024, 7, 1), None, None), ymd(2024, 7, 1));
    }

    #[test]
    fn test_inverted_bounds_resolve_to_max() {
        let min = Some(ymd(2024, 6, 20));
        let max = Some(ymd(2024, 6, 5));
        assert_eq!(clamp_date(ymd(2024, 6, 1), min, max), ymd(2024, 6, 5));
        assert_eq!(clamp_date(ymd(2024, 6, 30), min, max), ymd(2024, 6, 5));
    }
}
