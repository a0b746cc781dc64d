// Preset module
// Named shortcut ranges offered next to the calendar

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::settings::{OptionsError, PickerTexts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetRange {
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

impl PresetRange {
    pub fn all() -> &'static [PresetRange] {
        &[
            PresetRange::ThisWeek,
            PresetRange::LastWeek,
            PresetRange::ThisMonth,
            PresetRange::LastMonth,
            PresetRange::ThisYear,
            PresetRange::LastYear,
        ]
    }

    /// Short code used in option files and host bindings
    pub fn code(&self) -> &'static str {
        match self {
            PresetRange::ThisWeek => "tw",
            PresetRange::LastWeek => "lw",
            PresetRange::ThisMonth => "tm",
            PresetRange::LastMonth => "lm",
            PresetRange::ThisYear => "ty",
            PresetRange::LastYear => "ly",
        }
    }

    /// Whether the preset looks one unit back from today
    pub fn is_previous(&self) -> bool {
        matches!(
            self,
            PresetRange::LastWeek | PresetRange::LastMonth | PresetRange::LastYear
        )
    }

    /// Display label from the configured text set
    pub fn label<'a>(&self, texts: &'a PickerTexts) -> &'a str {
        match self {
            PresetRange::ThisWeek => &texts.this_week,
            PresetRange::LastWeek => &texts.last_week,
            PresetRange::ThisMonth => &texts.this_month,
            PresetRange::LastMonth => &texts.last_month,
            PresetRange::ThisYear => &texts.this_year,
            PresetRange::LastYear => &texts.last_year,
        }
    }
}

impl fmt::Display for PresetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PresetRange {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        PresetRange::all()
            .iter()
            .copied()
            .find(|p| p.code() == code)
            .ok_or_else(|| OptionsError::UnknownPreset(s.to_string()))
    }
}
