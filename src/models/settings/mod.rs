// Settings module
// Picker options, label texts and their defaults

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::range::InvertPolicy;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Maximum date {max} is before minimum date {min}")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },
    #[error("Unknown preset range '{0}'")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Days from Sunday, matching `first_day_of_week` in the date helpers
    pub fn first_day_of_week(&self) -> u8 {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

/// Shape of the change notifications sent to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitMode {
    /// One event carrying both endpoints
    #[default]
    Combined,
    /// A from event followed by a to event
    PerEndpoint,
}

/// Accent colour handed through to the host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    Green,
    #[default]
    Teal,
    Grape,
    Red,
    Gray,
}

impl ThemeColor {
    pub fn all() -> &'static [ThemeColor] {
        &[
            ThemeColor::Green,
            ThemeColor::Teal,
            ThemeColor::Grape,
            ThemeColor::Red,
            ThemeColor::Gray,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeColor::Green => "green",
            ThemeColor::Teal => "teal",
            ThemeColor::Grape => "grape",
            ThemeColor::Red => "red",
            ThemeColor::Gray => "gray",
        }
    }
}

/// Display strings. They have no effect on behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerTexts {
    pub start_label: String,
    pub end_label: String,
    pub this_week: String,
    pub last_week: String,
    pub this_month: String,
    pub last_month: String,
    pub this_year: String,
    pub last_year: String,
    /// Day names, Sunday first
    pub day_names: [String; 7],
}

impl Default for PickerTexts {
    fn default() -> Self {
        Self {
            start_label: "Start".to_string(),
            end_label: "End".to_string(),
            this_week: "This week".to_string(),
            last_week: "Last week".to_string(),
            this_month: "This month".to_string(),
            last_month: "Last month".to_string(),
            this_year: "This year".to_string(),
            last_year: "Last year".to_string(),
            day_names: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].map(String::from),
        }
    }
}

impl PickerTexts {
    /// Day names rotated so the configured first day of the week leads
    pub fn day_names_for(&self, week_start: WeekStart) -> Vec<&str> {
        let start = week_start.first_day_of_week() as usize;
        (0..7)
            .map(|i| self.day_names[(start + i) % 7].as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,
    pub week_start: WeekStart,
    pub invert_policy: InvertPolicy,
    pub emit_mode: EmitMode,
    pub theme_color: ThemeColor,
    pub texts: PickerTexts,
}

impl PickerOptions {
    /// Report bounds that can never hold a selection.
    ///
    /// The picker itself accepts such options; clamping then pins every
    /// endpoint to `max_date`.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if max < min {
                return Err(OptionsError::InvertedBounds { min, max });
            }
        }
        Ok(())
    }

    /// Whether a date lies inside the configured bounds
    pub fn in_bounds(&self, date: NaiveDate) -> bool {
        self.min_date.map_or(true, |min| date >= min) && self.max_date.map_or(true, |max| date <= max)
    }
}
