//! Availability slot identifiers.
//!
//! A calendar slot travels in wire form (`"Monday-8am-10am"`) and is shown in
//! display form (`"Monday 8am-10am"`). Only the first separator is converted
//! because time ranges carry their own hyphen.
//!
//! The preference form uses a separate coarse vocabulary ([`PreferenceSlot`]);
//! the two are distinct types and never converted into one another.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Separator between day and time range in wire form
pub const WIRE_SEPARATOR: char = '-';
/// Separator between day and time range in display form
pub const DISPLAY_SEPARATOR: char = ' ';

/// Days shown by the calendar grid
pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Time ranges shown by the calendar grid
pub const TIME_RANGES: [&str; 6] = [
    "8am-10am",
    "10am-12pm",
    "12pm-2pm",
    "2pm-4pm",
    "4pm-6pm",
    "6pm-8pm",
];

/// Builds the wire form `"Day-TimeRange"`.
#[must_use]
pub fn to_wire_form(day: &str, time_range: &str) -> String {
    format!("{day}{WIRE_SEPARATOR}{time_range}")
}

/// Converts `"Day-TimeRange"` to `"Day TimeRange"`.
///
/// Input without a hyphen is returned unchanged.
#[must_use]
pub fn to_display_form(wire: &str) -> String {
    match wire.split_once(WIRE_SEPARATOR) {
        Some((day, range)) => format!("{day}{DISPLAY_SEPARATOR}{range}"),
        None => wire.to_string(),
    }
}

/// Converts `"Day TimeRange"` to `"Day-TimeRange"`.
///
/// Input without a space is returned unchanged.
#[must_use]
pub fn from_display_form(display: &str) -> String {
    match display.split_once(DISPLAY_SEPARATOR) {
        Some((day, range)) => to_wire_form(day, range),
        None => display.to_string(),
    }
}

/// Splits a wire-form slot into `(day, time_range)`.
#[must_use]
pub fn split_wire_form(wire: &str) -> Option<(&str, &str)> {
    wire.split_once(WIRE_SEPARATOR)
}

/// True when `wire` names a cell of the calendar grid.
#[must_use]
pub fn is_calendar_slot(wire: &str) -> bool {
    split_wire_form(wire)
        .is_some_and(|(day, range)| WEEKDAYS.contains(&day) && TIME_RANGES.contains(&range))
}

/// Coarse half-day slots offered by the preference form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[expect(missing_docs)]
pub enum PreferenceSlot {
    #[serde(rename = "Mon_AM")]
    MonAm,
    #[serde(rename = "Mon_PM")]
    MonPm,
    #[serde(rename = "Tue_AM")]
    TueAm,
    #[serde(rename = "Tue_PM")]
    TuePm,
    #[serde(rename = "Wed_AM")]
    WedAm,
    #[serde(rename = "Wed_PM")]
    WedPm,
    #[serde(rename = "Thu_AM")]
    ThuAm,
    #[serde(rename = "Thu_PM")]
    ThuPm,
    #[serde(rename = "Fri_AM")]
    FriAm,
    #[serde(rename = "Fri_PM")]
    FriPm,
    #[serde(rename = "Sat_AM")]
    SatAm,
    #[serde(rename = "Sat_PM")]
    SatPm,
    #[serde(rename = "Sun_AM")]
    SunAm,
    #[serde(rename = "Sun_PM")]
    SunPm,
}

impl PreferenceSlot {
    /// Every slot, Monday morning first.
    pub const ALL: [Self; 14] = [
        Self::MonAm,
        Self::MonPm,
        Self::TueAm,
        Self::TuePm,
        Self::WedAm,
        Self::WedPm,
        Self::ThuAm,
        Self::ThuPm,
        Self::FriAm,
        Self::FriPm,
        Self::SatAm,
        Self::SatPm,
        Self::SunAm,
        Self::SunPm,
    ];

    /// Wire value, e.g. `"Mon_AM"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MonAm => "Mon_AM",
            Self::MonPm => "Mon_PM",
            Self::TueAm => "Tue_AM",
            Self::TuePm => "Tue_PM",
            Self::WedAm => "Wed_AM",
            Self::WedPm => "Wed_PM",
            Self::ThuAm => "Thu_AM",
            Self::ThuPm => "Thu_PM",
            Self::FriAm => "Fri_AM",
            Self::FriPm => "Fri_PM",
            Self::SatAm => "Sat_AM",
            Self::SatPm => "Sat_PM",
            Self::SunAm => "Sun_AM",
            Self::SunPm => "Sun_PM",
        }
    }

    /// Human label, e.g. `"Monday Morning"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MonAm => "Monday Morning",
            Self::MonPm => "Monday Afternoon",
            Self::TueAm => "Tuesday Morning",
            Self::TuePm => "Tuesday Afternoon",
            Self::WedAm => "Wednesday Morning",
            Self::WedPm => "Wednesday Afternoon",
            Self::ThuAm => "Thursday Morning",
            Self::ThuPm => "Thursday Afternoon",
            Self::FriAm => "Friday Morning",
            Self::FriPm => "Friday Afternoon",
            Self::SatAm => "Saturday Morning",
            Self::SatPm => "Saturday Afternoon",
            Self::SunAm => "Sunday Morning",
            Self::SunPm => "Sunday Afternoon",
        }
    }
}

impl fmt::Display for PreferenceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| format!("unknown preference slot: {s}"))
    }
}
