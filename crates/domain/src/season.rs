//! Seasons and the away-mode default temperatures that depend on them.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::time::SimDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    #[default]
    Winter,
}

impl Season {
    #[must_use]
    pub fn is_summer(self) -> bool {
        matches!(self, Self::Summer)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summer => f.write_str("summer"),
            Self::Winter => f.write_str("winter"),
        }
    }
}

/// A day of the year without a year, written `MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u32,
    day: u32,
}

/// Failure to parse a `MM-DD` month-day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month-day {0:?}, expected `MM-DD`")]
pub struct ParseMonthDayError(String);

impl MonthDay {
    /// Build a month-day, checking it exists in a leap year.
    #[must_use]
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }

    #[must_use]
    pub fn of(date: SimDateTime) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = ParseMonthDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthDayError(s.to_string());
        let (month, day) = s.split_once('-').ok_or_else(err)?;
        let month = month.parse().map_err(|_| err())?;
        let day = day.parse().map_err(|_| err())?;
        Self::new(month, day).ok_or_else(err)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = ParseMonthDayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthDay> for String {
    fn from(value: MonthDay) -> Self {
        value.to_string()
    }
}

/// First day of summer and first day of winter. Either may come first in
/// the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonDates {
    pub summer_start: MonthDay,
    pub winter_start: MonthDay,
}

impl Default for SeasonDates {
    fn default() -> Self {
        Self {
            summer_start: MonthDay { month: 6, day: 1 },
            winter_start: MonthDay { month: 10, day: 1 },
        }
    }
}

impl SeasonDates {
    #[must_use]
    pub fn season_at(&self, date: SimDateTime) -> Season {
        let today = MonthDay::of(date);
        let summer = if self.summer_start <= self.winter_start {
            self.summer_start <= today && today < self.winter_start
        } else {
            today >= self.summer_start || today < self.winter_start
        };
        if summer { Season::Summer } else { Season::Winter }
    }
}

pub const DEFAULT_AWAY_WINTER_TEMPERATURE: f64 = 18.0;
pub const DEFAULT_AWAY_SUMMER_TEMPERATURE: f64 = 26.0;

/// Default target temperatures used while the house is in away mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AwayTemperatures {
    pub winter: f64,
    pub summer: f64,
}

impl Default for AwayTemperatures {
    fn default() -> Self {
        Self {
            winter: DEFAULT_AWAY_WINTER_TEMPERATURE,
            summer: DEFAULT_AWAY_SUMMER_TEMPERATURE,
        }
    }
}

impl AwayTemperatures {
    #[must_use]
    pub fn for_season(&self, season: Season) -> f64 {
        match season {
            Season::Summer => self.summer,
            Season::Winter => self.winter,
        }
    }

    pub fn set(&mut self, season: Season, temperature: f64) {
        match season {
            Season::Summer => self.summer = temperature,
            Season::Winter => self.winter = temperature,
        }
    }
}
