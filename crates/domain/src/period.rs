//! Time-of-day periods and the per-zone target schedule.

use serde::{Deserialize, Serialize};

use crate::time::{SimDateTime, hour_of};

/// Target temperature every period starts with.
pub const DEFAULT_TARGET_TEMPERATURE: f64 = 22.0;

/// Time-of-day bucket a zone schedule is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatingZonePeriod {
    /// 05:00 through 11:59.
    Morning,
    /// 12:00 through 21:59.
    Afternoon,
    /// 22:00 through 04:59.
    Night,
}

impl HeatingZonePeriod {
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Night];

    /// Bucket an hour of day: `5..=11` morning, `12..=21` afternoon, the
    /// rest night.
    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=21 => Self::Afternoon,
            _ => Self::Night,
        }
    }

    #[must_use]
    pub fn at(date: SimDateTime) -> Self {
        Self::from_hour(hour_of(date))
    }
}

impl std::fmt::Display for HeatingZonePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => f.write_str("morning"),
            Self::Afternoon => f.write_str("afternoon"),
            Self::Night => f.write_str("night"),
        }
    }
}

/// Target temperature for each of the three periods. All three slots always
/// hold a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodSchedule {
    pub morning: f64,
    pub afternoon: f64,
    pub night: f64,
}

impl Default for PeriodSchedule {
    fn default() -> Self {
        Self {
            morning: DEFAULT_TARGET_TEMPERATURE,
            afternoon: DEFAULT_TARGET_TEMPERATURE,
            night: DEFAULT_TARGET_TEMPERATURE,
        }
    }
}

impl PeriodSchedule {
    #[must_use]
    pub fn target(&self, period: HeatingZonePeriod) -> f64 {
        match period {
            HeatingZonePeriod::Morning => self.morning,
            HeatingZonePeriod::Afternoon => self.afternoon,
            HeatingZonePeriod::Night => self.night,
        }
    }

    pub fn set_target(&mut self, period: HeatingZonePeriod, temperature: f64) {
        let slot = match period {
            HeatingZonePeriod::Morning => &mut self.morning,
            HeatingZonePeriod::Afternoon => &mut self.afternoon,
            HeatingZonePeriod::Night => &mut self.night,
        };
        *slot = temperature;
    }
}
