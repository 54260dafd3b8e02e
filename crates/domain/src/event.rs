//! House events: the notifications exchanged between house components.
//!
//! Events carry only the new value. They are delivered synchronously and
//! never stored.

use serde::{Deserialize, Serialize};

use crate::season::Season;
use crate::time::SimDateTime;

/// Component whose event stream a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    HouseLayout,
    SystemParameters,
    Security,
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HouseEvent {
    /// The simulation clock moved to `date`.
    TimeIncremented { date: SimDateTime },
    OutsideTemperatureChanged { temperature: f64 },
    SeasonChanged { season: Season },
    AwayModeChanged { enabled: bool },
    /// Rooms were added to or removed from the layout.
    RoomsChanged,
}

impl std::fmt::Display for HouseEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimeIncremented { date } => write!(f, "time_incremented({date})"),
            Self::OutsideTemperatureChanged { temperature } => {
                write!(f, "outside_temperature_changed({temperature})")
            }
            Self::SeasonChanged { season } => write!(f, "season_changed({season})"),
            Self::AwayModeChanged { enabled } => write!(f, "away_mode_changed({enabled})"),
            Self::RoomsChanged => f.write_str("rooms_changed"),
        }
    }
}
