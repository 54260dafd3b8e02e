//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `hearth.toml` in the working directory, or the file named by
//! `HEARTH_CONFIG`. Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::TimeDelta;
use hearth_domain::period::HeatingZonePeriod;
use hearth_domain::room::{LocationKey, ParseLocationKeyError};
use hearth_domain::season::{
    AwayTemperatures, DEFAULT_AWAY_SUMMER_TEMPERATURE, DEFAULT_AWAY_WINTER_TEMPERATURE, MonthDay,
    SeasonDates,
};
use hearth_domain::time::SimDateTime;
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "hearth.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clock settings.
    pub simulation: SimulationConfig,
    /// Initial system parameters.
    pub parameters: ParametersConfig,
    /// Away temperatures and the zones to create at startup.
    pub heating: HeatingConfig,
    /// Where the rooms come from.
    pub layout: LayoutConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Wall-clock time between two ticks.
    pub tick_interval_ms: u64,
    /// Simulated time added by each tick.
    pub time_step_secs: i64,
    /// Simulated start time (`2024-01-10T08:00:00`). Defaults to now.
    pub start: Option<SimDateTime>,
    /// Wall-clock time between two room reports in the log.
    pub report_interval_secs: u64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ParametersConfig {
    pub outside_temperature: f64,
    /// First day of summer, `MM-DD`.
    pub summer_start: MonthDay,
    /// First day of winter, `MM-DD`.
    pub winter_start: MonthDay,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeatingConfig {
    pub away_winter_temperature: f64,
    pub away_summer_temperature: f64,
    /// Start every room at the outside temperature.
    pub initialize_rooms: bool,
    pub zones: Vec<ZoneConfig>,
}

/// A heating zone created at startup.
#[derive(Debug, Deserialize)]
pub struct ZoneConfig {
    pub name: String,
    /// Room keys as `row/room`.
    #[serde(default)]
    pub rooms: Vec<String>,
    pub morning: Option<f64>,
    pub afternoon: Option<f64>,
    pub night: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// JSON layout document. The demo house is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `hearth.toml` (or `HEARTH_CONFIG`) if present,
    /// then apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("HEARTH_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        let mut config = Self::from_file(Path::new(&path))?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides read through `var`. Unparsable values are ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HEARTH_LAYOUT") {
            self.layout.path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("HEARTH_TICK_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            self.simulation.tick_interval_ms = val;
        }
        if let Some(val) = var("HEARTH_TIME_STEP_SECS").and_then(|v| v.parse().ok()) {
            self.simulation.time_step_secs = val;
        }
        if let Some(val) = var("HEARTH_OUTSIDE_TEMPERATURE").and_then(|v| v.parse().ok()) {
            self.parameters.outside_temperature = val;
        }
        if let Some(val) = var("HEARTH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.tick_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "tick interval must be non-zero".to_string(),
            ));
        }
        if self.simulation.report_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "report interval must be non-zero".to_string(),
            ));
        }
        if self.simulation.time_step_secs <= 0 || self.time_step().is_none() {
            return Err(ConfigError::Validation(format!(
                "time step must be a positive number of seconds, got {}",
                self.simulation.time_step_secs
            )));
        }

        let temperatures = [
            ("outside temperature", self.parameters.outside_temperature),
            ("away winter temperature", self.heating.away_winter_temperature),
            ("away summer temperature", self.heating.away_summer_temperature),
        ];
        for (what, value) in temperatures {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!("{what} must be finite")));
            }
        }

        let mut names = HashSet::new();
        for zone in &self.heating.zones {
            if zone.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "zone name must not be empty".to_string(),
                ));
            }
            if !names.insert(zone.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "zone {:?} is defined twice",
                    zone.name
                )));
            }
            zone.room_keys()?;
            if zone.targets().any(|(_, value)| !value.is_finite()) {
                return Err(ConfigError::Validation(format!(
                    "zone {:?} has a non-finite target",
                    zone.name
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.simulation.tick_interval_ms)
    }

    #[must_use]
    pub fn report_interval(&self) -> Duration {
        Duration::from_secs(self.simulation.report_interval_secs)
    }

    /// Simulated time per tick, `None` when out of range.
    #[must_use]
    pub fn time_step(&self) -> Option<TimeDelta> {
        TimeDelta::try_seconds(self.simulation.time_step_secs)
    }

    #[must_use]
    pub fn season_dates(&self) -> SeasonDates {
        SeasonDates {
            summer_start: self.parameters.summer_start,
            winter_start: self.parameters.winter_start,
        }
    }

    #[must_use]
    pub fn away_temperatures(&self) -> AwayTemperatures {
        AwayTemperatures {
            winter: self.heating.away_winter_temperature,
            summer: self.heating.away_summer_temperature,
        }
    }
}

impl ZoneConfig {
    /// Parse the configured room keys.
    ///
    /// # Errors
    ///
    /// Returns the first key that is not `row/room`.
    pub fn room_keys(&self) -> Result<Vec<LocationKey>, ParseLocationKeyError> {
        self.rooms.iter().map(|key| key.parse()).collect()
    }

    /// Period targets that are set.
    pub fn targets(&self) -> impl Iterator<Item = (HeatingZonePeriod, f64)> {
        [
            (HeatingZonePeriod::Morning, self.morning),
            (HeatingZonePeriod::Afternoon, self.afternoon),
            (HeatingZonePeriod::Night, self.night),
        ]
        .into_iter()
        .filter_map(|(period, target)| target.map(|value| (period, value)))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            time_step_secs: 900,
            start: None,
            report_interval_secs: 60,
        }
    }
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let dates = SeasonDates::default();
        Self {
            outside_temperature: 10.0,
            summer_start: dates.summer_start,
            winter_start: dates.winter_start,
        }
    }
}

impl Default for HeatingConfig {
    fn default() -> Self {
        Self {
            away_winter_temperature: DEFAULT_AWAY_WINTER_TEMPERATURE,
            away_summer_temperature: DEFAULT_AWAY_SUMMER_TEMPERATURE,
            initialize_rooms: true,
            zones: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hearthd=info,hearth_app=info,hearth_adapter_layout_memory=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A zone lists a malformed room key.
    #[error("invalid zone room")]
    RoomKey(#[from] ParseLocationKeyError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
