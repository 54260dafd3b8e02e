//! Room: the per-room state the heating engine reads and writes.
//!
//! Rooms are owned by the house layout. Everything else refers to a room by
//! its [`LocationKey`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, InvalidStateTransitionError, ValidationError};

/// Stable position of a room in the house layout (`row/room`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationKey {
    pub row: u32,
    pub room: u32,
}

impl LocationKey {
    #[must_use]
    pub fn new(row: u32, room: u32) -> Self {
        Self { row, room }
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.row, self.room)
    }
}

/// Failure to parse a `row/room` location key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location key {0:?}, expected `row/room`")]
pub struct ParseLocationKeyError(String);

impl FromStr for LocationKey {
    type Err = ParseLocationKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLocationKeyError(s.to_string());
        let (row, room) = s.split_once('/').ok_or_else(err)?;
        Ok(Self {
            row: row.trim().parse().map_err(|_| err())?,
            room: room.trim().parse().map_err(|_| err())?,
        })
    }
}

/// Wall a window is mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "N")]
    North,
    #[serde(alias = "E")]
    East,
    #[serde(alias = "S")]
    South,
    #[serde(alias = "W")]
    West,
}

/// Physical state of a window. A blocked window cannot be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    Open,
    #[default]
    Closed,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub direction: Direction,
    #[serde(default)]
    pub state: WindowState,
}

impl Window {
    #[must_use]
    pub fn new(direction: Direction, state: WindowState) -> Self {
        Self { direction, state }
    }
}

/// Global heating mode of the house, driven by the security away mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatingMode {
    #[default]
    Zone,
    Away,
}

/// Heating mode of a single room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomHeatingMode {
    #[default]
    Zone,
    Away,
    /// Temperature set by hand; the control algorithm leaves it alone.
    Overridden,
}

impl From<HeatingMode> for RoomHeatingMode {
    fn from(mode: HeatingMode) -> Self {
        match mode {
            HeatingMode::Zone => Self::Zone,
            HeatingMode::Away => Self::Away,
        }
    }
}

impl fmt::Display for RoomHeatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zone => f.write_str("zone"),
            Self::Away => f.write_str("away"),
            Self::Overridden => f.write_str("overridden"),
        }
    }
}

/// Temperature a room starts with when none is given.
pub const DEFAULT_ROOM_TEMPERATURE: f64 = 20.0;

/// A room of the house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub key: LocationKey,
    pub name: String,
    pub temperature: f64,
    pub hvac: bool,
    pub heating_mode: RoomHeatingMode,
    pub windows: Vec<Window>,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when `name` is empty or the
    /// temperature is not finite.
    pub fn validate(&self) -> Result<(), HearthError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        ensure_finite(self.temperature)
    }

    #[must_use]
    pub fn has_blocked_window(&self) -> bool {
        self.windows
            .iter()
            .any(|window| window.state == WindowState::Blocked)
    }

    /// Move every window that is free to move into `state`.
    pub fn set_windows(&mut self, state: WindowState) {
        for window in &mut self.windows {
            match window.state {
                WindowState::Blocked => {}
                WindowState::Open | WindowState::Closed => window.state = state,
            }
        }
    }

    /// Write a manual temperature and freeze the room in
    /// [`RoomHeatingMode::Overridden`].
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if `temperature` is not finite.
    pub fn override_temperature(&mut self, temperature: f64) -> Result<(), HearthError> {
        ensure_finite(temperature)?;
        self.temperature = temperature;
        self.heating_mode = RoomHeatingMode::Overridden;
        Ok(())
    }

    /// Leave the overridden state, taking the house's *current* mode.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::InvalidStateTransition`] if the room is not
    /// overridden.
    pub fn clear_override(&mut self, global: HeatingMode) -> Result<RoomHeatingMode, HearthError> {
        match self.heating_mode {
            RoomHeatingMode::Overridden => {
                self.heating_mode = global.into();
                Ok(self.heating_mode)
            }
            from @ (RoomHeatingMode::Zone | RoomHeatingMode::Away) => {
                Err(InvalidStateTransitionError {
                    room: self.key.to_string(),
                    from: from.to_string(),
                }
                .into())
            }
        }
    }

    /// Follow a global mode change unless the room is overridden.
    pub fn follow_global_mode(&mut self, global: HeatingMode) {
        match self.heating_mode {
            RoomHeatingMode::Overridden => {}
            RoomHeatingMode::Zone | RoomHeatingMode::Away => self.heating_mode = global.into(),
        }
    }
}

/// Reject NaN and infinities before they reach room or schedule state.
///
/// # Errors
///
/// Returns [`ValidationError::NonFiniteTemperature`] wrapped in
/// [`HearthError::Validation`].
pub fn ensure_finite(temperature: f64) -> Result<(), HearthError> {
    if temperature.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFiniteTemperature(temperature).into())
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    key: Option<LocationKey>,
    name: Option<String>,
    temperature: Option<f64>,
    hvac: Option<bool>,
    heating_mode: Option<RoomHeatingMode>,
    windows: Vec<Window>,
}

impl RoomBuilder {
    #[must_use]
    pub fn key(mut self, key: LocationKey) -> Self {
        self.key = Some(key);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub fn hvac(mut self, on: bool) -> Self {
        self.hvac = Some(on);
        self
    }

    #[must_use]
    pub fn heating_mode(mut self, mode: RoomHeatingMode) -> Self {
        self.heating_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn window(mut self, direction: Direction, state: WindowState) -> Self {
        self.windows.push(Window::new(direction, state));
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// The HVAC flag defaults to on and the heating mode to
    /// [`RoomHeatingMode::Zone`].
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if the key is missing, the name is
    /// missing or empty, or the temperature is not finite.
    pub fn build(self) -> Result<Room, HearthError> {
        let key = self.key.ok_or(ValidationError::MissingLocation)?;
        let room = Room {
            key,
            name: self.name.unwrap_or_default(),
            temperature: self.temperature.unwrap_or(DEFAULT_ROOM_TEMPERATURE),
            hvac: self.hvac.unwrap_or(true),
            heating_mode: self.heating_mode.unwrap_or_default(),
            windows: self.windows,
        };
        room.validate()?;
        Ok(room)
    }
}
