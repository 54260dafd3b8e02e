//! Heating zone: a named group of rooms sharing one period schedule.

use serde::{Deserialize, Serialize};

use crate::control::{self, TickConditions};
use crate::error::{HearthError, ValidationError};
use crate::id::ZoneId;
use crate::period::{HeatingZonePeriod, PeriodSchedule};
use crate::room::{HeatingMode, LocationKey, Room};

/// A heating zone. Rooms are referenced by key, never copied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatingZone {
    pub id: ZoneId,
    pub name: String,
    rooms: Vec<LocationKey>,
    pub periods: PeriodSchedule,
}

impl HeatingZone {
    /// Create an empty zone with the default schedule.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when `name` is empty.
    pub fn new(id: ZoneId, name: impl Into<String>) -> Result<Self, HearthError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(Self {
            id,
            name,
            rooms: Vec::new(),
            periods: PeriodSchedule::default(),
        })
    }

    /// Room keys in insertion order.
    #[must_use]
    pub fn rooms(&self) -> &[LocationKey] {
        &self.rooms
    }

    #[must_use]
    pub fn contains(&self, key: LocationKey) -> bool {
        self.rooms.contains(&key)
    }

    /// Add a room key. Returns `false` if it was already a member.
    pub fn add_room(&mut self, key: LocationKey) -> bool {
        if self.contains(key) {
            return false;
        }
        self.rooms.push(key);
        true
    }

    /// Remove a room key. Returns `false` if it was not a member.
    pub fn remove_room(&mut self, key: LocationKey) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|member| *member != key);
        self.rooms.len() != before
    }

    /// Keep only the members for which `keep` returns `true`.
    pub fn retain_rooms(&mut self, mut keep: impl FnMut(LocationKey) -> bool) {
        self.rooms.retain(|member| keep(*member));
    }

    /// Target for this tick: the period schedule in zone mode, the away
    /// default otherwise.
    #[must_use]
    pub fn target_temperature(&self, conditions: &TickConditions) -> f64 {
        match conditions.mode {
            HeatingMode::Zone => self.periods.target(HeatingZonePeriod::at(conditions.date)),
            HeatingMode::Away => conditions.away_temperature,
        }
    }

    /// Run one control tick over `rooms`, which must be this zone's members.
    /// Returns how many rooms were adjusted.
    pub fn adjust_room_temperatures<'a>(
        &self,
        rooms: impl IntoIterator<Item = &'a mut Room>,
        conditions: &TickConditions,
    ) -> usize {
        let target = self.target_temperature(conditions);
        let mut adjusted = 0;
        for room in rooms {
            debug_assert!(self.contains(room.key));
            control::adjust_room(room, target, conditions);
            adjusted += 1;
        }
        adjusted
    }
}
