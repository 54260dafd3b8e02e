//! Typed identifiers.
//!
//! Zone ids are small sequential integers handed out by an [`IdGenerator`]
//! owned by the heating model. Rooms are identified by their
//! [`LocationKey`](crate::room::LocationKey) instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`HeatingZone`](crate::zone::HeatingZone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(u32);

impl ZoneId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Access the raw value.
    #[must_use]
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ZoneId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Hands out increasing [`ZoneId`]s, starting at 1. Ids are never reused.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u32,
}

impl IdGenerator {
    /// Return the next unused identifier.
    pub fn next_id(&mut self) -> ZoneId {
        self.last += 1;
        ZoneId(self.last)
    }
}
