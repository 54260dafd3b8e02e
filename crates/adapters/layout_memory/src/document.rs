//! JSON layout document.
//!
//! ```json
//! {"rooms":[{"row":0,"room":1,"name":"Kitchen","temperature":20.0,
//!   "windows":[{"direction":"north","state":"closed"}]}]}
//! ```
//!
//! `temperature`, `hvac` and `windows` are optional.

use hearth_domain::error::HearthError;
use hearth_domain::room::{LocationKey, Room, Window};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub row: u32,
    pub room: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hvac: Option<bool>,
    #[serde(default)]
    pub windows: Vec<Window>,
}

impl RoomRecord {
    #[must_use]
    pub fn key(&self) -> LocationKey {
        LocationKey::new(self.row, self.room)
    }
}

impl TryFrom<RoomRecord> for Room {
    type Error = HearthError;

    fn try_from(record: RoomRecord) -> Result<Self, Self::Error> {
        let mut builder = Room::builder().key(record.key()).name(record.name);
        if let Some(temperature) = record.temperature {
            builder = builder.temperature(temperature);
        }
        if let Some(hvac) = record.hvac {
            builder = builder.hvac(hvac);
        }
        for window in record.windows {
            builder = builder.window(window.direction, window.state);
        }
        builder.build()
    }
}

impl From<&Room> for RoomRecord {
    fn from(room: &Room) -> Self {
        Self {
            row: room.key.row,
            room: room.key.room,
            name: room.name.clone(),
            temperature: Some(room.temperature),
            hvac: Some(room.hvac),
            windows: room.windows.clone(),
        }
    }
}
