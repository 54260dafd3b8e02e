//! # hearth-adapter-layout-memory
//!
//! In-memory implementation of the [`HouseLayout`] port.
//!
//! Rooms live in a single vector in layout order, indexed by
//! [`LocationKey`]. Layouts are loaded from JSON documents (see
//! [`LayoutDocument`]) or built in code.
//!
//! ## Dependency rule
//!
//! Depends on `hearth-app` (port traits) and `hearth-domain` only.

mod document;
mod error;

use std::collections::HashMap;
use std::path::Path;

use hearth_app::ports::HouseLayout;
use hearth_domain::room::{Direction, LocationKey, Room, WindowState};

pub use document::{LayoutDocument, RoomRecord};
pub use error::LayoutError;

/// Room arena backing a house.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHouseLayout {
    rooms: Vec<Room>,
    index: HashMap<LocationKey, usize>,
}

impl InMemoryHouseLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room at the end of the layout.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DuplicateRoom`] if the location is taken, or
    /// [`LayoutError::Domain`] if the room is invalid.
    pub fn insert(&mut self, room: Room) -> Result<(), LayoutError> {
        room.validate()?;
        if self.index.contains_key(&room.key) {
            return Err(LayoutError::DuplicateRoom(room.key));
        }
        self.index.insert(room.key, self.rooms.len());
        self.rooms.push(room);
        Ok(())
    }

    /// Take a room out of the layout, keeping the order of the others.
    pub fn remove(&mut self, key: LocationKey) -> Option<Room> {
        let position = self.index.remove(&key)?;
        let room = self.rooms.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(room)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Build a layout from a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] on the first invalid or duplicated room.
    pub fn from_document(document: LayoutDocument) -> Result<Self, LayoutError> {
        let mut layout = Self::new();
        for record in document.rooms {
            layout.insert(Room::try_from(record)?)?;
        }
        Ok(layout)
    }

    /// Parse a JSON layout document.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Parse`] for malformed JSON, otherwise see
    /// [`from_document`](Self::from_document).
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON layout file.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Io`] if the file cannot be read, otherwise see
    /// [`from_json`](Self::from_json).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let layout = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), rooms = layout.len(), "house layout loaded");
        Ok(layout)
    }

    #[must_use]
    pub fn to_document(&self) -> LayoutDocument {
        LayoutDocument {
            rooms: self.rooms.iter().map(RoomRecord::from).collect(),
        }
    }

    /// Two-storey sample house used when no layout file is configured.
    #[must_use]
    pub fn demo() -> Self {
        let rooms: [(u32, u32, &str, &[(Direction, WindowState)]); 6] = [
            (0, 1, "Kitchen", &[(Direction::North, WindowState::Closed)]),
            (
                0,
                2,
                "Living room",
                &[
                    (Direction::South, WindowState::Closed),
                    (Direction::West, WindowState::Closed),
                ],
            ),
            (0, 3, "Hall", &[]),
            (1, 1, "Bathroom", &[(Direction::North, WindowState::Blocked)]),
            (1, 2, "Bedroom", &[(Direction::East, WindowState::Closed)]),
            (1, 3, "Office", &[(Direction::South, WindowState::Closed)]),
        ];

        let mut layout = Self::new();
        for (row, room, name, windows) in rooms {
            let mut builder = Room::builder().key(LocationKey::new(row, room)).name(name);
            for (direction, state) in windows {
                builder = builder.window(*direction, *state);
            }
            let inserted = builder
                .build()
                .map_err(LayoutError::from)
                .and_then(|room| layout.insert(room));
            if let Err(err) = inserted {
                tracing::warn!(%err, name, "skipping demo room");
            }
        }
        layout
    }
}

impl HouseLayout for InMemoryHouseLayout {
    fn find_room(&self, key: LocationKey) -> Option<&Room> {
        self.index.get(&key).and_then(|position| self.rooms.get(*position))
    }

    fn find_room_mut(&mut self, key: LocationKey) -> Option<&mut Room> {
        let position = *self.index.get(&key)?;
        self.rooms.get_mut(position)
    }

    fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.iter_mut()
    }
}
