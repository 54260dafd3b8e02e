//! House layout port: where rooms live.
//!
//! The layout owns every [`Room`]. Heating zones only hold
//! [`LocationKey`]s and resolve them through this trait when they need the
//! room state.

use hearth_domain::error::{HearthError, NotFoundError};
use hearth_domain::room::{LocationKey, Room};

/// Resolves room keys to room state and enumerates all rooms.
pub trait HouseLayout {
    fn find_room(&self, key: LocationKey) -> Option<&Room>;

    fn find_room_mut(&mut self, key: LocationKey) -> Option<&mut Room>;

    /// Every room of the house, in layout order.
    fn rooms(&self) -> impl Iterator<Item = &Room>;

    fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room>;

    fn contains(&self, key: LocationKey) -> bool {
        self.find_room(key).is_some()
    }

    /// Like [`find_room`](Self::find_room) but reports a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no room has `key`.
    fn get_room(&self, key: LocationKey) -> Result<&Room, HearthError> {
        self.find_room(key).ok_or_else(|| room_not_found(key))
    }

    /// Like [`find_room_mut`](Self::find_room_mut) but reports a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no room has `key`.
    fn get_room_mut(&mut self, key: LocationKey) -> Result<&mut Room, HearthError> {
        self.find_room_mut(key).ok_or_else(|| room_not_found(key))
    }
}

fn room_not_found(key: LocationKey) -> HearthError {
    NotFoundError {
        entity: "Room",
        id: key.to_string(),
    }
    .into()
}
