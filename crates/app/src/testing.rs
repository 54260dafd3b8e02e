//! Test fixtures shared by the unit tests of this crate.

use chrono::{NaiveDate, NaiveDateTime};

use hearth_domain::room::{Direction, LocationKey, Room, WindowState};

use crate::ports::HouseLayout;

/// Minimal layout: rooms in a vector, looked up by linear scan.
#[derive(Debug, Default)]
pub struct VecLayout(pub Vec<Room>);

impl HouseLayout for VecLayout {
    fn find_room(&self, key: LocationKey) -> Option<&Room> {
        self.0.iter().find(|room| room.key == key)
    }

    fn find_room_mut(&mut self, key: LocationKey) -> Option<&mut Room> {
        self.0.iter_mut().find(|room| room.key == key)
    }

    fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.0.iter()
    }

    fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.0.iter_mut()
    }
}

pub fn key(room: u32) -> LocationKey {
    LocationKey::new(0, room)
}

pub fn room(n: u32, temperature: f64) -> Room {
    Room::builder()
        .key(key(n))
        .name(format!("Room {n}"))
        .temperature(temperature)
        .window(Direction::North, WindowState::Closed)
        .build()
        .unwrap()
}

/// Four rooms at 20 degrees, keys `0/1` to `0/4`.
pub fn layout() -> VecLayout {
    VecLayout((1..=4).map(|n| room(n, 20.0)).collect())
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
