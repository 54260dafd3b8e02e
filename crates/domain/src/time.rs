//! Simulated time helpers.

use chrono::{NaiveDateTime, Timelike};

/// Wall-clock date and time inside the simulation. It has no time zone: the
/// house lives in whatever local time the simulation was started with.
pub type SimDateTime = NaiveDateTime;

/// Hour of day (`0..=23`) of a simulated instant.
#[must_use]
pub fn hour_of(date: SimDateTime) -> u32 {
    date.hour()
}

/// Current local wall-clock time, truncated to the second.
#[must_use]
pub fn local_now() -> SimDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
