//! Per-tick room control: summer breeze, HVAC hysteresis and the
//! temperature step.
//!
//! Every function here is pure apart from [`adjust_room`], which applies one
//! tick to one room in a fixed order:
//!
//! 1. summer-breeze check (windows and HVAC),
//! 2. HVAC hysteresis when no breeze,
//! 3. one discrete temperature step, unless the room is overridden.

use crate::room::{HeatingMode, Room, RoomHeatingMode, WindowState};
use crate::season::Season;
use crate::time::SimDateTime;

/// Temperature change per tick while the HVAC runs.
pub const HVAC_STEP: f64 = 0.1;
/// Temperature change per tick while the room drifts toward the outside.
pub const DRIFT_STEP: f64 = 0.05;
/// HVAC switches off once the room is this close to its target.
pub const TARGET_BAND: f64 = 0.1;
/// HVAC switches on once the room has drifted this close to the outside.
pub const OUTSIDE_BAND: f64 = 0.25;

/// Inputs shared by every room for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickConditions {
    pub date: SimDateTime,
    pub mode: HeatingMode,
    /// Away-mode default temperature for the current season.
    pub away_temperature: f64,
    pub outside_temperature: f64,
    pub season: Season,
}

/// Whether the room should vent through open windows instead of running
/// the HVAC.
#[must_use]
pub fn summer_breeze(room: &Room, target: f64, outside: f64, season: Season) -> bool {
    let away = match room.heating_mode {
        RoomHeatingMode::Away => true,
        RoomHeatingMode::Zone | RoomHeatingMode::Overridden => false,
    };
    season.is_summer()
        && target < room.temperature
        && outside < room.temperature
        && !away
        && !room.has_blocked_window()
}

/// Two-threshold hysteresis: a running HVAC keeps running until the target
/// band is reached, an idle one stays idle until the room has drifted into
/// the outside band.
#[must_use]
pub fn next_hvac(hvac: bool, temperature: f64, target: f64, outside: f64) -> bool {
    let within_target = (temperature - target).abs() <= TARGET_BAND;
    let within_outside = (temperature - outside).abs() <= OUTSIDE_BAND;
    (hvac && !within_target) || (!hvac && within_outside)
}

/// Move `temperature` exactly one `step` toward `goal`, or leave it when the
/// gap is smaller than a step.
#[must_use]
pub fn step_temperature(temperature: f64, goal: f64, step: f64) -> f64 {
    let delta = goal - temperature;
    if delta >= step {
        temperature + step
    } else if delta <= -step {
        temperature - step
    } else {
        temperature
    }
}

/// Apply one tick to `room` with the already selected `target`.
pub fn adjust_room(room: &mut Room, target: f64, conditions: &TickConditions) {
    let outside = conditions.outside_temperature;

    if summer_breeze(room, target, outside, conditions.season) {
        room.hvac = false;
        room.set_windows(WindowState::Open);
    } else {
        room.set_windows(WindowState::Closed);
        room.hvac = next_hvac(room.hvac, room.temperature, target, outside);
    }

    match room.heating_mode {
        RoomHeatingMode::Overridden => {}
        RoomHeatingMode::Zone | RoomHeatingMode::Away => {
            let (goal, step) = if room.hvac {
                (target, HVAC_STEP)
            } else {
                (outside, DRIFT_STEP)
            };
            room.temperature = step_temperature(room.temperature, goal, step);
        }
    }
}
