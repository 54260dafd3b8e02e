//! # hearth-app
//!
//! Application layer: the heating use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `HouseLayout`: resolve and enumerate the rooms of the house
//!   - `EventPublisher`: deliver a house event to registered listeners
//! - Provide the explicit, ordered **listener registry** (no global bus)
//! - Provide the house components:
//!   - `HeatingModel`: zones, invariants, per-tick control entry point
//!   - `SystemParameters`: simulated date, outside temperature, season
//!   - `SecurityModel`: away-mode source
//! - Compose them into a `House` guarded by one coarse lock
//! - Drive the simulation with a `SimulationClock`
//!
//! ## Dependency rule
//! Depends on `hearth-domain` only (plus `tokio` for the clock driver).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod event_bus;
pub mod house;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
