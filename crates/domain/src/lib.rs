//! # hearth-domain
//!
//! Pure domain model for the hearth house heating simulation.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, simulated time
//! - Define **Rooms** (temperature, HVAC flag, windows, heating mode)
//! - Define **Periods** (morning / afternoon / night schedule buckets)
//! - Define **Heating zones** and the per-tick **control algorithm**
//! - Define **Seasons** and away-mode default temperatures
//! - Define **Events** exchanged between the house components
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod control;
pub mod event;
pub mod period;
pub mod room;
pub mod season;
pub mod zone;
