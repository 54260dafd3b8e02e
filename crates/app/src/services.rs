//! House components that react to events and expose the heating use-cases.

pub mod heating_model;
pub mod security;
pub mod system_parameters;
