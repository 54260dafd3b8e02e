//! Common error types used across the workspace.
//!
//! Each failure family is a typed error converted into [`HearthError`]
//! via `#[from]`, so callers can match on the variant without parsing text.

/// Top-level error returned by every fallible heating operation.
#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    InvalidStateTransition(#[from] InvalidStateTransitionError),
}

/// Domain invariant violations detected before any mutation happens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("room location key is required")]
    MissingLocation,

    #[error("temperature must be a finite number, got {0}")]
    NonFiniteTemperature(f64),
}

/// A zone or room lookup missed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The operation would break a uniqueness rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("a heating zone named {0:?} already exists")]
    DuplicateZoneName(String),

    #[error("room {room} is already part of zone {zone}")]
    RoomAlreadyInZone { room: String, zone: String },
}

/// A room heating-mode change that the lifecycle does not allow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("room {room} cannot leave {from} mode: it is not overridden")]
pub struct InvalidStateTransitionError {
    pub room: String,
    pub from: String,
}
