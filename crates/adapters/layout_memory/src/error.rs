//! Layout-specific error type.

use hearth_domain::error::HearthError;
use hearth_domain::room::LocationKey;

/// Errors raised while building a layout or loading a layout document.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The layout file could not be read.
    #[error("failed to read layout file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid layout JSON.
    #[error("invalid layout document")]
    Parse(#[from] serde_json::Error),

    /// Two rooms share the same location.
    #[error("room {0} is defined twice")]
    DuplicateRoom(LocationKey),

    /// A room breaks a domain invariant.
    #[error("invalid room")]
    Domain(#[from] HearthError),
}
