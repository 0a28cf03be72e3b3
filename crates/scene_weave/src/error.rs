//! Error types and result alias for the crate.
//!
//! Structural problems in the input layer list (unparseable names, orphaned
//! decorations, duplicate placeholder bases) are not errors; they accumulate
//! in [`crate::scene::QuarantineSet`]. The [`enum@Error`] variants cover the
//! fatal paths only: invalid configuration and descriptor IO/JSON failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("descriptor JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
