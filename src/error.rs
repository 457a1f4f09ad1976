//! Error types for the dispatch core
//!
//! There is exactly one failure mode in this crate: a runtime [`TypeId`] with
//! no registered concrete type. Everything else is resolved at compile time.

use thiserror::Error;

use crate::types::TypeId;

/// Error type for dispatch operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The runtime type id has no registered concrete element type
    #[error("unsupported type id: {0}")]
    UnsupportedType(TypeId),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
