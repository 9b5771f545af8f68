//! Error types for the place-code lookup layer.

use thiserror::Error;

/// Errors raised by lookup backends.
///
/// Misses are not errors; they are `Ok(None)` / `Ok(false)` answers.
/// These variants cover genuine backend faults only, which callers doing
/// full validation surface as a distinct lookup-failure outcome.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Failed to connect to the backing database.
    #[error("failed to connect to place database: {0}")]
    Connect(#[source] sqlx::Error),

    /// A query against the backing database failed.
    #[error("place query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// The table holds a place code that does not match the expected shape.
    #[error("malformed place code in table: '{code}'")]
    Corrupt { code: String },

    /// Backend-specific fault for non-SQL implementations.
    #[error("lookup backend error: {0}")]
    Backend(String),
}

/// Errors that can occur when parsing a [`crate::PlaceCode`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceCodeError {
    /// The code string is empty.
    #[error("place code cannot be empty")]
    Empty,

    /// The code is not exactly 4 characters long.
    #[error("place code must be 4 characters, got {actual}")]
    Length { actual: usize },

    /// The code does not match the letter-plus-three-digits shape.
    #[error("invalid place code shape: '{code}'")]
    Shape { code: String },
}
