//! Errors reported by conversions and scheme generation.

use thiserror::Error;

/// Every failure the engine can report. None of them are fatal; each one is
/// returned to the immediate caller.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input is not 6 hexadecimal digits with an optional leading `#`.
    #[error("invalid hex color {0:?}, expected 6 hexadecimal digits with an optional leading '#'")]
    InvalidFormat(String),

    /// The scheme mode is not one of the supported modes.
    #[error("unknown scheme mode {0:?}")]
    UnknownMode(String),

    /// A numeric component was outside of its documented domain.
    #[error("{component} value {value} is out of range")]
    OutOfRange {
        /// Name of the offending component.
        component: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A response from the remote color API did not match the expected
    /// schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
