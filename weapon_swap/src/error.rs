//! Error types for weapon_swap
//!
//! Failures in this crate are terminal-local: they are logged where they are
//! detected and returned to the caller, never retried.

use std::fmt;

/// Result type for weapon_swap operations
pub type Result<T> = std::result::Result<T, Error>;

/// weapon_swap errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Activation refused: substitute template or root not configured
    MissingPrerequisite(String),

    /// A node key that is not (or no longer) part of the scene
    InvalidNode(String),

    /// Operation issued in the wrong lifecycle state (e.g. re-activation)
    InvalidState(String),

    /// Scene-wide search gave up without finding any candidate
    SearchFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingPrerequisite(msg) => write!(f, "Missing prerequisite: {}", msg),
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Error::SearchFailed(msg) => write!(f, "Search failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an `Error::InvalidState`, logging it at ERROR severity with file:line.
///
/// ```ignore
/// return Err(swap_err!("weapon_swap::Controller", "already active"));
/// ```
#[macro_export]
macro_rules! swap_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::swap_error!($source, "{}", message);
        $crate::prelude::Error::InvalidState(message)
    }};
}

/// Early-return an `Error::InvalidState` built by `swap_err!`.
#[macro_export]
macro_rules! swap_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::swap_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
