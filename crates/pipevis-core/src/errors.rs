//! Error types for pipevis-core.
//!
//! The simulation has almost no error surface by design: failed scans are
//! domain outcomes (status and log levels), and operations invoked outside
//! their preconditions are silent no-ops. What remains is programmer error,
//! kept structured and explicit.

use std::fmt::{self, Display};

/// Result type used throughout pipevis-core.
pub type SimResult<T> = Result<T, SimError>;

/// Top-level error type for pipevis-core.
#[derive(Debug)]
pub enum SimError {
    /// Invalid or unsupported argument at construction time.
    InvalidArgument { message: String },

    /// Internal invariant violation, e.g. a corrupted static stage table.
    Invariant { message: String },
}

impl SimError {
    /// Construct an invalid argument error.
    pub fn invalid_argument<M: Into<String>>(message: M) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Construct an invariant violation error.
    pub fn invariant<M: Into<String>>(message: M) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }
}

impl Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { message } => {
                write!(f, "invalid argument: {message}")
            }
            Self::Invariant { message } => {
                write!(f, "invariant violation: {message}")
            }
        }
    }
}

impl std::error::Error for SimError {}
