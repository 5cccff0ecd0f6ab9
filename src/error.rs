//! Unified error types for tracescope.
//!
//! This module wraps the errors of the internal crates and presents a
//! single interface to callers.

use thiserror::Error;
use tracescope_core::{TraceError, TraceIndex};
use tracescope_engine::ConfigError;

/// All tracescope errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Trace index is not in the log
    #[error("out of range: trace index {index} (trace count {trace_count})")]
    OutOfRange {
        /// The requested index
        index: TraceIndex,
        /// Number of records at the time of the request
        trace_count: usize,
    },

    /// Ingested record rejected; the store was not modified
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for tracescope operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is an out-of-range lookup.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }

    /// Check if this is a rejected record.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedRecord(_))
    }
}

// Convert from trace errors
impl From<TraceError> for Error {
    fn from(e: TraceError) -> Self {
        match e {
            TraceError::OutOfRange { index, trace_count } => {
                Error::OutOfRange { index, trace_count }
            }
            TraceError::MalformedRecord { reason } => Error::MalformedRecord(reason),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
