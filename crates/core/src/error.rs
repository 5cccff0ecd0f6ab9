//! Error types for trace ingestion and lookup
//!
//! Both variants are non-fatal: the caller gets a typed failure and the
//! store is left exactly as it was before the call.

use crate::record::TraceIndex;
use thiserror::Error;

/// Errors raised by the trace store and the queries over it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Index is not (yet) part of the log
    #[error("trace index {index} out of range (trace count {trace_count})")]
    OutOfRange {
        /// The requested index
        index: TraceIndex,
        /// Number of records in the log at the time of the request
        trace_count: usize,
    },

    /// Ingestion tuple is missing a field its declared type requires
    #[error("malformed trace record: {reason}")]
    MalformedRecord {
        /// What was wrong with the record
        reason: String,
    },
}

impl TraceError {
    /// Build an `OutOfRange` error
    pub fn out_of_range(index: TraceIndex, trace_count: usize) -> Self {
        TraceError::OutOfRange { index, trace_count }
    }

    /// Build a `MalformedRecord` error
    pub fn malformed(reason: impl Into<String>) -> Self {
        TraceError::MalformedRecord {
            reason: reason.into(),
        }
    }

    /// Check if this is an out-of-range lookup
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, TraceError::OutOfRange { .. })
    }

    /// Check if this is a rejected record
    pub fn is_malformed(&self) -> bool {
        matches!(self, TraceError::MalformedRecord { .. })
    }
}

/// Result type for trace operations
pub type TraceResult<T> = std::result::Result<T, TraceError>;
