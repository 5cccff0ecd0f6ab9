//! Search over top-level traces
//!
//! The trace view's search box filters the top-level list down to DOM
//! events whose name matches the query. A query is a comma-separated list
//! of terms; an event matches when its name contains any of them,
//! case-insensitively.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod query;

pub use filter::filter_top_level;
pub use query::SearchQuery;
