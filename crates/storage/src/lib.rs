//! Storage layer for tracescope
//!
//! This crate implements the append-only trace log with:
//! - TraceStore: records, frames table and incrementally maintained indices
//!   (parent, children, top level, DOM mutations, calls per frame)
//! - queries: pure tree walks over a store snapshot

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod queries;
pub mod store;

pub use queries::{
    ancestors, children_within_window, collect_following_siblings, depth, last_descendant,
};
pub use store::TraceStore;
