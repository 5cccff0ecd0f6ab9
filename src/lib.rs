//! # tracescope
//!
//! Execution-trace windowing and call-tree projection for debugger tracing.
//!
//! A traced program emits a strictly ordered log of function calls, exits,
//! DOM events and DOM mutations. tracescope keeps that log, derives the call
//! tree incrementally, and answers "what are the roots of the call tree
//! inside this zoomed/scrolled window" without ever building the tree for
//! the whole log.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tracescope::prelude::*;
//!
//! let mut session = TraceSession::new();
//! let main = session.register_frame(Frame::new("main", "app.js", 1, 0));
//! session.append(TraceRecord::call(main))?;
//! session.append(TraceRecord::Exit)?;
//! session.append(TraceRecord::event("click"))?;
//!
//! // Full window: the top-level traces
//! assert_eq!(session.visible_roots(), vec![0, 2]);
//!
//! // Zoom onto the call
//! session.focus_on_subtree(0)?;
//! assert_eq!(session.visible_roots(), vec![0]);
//! ```
//!
//! ## Components
//!
//! - [`TraceStore`] - append-only log with parent/child indices
//! - [`queries`] - last descendant, following siblings, windowed children
//! - [`WindowController`] - scroll, zoom, focus and reset with clamping
//! - [`projector`] - visible roots for a window
//! - [`search`] - event-name filtering of top-level traces

#![warn(missing_docs)]

mod error;
mod session;
mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use session::{TraceSession, TraceSessionBuilder};

// Re-export components for callers that manage their own state
pub use tracescope_engine::{projector, WindowController};
pub use tracescope_search as search;
pub use tracescope_storage::{queries, TraceStore};

// Re-export types
pub use types::*;
