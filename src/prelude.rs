//! Convenient imports for tracescope.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```ignore
//! use tracescope::prelude::*;
//!
//! let mut session = TraceSession::new();
//! session.append(TraceRecord::event("click"))?;
//! ```

// Main entry point
pub use crate::session::{TraceSession, TraceSessionBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Records
pub use crate::types::{Frame, MutationKind, RawTrace, TraceIndex, TraceKind, TraceRecord};

// Windowing
pub use crate::types::{EngineConfig, ScrollDirection, Window, WindowEnd, ZoomDirection};

// Search
pub use crate::types::SearchQuery;
