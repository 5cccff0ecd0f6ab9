//! Public types for the tracescope API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// Records and frames
pub use tracescope_core::{Frame, FrameIndex, MutationKind, TraceIndex, TraceKind, TraceRecord};

// Ingestion
pub use tracescope_core::RawTrace;

// Windowing
pub use tracescope_core::{Window, WindowEnd};
pub use tracescope_engine::{EngineConfig, ScrollDirection, ZoomDirection};

// Search
pub use tracescope_search::SearchQuery;
