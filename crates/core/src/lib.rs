//! Core types for tracescope
//!
//! This crate defines the data model shared by every other crate:
//! - [`TraceRecord`]: one entry of the append-only execution trace
//! - [`Frame`]: a call-site descriptor referenced by `Call` records
//! - [`RawTrace`]: the positional ingestion tuple delivered by the transport
//! - [`Window`]: the zoom/scroll range under view
//! - [`TraceError`]: the error taxonomy for ingestion and lookups

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod raw;
pub mod record;
pub mod window;

pub use error::{TraceError, TraceResult};
pub use raw::RawTrace;
pub use record::{Frame, FrameIndex, MutationKind, TraceIndex, TraceKind, TraceRecord};
pub use window::{Window, WindowEnd};
