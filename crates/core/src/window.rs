//! Zoom/scroll window
//!
//! A [`Window`] is a plain value: the controller hands out copies and every
//! projection query takes one by reference, so a query always sees a single
//! consistent range.
//!
//! Bounds are `f64` because zoom arithmetic produces fractional positions;
//! queries floor them when they need an index.

use crate::record::TraceIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Right edge of a window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WindowEnd {
    /// Fixed right edge; stays put as the log grows
    Bounded(f64),
    /// Live: tracks the end of the log as records are appended
    Unbounded,
}

impl WindowEnd {
    /// The bound, if any
    pub fn bound(&self) -> Option<f64> {
        match self {
            WindowEnd::Bounded(end) => Some(*end),
            WindowEnd::Unbounded => None,
        }
    }
}

/// The contiguous range of trace indices under view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Left edge (inclusive)
    pub start: f64,
    /// Right edge
    pub end: WindowEnd,
}

impl Window {
    /// The whole log, live
    pub const FULL: Window = Window {
        start: 0.0,
        end: WindowEnd::Unbounded,
    };

    /// Create a bounded window
    pub fn bounded(start: f64, end: f64) -> Self {
        Self {
            start,
            end: WindowEnd::Bounded(end),
        }
    }

    /// Create a live window starting at `start`
    pub fn from_start(start: f64) -> Self {
        Self {
            start,
            end: WindowEnd::Unbounded,
        }
    }

    /// Check if this is the full live window `{0, Unbounded}`
    pub fn is_full(&self) -> bool {
        self.start == 0.0 && self.is_live()
    }

    /// Check if the right edge tracks new appends
    pub fn is_live(&self) -> bool {
        matches!(self.end, WindowEnd::Unbounded)
    }

    /// Right edge, with an unbounded end resolved to `trace_count`
    pub fn end_or(&self, trace_count: usize) -> f64 {
        self.end.bound().unwrap_or(trace_count as f64)
    }

    /// Number of trace positions covered, given the current log length
    pub fn rendered_count(&self, trace_count: usize) -> f64 {
        self.end_or(trace_count) - self.start
    }

    /// Floored left edge as an index
    pub fn start_index(&self) -> TraceIndex {
        self.start.max(0.0).floor() as TraceIndex
    }

    /// Floored right edge as an index, `None` when live
    pub fn end_index(&self) -> Option<TraceIndex> {
        self.end.bound().map(|end| end.max(0.0).floor() as TraceIndex)
    }

    /// Check if `index` lies within `[floor(start), floor(end)]`
    pub fn contains(&self, index: TraceIndex) -> bool {
        index >= self.start_index() && self.end_index().map_or(true, |end| index <= end)
    }
}

impl Default for Window {
    fn default() -> Self {
        Window::FULL
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            WindowEnd::Bounded(end) => write!(f, "[{}, {})", self.start, end),
            WindowEnd::Unbounded => write!(f, "[{}, live)", self.start),
        }
    }
}
