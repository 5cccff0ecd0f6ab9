//! Trace record types
//!
//! These types define the structure of an execution trace as it is emitted
//! by the traced program.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a record in the append-only log
///
/// Assigned at append time, strictly increasing, never reused.
pub type TraceIndex = usize;

/// Position of a frame in the frames table
pub type FrameIndex = u32;

/// Kind of DOM mutation observed by the tracer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    /// Node inserted
    Add,
    /// Node removed
    Remove,
    /// Attribute changed
    Attributes,
}

impl MutationKind {
    /// Parse the wire name of a mutation kind
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" => Some(MutationKind::Add),
            "remove" => Some(MutationKind::Remove),
            "attributes" => Some(MutationKind::Attributes),
            _ => None,
        }
    }

    /// Wire name of this mutation kind
    pub fn name(&self) -> &'static str {
        match self {
            MutationKind::Add => "add",
            MutationKind::Remove => "remove",
            MutationKind::Attributes => "attributes",
        }
    }
}

/// Field-less discriminant of a [`TraceRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceKind {
    /// Function entry
    Call,
    /// Function return
    Exit,
    /// DOM event dispatch
    Event,
    /// DOM mutation
    DomMutation,
}

impl TraceKind {
    /// Parse the wire name of a record type
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "call" => Some(TraceKind::Call),
            "exit" => Some(TraceKind::Exit),
            "event" => Some(TraceKind::Event),
            "dom-mutation" => Some(TraceKind::DomMutation),
            _ => None,
        }
    }

    /// Wire name of this record type
    pub fn name(&self) -> &'static str {
        match self {
            TraceKind::Call => "call",
            TraceKind::Exit => "exit",
            TraceKind::Event => "event",
            TraceKind::DomMutation => "dom-mutation",
        }
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single entry of the execution trace
///
/// Each variant carries only the fields meaningful for its type:
/// - Call: the frame being entered
/// - Exit: closes the innermost open call
/// - Event: the DOM event name
/// - DomMutation: what changed in the DOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceRecord {
    /// Function entry
    Call {
        /// Frame entered by this call
        frame: FrameIndex,
    },
    /// Function return
    Exit,
    /// DOM event dispatch
    Event {
        /// Event name, e.g. "click"
        name: String,
    },
    /// DOM mutation
    DomMutation {
        /// Kind of mutation
        kind: MutationKind,
    },
}

impl TraceRecord {
    /// Shorthand for a `Call` record
    pub fn call(frame: FrameIndex) -> Self {
        TraceRecord::Call { frame }
    }

    /// Shorthand for an `Event` record
    pub fn event(name: impl Into<String>) -> Self {
        TraceRecord::Event { name: name.into() }
    }

    /// Shorthand for a `DomMutation` record
    pub fn mutation(kind: MutationKind) -> Self {
        TraceRecord::DomMutation { kind }
    }

    /// Get the record type
    pub fn kind(&self) -> TraceKind {
        match self {
            TraceRecord::Call { .. } => TraceKind::Call,
            TraceRecord::Exit => TraceKind::Exit,
            TraceRecord::Event { .. } => TraceKind::Event,
            TraceRecord::DomMutation { .. } => TraceKind::DomMutation,
        }
    }

    /// Frame index, only for `Call`
    pub fn frame(&self) -> Option<FrameIndex> {
        match self {
            TraceRecord::Call { frame } => Some(*frame),
            _ => None,
        }
    }

    /// Event name, only for `Event`
    pub fn event_name(&self) -> Option<&str> {
        match self {
            TraceRecord::Event { name } => Some(name),
            _ => None,
        }
    }

    /// Mutation kind, only for `DomMutation`
    pub fn mutation_kind(&self) -> Option<MutationKind> {
        match self {
            TraceRecord::DomMutation { kind } => Some(*kind),
            _ => None,
        }
    }
}

/// A call-site descriptor
///
/// Frames are stored once in the frames table and referenced by every
/// `Call` record entering them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    /// Function name (empty for anonymous functions)
    pub name: String,
    /// Source URL
    pub url: String,
    /// 1-based line
    pub line: u32,
    /// 0-based column
    pub column: u32,
}

impl Frame {
    /// Create a new frame
    pub fn new(name: impl Into<String>, url: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "(anonymous)"
        } else {
            &self.name
        };
        write!(f, "{} @ {}:{}:{}", name, self.url, self.line, self.column)
    }
}
