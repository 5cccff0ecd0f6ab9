//! Raw ingestion tuples
//!
//! The transport delivers each record as a positional tuple:
//!
//! ```text
//! [type, event_name, mutation_kind, frame_index]
//! ```
//!
//! Fields that do not apply to the declared type are `null` or absent.
//! Validation against the declared type happens in
//! `TryFrom<RawTrace> for TraceRecord`, never during decoding, so a tuple
//! with a missing required field still decodes and is then rejected as
//! `MalformedRecord`.

use crate::error::{TraceError, TraceResult};
use crate::record::{FrameIndex, MutationKind, TraceKind, TraceRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

type RawTuple = (String, Option<String>, Option<String>, Option<FrameIndex>);

/// A record as delivered by the transport, before validation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<JsonValue>", into = "RawTuple")]
pub struct RawTrace {
    /// Declared record type ("call", "exit", "event", "dom-mutation")
    pub kind: String,
    /// Event name (events only)
    pub event_name: Option<String>,
    /// Mutation kind (DOM mutations only)
    pub mutation_kind: Option<String>,
    /// Frame index (calls only)
    pub frame_index: Option<FrameIndex>,
}

impl RawTrace {
    /// Raw `call` tuple
    pub fn call(frame_index: FrameIndex) -> Self {
        Self {
            kind: TraceKind::Call.name().to_string(),
            frame_index: Some(frame_index),
            ..Default::default()
        }
    }

    /// Raw `exit` tuple
    pub fn exit() -> Self {
        Self {
            kind: TraceKind::Exit.name().to_string(),
            ..Default::default()
        }
    }

    /// Raw `event` tuple
    pub fn event(name: impl Into<String>) -> Self {
        Self {
            kind: TraceKind::Event.name().to_string(),
            event_name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Raw `dom-mutation` tuple
    pub fn mutation(kind: impl Into<String>) -> Self {
        Self {
            kind: TraceKind::DomMutation.name().to_string(),
            mutation_kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// Decode a JSON array of tuples
    ///
    /// Decoding errors are reported as `MalformedRecord`; per-type field
    /// checks still happen later, at ingestion.
    pub fn parse_batch(json: &str) -> TraceResult<Vec<RawTrace>> {
        serde_json::from_str(json).map_err(|e| TraceError::malformed(e.to_string()))
    }
}

impl TryFrom<Vec<JsonValue>> for RawTrace {
    type Error = String;

    fn try_from(fields: Vec<JsonValue>) -> Result<Self, Self::Error> {
        if fields.len() > 4 {
            return Err(format!("expected at most 4 fields, got {}", fields.len()));
        }
        let mut fields = fields.into_iter();

        let kind = match fields.next() {
            Some(JsonValue::String(kind)) => kind,
            Some(other) => return Err(format!("record type must be a string, got {}", other)),
            None => return Err("empty trace tuple".to_string()),
        };
        let event_name = optional_string(fields.next(), "event name")?;
        let mutation_kind = optional_string(fields.next(), "mutation kind")?;
        let frame_index = match fields.next() {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::Number(n)) => match n.as_u64().map(FrameIndex::try_from) {
                Some(Ok(index)) => Some(index),
                _ => return Err(format!("invalid frame index {}", n)),
            },
            Some(other) => return Err(format!("frame index must be a number, got {}", other)),
        };

        Ok(Self {
            kind,
            event_name,
            mutation_kind,
            frame_index,
        })
    }
}

fn optional_string(value: Option<JsonValue>, what: &str) -> Result<Option<String>, String> {
    match value {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(other) => Err(format!("{} must be a string, got {}", what, other)),
    }
}

impl From<RawTrace> for RawTuple {
    fn from(raw: RawTrace) -> Self {
        (raw.kind, raw.event_name, raw.mutation_kind, raw.frame_index)
    }
}

impl From<&TraceRecord> for RawTrace {
    fn from(record: &TraceRecord) -> Self {
        match record {
            TraceRecord::Call { frame } => RawTrace::call(*frame),
            TraceRecord::Exit => RawTrace::exit(),
            TraceRecord::Event { name } => RawTrace::event(name.clone()),
            TraceRecord::DomMutation { kind } => RawTrace::mutation(kind.name()),
        }
    }
}

impl TryFrom<RawTrace> for TraceRecord {
    type Error = TraceError;

    fn try_from(raw: RawTrace) -> TraceResult<Self> {
        let kind = TraceKind::from_name(&raw.kind)
            .ok_or_else(|| TraceError::malformed(format!("unknown record type '{}'", raw.kind)))?;

        match kind {
            TraceKind::Call => raw
                .frame_index
                .map(|frame| TraceRecord::Call { frame })
                .ok_or_else(|| TraceError::malformed("call without frame index")),
            TraceKind::Exit => Ok(TraceRecord::Exit),
            TraceKind::Event => raw
                .event_name
                .map(|name| TraceRecord::Event { name })
                .ok_or_else(|| TraceError::malformed("event without event name")),
            TraceKind::DomMutation => {
                let name = raw
                    .mutation_kind
                    .ok_or_else(|| TraceError::malformed("dom-mutation without mutation kind"))?;
                MutationKind::from_name(&name)
                    .map(|kind| TraceRecord::DomMutation { kind })
                    .ok_or_else(|| {
                        TraceError::malformed(format!("unknown mutation kind '{}'", name))
                    })
            }
        }
    }
}
