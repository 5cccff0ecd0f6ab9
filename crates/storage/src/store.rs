//! Append-only trace log
//!
//! # Design
//!
//! - Records are stored in a `Vec`; a record's trace index is its position.
//! - Parent/child links are derived at append time from an implicit call
//!   stack: `Call` pushes, `Exit` pops after being recorded as the last child
//!   of the call it closes.
//! - Children lists use SmallVec since most calls have only a few children;
//!   they are keyed by FxHashMap for O(1) lookup.
//! - Every derived list is appended to in index order, so all of them are
//!   strictly increasing and can be binary searched.
//!
//! # Single writer
//!
//! `append` is the only mutator besides `clear`/`finish`. Queries borrow the
//! store immutably, so they can never observe a half-applied append.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracescope_core::{
    Frame, FrameIndex, RawTrace, TraceError, TraceIndex, TraceKind, TraceRecord, TraceResult,
};
use tracing::{debug, warn};

type ChildList = SmallVec<[TraceIndex; 4]>;

/// The trace log plus its derived call-tree indices
#[derive(Debug, Default, Clone)]
pub struct TraceStore {
    records: Vec<TraceRecord>,
    frames: Vec<Frame>,
    /// `parent[i]` is `None` for top-level records, else `< i`
    parent: Vec<Option<TraceIndex>>,
    children: FxHashMap<TraceIndex, ChildList>,
    top_level: Vec<TraceIndex>,
    mutations: Vec<TraceIndex>,
    calls_by_frame: FxHashMap<FrameIndex, Vec<TraceIndex>>,
    /// Open calls, outermost first
    call_stack: Vec<TraceIndex>,
}

impl TraceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            children: FxHashMap::with_capacity_and_hasher(capacity / 4, Default::default()),
            ..Self::default()
        }
    }

    /// Append a record and return its trace index
    ///
    /// Every record, `Event` included, takes the innermost open call as its
    /// parent. Events are top level only because the traced program
    /// dispatches them with an empty stack; an event that arrives while a
    /// call is open nests under that call, so each subtree stays a
    /// contiguous index range.
    ///
    /// # Errors
    ///
    /// - `MalformedRecord`: an `Exit` arrived with no open call to close.
    ///   The store is left unchanged.
    pub fn append(&mut self, record: TraceRecord) -> TraceResult<TraceIndex> {
        let index = self.records.len();

        let parent = match record.kind() {
            TraceKind::Exit => match self.call_stack.last() {
                Some(&open) => Some(open),
                None => {
                    warn!(index, "rejected exit with no open call");
                    return Err(TraceError::malformed("exit without an open call"));
                }
            },
            TraceKind::Event => {
                let parent = self.call_stack.last().copied();
                if parent.is_some() {
                    debug!(index, ?parent, "event dispatched while calls are open");
                }
                parent
            }
            TraceKind::Call | TraceKind::DomMutation => self.call_stack.last().copied(),
        };

        match parent {
            Some(p) => self.children.entry(p).or_default().push(index),
            None => self.top_level.push(index),
        }
        self.parent.push(parent);

        match &record {
            TraceRecord::Call { frame } => {
                self.call_stack.push(index);
                self.calls_by_frame.entry(*frame).or_default().push(index);
            }
            TraceRecord::Exit => {
                self.call_stack.pop();
            }
            TraceRecord::DomMutation { .. } => self.mutations.push(index),
            TraceRecord::Event { .. } => {}
        }

        self.records.push(record);
        Ok(index)
    }

    /// Validate a raw transport tuple and append it
    ///
    /// A malformed tuple is rejected without touching the store.
    pub fn ingest(&mut self, raw: RawTrace) -> TraceResult<TraceIndex> {
        let record = TraceRecord::try_from(raw).map_err(|e| {
            warn!(index = self.records.len(), error = %e, "rejected raw trace");
            e
        })?;
        self.append(record)
    }

    /// Ingest tuples in delivery order
    ///
    /// Stops at the first malformed tuple. Records ingested before it are
    /// kept; the error is returned and nothing after it is looked at.
    pub fn ingest_batch<I>(&mut self, batch: I) -> TraceResult<Vec<TraceIndex>>
    where
        I: IntoIterator<Item = RawTrace>,
    {
        batch.into_iter().map(|raw| self.ingest(raw)).collect()
    }

    /// Drop every record, frame and index for a new recording session
    pub fn clear(&mut self) {
        debug!(
            records = self.records.len(),
            frames = self.frames.len(),
            "clearing trace store"
        );
        self.records.clear();
        self.frames.clear();
        self.parent.clear();
        self.children.clear();
        self.top_level.clear();
        self.mutations.clear();
        self.calls_by_frame.clear();
        self.call_stack.clear();
    }

    /// Mark the end of the recording session
    ///
    /// Every call still open is considered closed from now on; no records
    /// are synthesised.
    pub fn finish(&mut self) {
        if !self.call_stack.is_empty() {
            debug!(open_calls = self.call_stack.len(), "closing open calls at session end");
        }
        self.call_stack.clear();
    }

    /// Get a record by trace index
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: `index >= len()`
    pub fn get(&self, index: TraceIndex) -> TraceResult<&TraceRecord> {
        self.records
            .get(index)
            .ok_or_else(|| TraceError::out_of_range(index, self.records.len()))
    }

    /// Fail with `OutOfRange` unless `index` is in the log
    pub fn check_index(&self, index: TraceIndex) -> TraceResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(TraceError::out_of_range(index, self.records.len()))
        }
    }

    /// Number of records (the trace count)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(index, record)` in log order
    pub fn iter(&self) -> impl Iterator<Item = (TraceIndex, &TraceRecord)> + '_ {
        self.records.iter().enumerate()
    }

    // ========== Frames ==========

    /// Add a frame to the frames table
    pub fn register_frame(&mut self, frame: Frame) -> FrameIndex {
        let index = self.frames.len() as FrameIndex;
        self.frames.push(frame);
        index
    }

    /// Look up a frame
    pub fn frame(&self, index: FrameIndex) -> Option<&Frame> {
        self.frames.get(index as usize)
    }

    /// Number of registered frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Every `Call` into `frame`, in log order
    pub fn calls_for_frame(&self, frame: FrameIndex) -> &[TraceIndex] {
        self.calls_by_frame
            .get(&frame)
            .map(|calls| calls.as_slice())
            .unwrap_or(&[])
    }

    // ========== Indices ==========

    /// Parent of `index`, `None` at top level or for unknown indices
    pub fn parent_of(&self, index: TraceIndex) -> Option<TraceIndex> {
        self.parent.get(index).copied().flatten()
    }

    /// Structural children of `index`, in temporal order
    ///
    /// This ignores whether the call is still open; tree queries apply
    /// that rule on top.
    pub fn children_of(&self, index: TraceIndex) -> &[TraceIndex] {
        self.children
            .get(&index)
            .map(|children| children.as_slice())
            .unwrap_or(&[])
    }

    /// Records with no enclosing call, ascending
    pub fn top_level(&self) -> &[TraceIndex] {
        &self.top_level
    }

    /// DOM mutation records, ascending
    pub fn mutations(&self) -> &[TraceIndex] {
        &self.mutations
    }

    /// Calls without their `Exit` yet, outermost first
    pub fn open_calls(&self) -> &[TraceIndex] {
        &self.call_stack
    }

    /// Check if `index` is a call still waiting for its `Exit`
    pub fn is_open(&self, index: TraceIndex) -> bool {
        self.call_stack.binary_search(&index).is_ok()
    }
}
