//! Trace session entry point.
//!
//! This module provides the `TraceSession` struct, the primary entry point
//! for recording a trace and querying the call tree under a window.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracescope_core::{Frame, FrameIndex, RawTrace, TraceIndex, TraceRecord, Window};
use tracescope_engine::{
    children_for, visible_roots, EngineConfig, ScrollDirection, WindowController, ZoomDirection,
};
use tracescope_search::{filter_top_level, SearchQuery};
use tracescope_storage::{ancestors, last_descendant, TraceStore};
use tracing::debug;

/// One trace view: the recorded log plus the window over it.
///
/// Create a session with [`TraceSession::new`] or [`TraceSession::builder`].
///
/// # Example
///
/// ```ignore
/// use tracescope::prelude::*;
///
/// let mut session = TraceSession::new();
/// session.append(TraceRecord::call(0))?;
/// session.append(TraceRecord::Exit)?;
///
/// // Zoom in around the middle of the view
/// session.zoom(ZoomDirection::In, 0.5, 0.5);
/// let roots = session.visible_roots();
/// ```
#[derive(Debug, Clone)]
pub struct TraceSession {
    store: TraceStore,
    controller: WindowController,
    config: EngineConfig,
}

impl Default for TraceSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceSession {
    /// Create a session with default settings.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a session from an already validated config.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            store: TraceStore::with_capacity(config.initial_capacity),
            controller: WindowController::new(&config),
            config,
        }
    }

    /// Create a builder for session configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let session = TraceSession::builder()
    ///     .config_path("tracescope.toml")
    ///     .capacity(1 << 16)
    ///     .build()?;
    /// ```
    pub fn builder() -> TraceSessionBuilder {
        TraceSessionBuilder::new()
    }

    /// Read access to the trace log and its indices.
    pub fn store(&self) -> &TraceStore {
        &self.store
    }

    /// The config this session was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========== Ingestion ==========

    /// Append a validated record.
    pub fn append(&mut self, record: TraceRecord) -> Result<TraceIndex> {
        Ok(self.store.append(record)?)
    }

    /// Validate and append a raw transport tuple.
    pub fn ingest(&mut self, raw: RawTrace) -> Result<TraceIndex> {
        Ok(self.store.ingest(raw)?)
    }

    /// Ingest raw tuples in order, stopping at the first malformed one.
    pub fn ingest_batch<I>(&mut self, batch: I) -> Result<Vec<TraceIndex>>
    where
        I: IntoIterator<Item = RawTrace>,
    {
        Ok(self.store.ingest_batch(batch)?)
    }

    /// Decode a JSON array of raw tuples and ingest it.
    pub fn ingest_json(&mut self, json: &str) -> Result<Vec<TraceIndex>> {
        let batch = RawTrace::parse_batch(json)?;
        self.ingest_batch(batch)
    }

    /// Encode the log as a JSON array of raw tuples, in log order.
    ///
    /// The output is accepted by [`ingest_json`](Self::ingest_json).
    pub fn export_json(&self) -> Result<String> {
        let batch: Vec<RawTrace> = self.store.iter().map(|(_, record)| record.into()).collect();
        Ok(serde_json::to_string(&batch)?)
    }

    /// Add a frame to the frames table.
    pub fn register_frame(&mut self, frame: Frame) -> FrameIndex {
        self.store.register_frame(frame)
    }

    /// Look up a frame.
    pub fn frame(&self, index: FrameIndex) -> Option<&Frame> {
        self.store.frame(index)
    }

    // ========== Lifecycle ==========

    /// Drop the recorded trace. The window is left as it is.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Start a new recording: drop the trace and return to the full window.
    pub fn begin_recording(&mut self) {
        debug!("beginning new trace recording");
        self.store.clear();
        self.controller.reset();
    }

    /// End the recording; calls still open are closed.
    pub fn finish(&mut self) {
        self.store.finish();
    }

    // ========== Queries ==========

    /// Get a record by trace index.
    pub fn get(&self, index: TraceIndex) -> Result<&TraceRecord> {
        Ok(self.store.get(index)?)
    }

    /// Number of records.
    pub fn trace_count(&self) -> usize {
        self.store.len()
    }

    /// Current window, by value.
    pub fn window(&self) -> Window {
        self.controller.window()
    }

    /// Roots of the call forest visible in the current window.
    pub fn visible_roots(&self) -> Vec<TraceIndex> {
        visible_roots(&self.store, &self.controller.window())
    }

    /// Children of `index` visible in the current window.
    pub fn children_for(&self, index: TraceIndex) -> Result<Vec<TraceIndex>> {
        self.store.check_index(index)?;
        Ok(children_for(&self.store, index, &self.controller.window()))
    }

    /// Deepest last descendant of `index`.
    pub fn last_descendant(&self, index: TraceIndex) -> Result<TraceIndex> {
        self.store.check_index(index)?;
        Ok(last_descendant(&self.store, index))
    }

    /// Enclosing calls of `index`, nearest first.
    pub fn ancestors(&self, index: TraceIndex) -> Result<Vec<TraceIndex>> {
        self.store.check_index(index)?;
        Ok(ancestors(&self.store, index))
    }

    // ========== Window ==========

    /// Zoom to exactly the subtree rooted at `index`.
    pub fn focus_on_subtree(&mut self, index: TraceIndex) -> Result<Window> {
        Ok(self.controller.focus_on_subtree(&self.store, index)?)
    }

    /// Back to the full live window.
    pub fn reset_window(&mut self) -> Window {
        self.controller.reset()
    }

    /// Scroll by `magnitude` times the rendered count.
    pub fn scroll(&mut self, direction: ScrollDirection, magnitude: f64) -> Window {
        self.controller.scroll(&self.store, direction, magnitude)
    }

    /// Zoom by `magnitude` times the rendered count around `pivot`.
    pub fn zoom(&mut self, direction: ZoomDirection, magnitude: f64, pivot: f64) -> Window {
        self.controller.zoom(&self.store, direction, magnitude, pivot)
    }

    /// Scroll by the configured step.
    pub fn scroll_step(&mut self, direction: ScrollDirection) -> Window {
        self.controller.scroll_step(&self.store, direction)
    }

    /// Zoom by the configured step.
    pub fn zoom_step(&mut self, direction: ZoomDirection, pivot: f64) -> Window {
        self.controller.zoom_step(&self.store, direction, pivot)
    }

    /// Relative position of `index` in the current window.
    pub fn position_ratio(&self, index: TraceIndex) -> f64 {
        self.controller.position_ratio(&self.store, index)
    }

    // ========== Search ==========

    /// Filter `top_traces` down to events matching `query`.
    pub fn filter_top_level(&self, top_traces: &[TraceIndex], query: &str) -> Vec<TraceIndex> {
        filter_top_level(&self.store, top_traces, &SearchQuery::parse(query))
    }

    /// Visible roots, filtered by `query`.
    pub fn search_top_level(&self, query: &str) -> Vec<TraceIndex> {
        self.filter_top_level(&self.visible_roots(), query)
    }
}

/// Builder for session configuration.
///
/// # Example
///
/// ```ignore
/// // Defaults, bigger log
/// let session = TraceSession::builder().capacity(1 << 20).build()?;
///
/// // Settings from a file
/// let session = TraceSession::builder()
///     .config_path("tracescope.toml")
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceSessionBuilder {
    config: EngineConfig,
    config_path: Option<PathBuf>,
    capacity: Option<usize>,
}

impl TraceSessionBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` instead of the defaults.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load settings from a TOML file when building.
    ///
    /// Takes precedence over [`config`](Self::config).
    pub fn config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Pre-allocate room for `capacity` records.
    ///
    /// Overrides `initial_capacity` from the config.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Build the session.
    pub fn build(self) -> Result<TraceSession> {
        let mut config = match &self.config_path {
            Some(path) => EngineConfig::load(path)?,
            None => self.config,
        };
        if let Some(capacity) = self.capacity {
            config.initial_capacity = capacity;
        }
        config.validate()?;
        debug!(?config, "building trace session");
        Ok(TraceSession::with_config(config))
    }
}
