//! Window controller
//!
//! Owns the current [`Window`] and turns scroll/zoom gestures, "focus on
//! subtree" and "reset" into new window values.
//!
//! ## Clamping
//!
//! After every scroll or zoom the window is normalized:
//!
//! | Bound | Rule |
//! |-------|------|
//! | start | `max(0, min(start, trace_count - 1))` |
//! | end (bounded) | `max(start + 1, end)` |
//! | end (bounded) | `end >= trace_count` becomes `Unbounded` |
//!
//! Overshooting input is silently normalized; no window operation fails
//! except focusing on an index that is not in the log.

use crate::config::EngineConfig;
use tracescope_core::{TraceIndex, TraceResult, Window, WindowEnd};
use tracescope_storage::{last_descendant, TraceStore};
use tracing::trace;

/// Scroll gesture direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Towards index 0
    Backward,
    /// Towards the end of the log
    Forward,
}

impl ScrollDirection {
    fn sign(self) -> f64 {
        match self {
            ScrollDirection::Backward => -1.0,
            ScrollDirection::Forward => 1.0,
        }
    }
}

/// Zoom gesture direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Narrow the window
    In,
    /// Widen the window
    Out,
}

impl ZoomDirection {
    fn sign(self) -> f64 {
        match self {
            ZoomDirection::In => -1.0,
            ZoomDirection::Out => 1.0,
        }
    }
}

/// Normalize a window against the current trace count
pub fn clamp(window: Window, trace_count: usize) -> Window {
    let count = trace_count as f64;
    let start = window.start.min(count - 1.0).max(0.0);
    let end = match window.end {
        WindowEnd::Bounded(end) => {
            let end = end.max(start + 1.0);
            if end >= count {
                WindowEnd::Unbounded
            } else {
                WindowEnd::Bounded(end)
            }
        }
        WindowEnd::Unbounded => WindowEnd::Unbounded,
    };
    Window { start, end }
}

/// Holds the zoom/scroll window for one trace view
#[derive(Debug, Clone)]
pub struct WindowController {
    window: Window,
    scroll_magnitude: f64,
    zoom_magnitude: f64,
}

impl Default for WindowController {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl WindowController {
    /// Create a controller on the full live window
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            window: Window::FULL,
            scroll_magnitude: config.scroll_magnitude,
            zoom_magnitude: config.zoom_magnitude,
        }
    }

    /// Current window, by value
    pub fn window(&self) -> Window {
        self.window
    }

    /// Install a caller-provided window, clamped to the store
    pub fn set_window(&mut self, store: &TraceStore, window: Window) -> Window {
        self.apply(clamp(window, store.len()))
    }

    /// Trace positions covered by the current window
    pub fn rendered_count(&self, store: &TraceStore) -> f64 {
        self.window.rendered_count(store.len())
    }

    /// Translate the window by `max(1, rendered * magnitude)` positions
    ///
    /// No-op when already at the start going backward, or live going
    /// forward.
    pub fn scroll(
        &mut self,
        store: &TraceStore,
        direction: ScrollDirection,
        magnitude: f64,
    ) -> Window {
        let at_start = self.window.start <= 0.0 && direction == ScrollDirection::Backward;
        let at_end = self.window.is_live() && direction == ScrollDirection::Forward;
        if at_start || at_end {
            return self.window;
        }

        let count = store.len();
        let shift = (self.rendered_count(store) * magnitude).max(1.0) * direction.sign();
        let moved = Window::bounded(
            self.window.start + shift,
            self.window.end_or(count) + shift,
        );
        self.apply(clamp(moved, count))
    }

    /// Grow or shrink the window around `pivot`
    ///
    /// `pivot` is the position of the gesture inside the window, 0 at the
    /// left edge and 1 at the right edge; values outside are clamped and NaN
    /// is taken as the center. A live window is resized relative to the
    /// current end of the log.
    pub fn zoom(
        &mut self,
        store: &TraceStore,
        direction: ZoomDirection,
        magnitude: f64,
        pivot: f64,
    ) -> Window {
        let count = store.len();
        let pivot = if pivot.is_nan() {
            0.5
        } else {
            pivot.clamp(0.0, 1.0)
        };
        let shift = ((self.rendered_count(store) * magnitude).max(2.0) * direction.sign()).floor();
        let resized = Window::bounded(
            self.window.start - shift * pivot,
            self.window.end_or(count) + shift * (1.0 - pivot),
        );
        self.apply(clamp(resized, count))
    }

    /// Scroll by the configured default magnitude
    pub fn scroll_step(&mut self, store: &TraceStore, direction: ScrollDirection) -> Window {
        self.scroll(store, direction, self.scroll_magnitude)
    }

    /// Zoom by the configured default magnitude
    pub fn zoom_step(&mut self, store: &TraceStore, direction: ZoomDirection, pivot: f64) -> Window {
        self.zoom(store, direction, self.zoom_magnitude, pivot)
    }

    /// Span exactly the subtree rooted at `index`
    ///
    /// The right edge is the subtree's last descendant. Focusing a leaf
    /// yields a window whose edges coincide.
    ///
    /// # Errors
    ///
    /// - `OutOfRange`: `index` is not in the log
    pub fn focus_on_subtree(&mut self, store: &TraceStore, index: TraceIndex) -> TraceResult<Window> {
        store.check_index(index)?;
        let end = last_descendant(store, index);
        Ok(self.apply(Window::bounded(index as f64, end as f64)))
    }

    /// Back to the full live window
    pub fn reset(&mut self) -> Window {
        self.apply(Window::FULL)
    }

    /// Relative position of `index` in the window
    ///
    /// 0 at the left edge, 1 at the right edge; not clamped, so indices
    /// outside the window map outside `[0, 1]`.
    pub fn position_ratio(&self, store: &TraceStore, index: TraceIndex) -> f64 {
        let rendered = self.rendered_count(store);
        let span = if rendered > 0.0 { rendered } else { 1.0 };
        (index as f64 - self.window.start) / span
    }

    fn apply(&mut self, window: Window) -> Window {
        if window != self.window {
            trace!(from = %self.window, to = %window, "window changed");
            self.window = window;
        }
        self.window
    }
}
