//! Trace API Comprehensive Test Suite
//!
//! End-to-end tests through the `TraceSession` facade:
//! - Ingestion and index maintenance
//! - Visible-root projection, including partial roots at the left edge
//! - Scroll/zoom/focus/reset window arithmetic
//! - Event-name search
//! - Session configuration and lifecycle
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test trace_api_comprehensive
//!
//! # Projection tests only
//! cargo test --test trace_api_comprehensive projection::
//! ```

pub use tracescope::prelude::*;
pub use tracescope::{projector, WindowController};

pub mod projection;
pub mod search;
pub mod session;
pub mod window;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Install a fmt subscriber that writes through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Create a session holding `records`, in order
pub fn session_with(records: impl IntoIterator<Item = TraceRecord>) -> TraceSession {
    init_tracing();
    let mut session = TraceSession::new();
    for record in records {
        session.append(record).expect("record should be accepted");
    }
    session
}

/// Scenario A: `[Call(f0), Call(f1), Exit, Exit]`
pub fn scenario_a() -> TraceSession {
    session_with([
        TraceRecord::call(0),
        TraceRecord::call(1),
        TraceRecord::Exit,
        TraceRecord::Exit,
    ])
}

/// A session with `count` top-level events
pub fn flat_session(count: usize) -> TraceSession {
    session_with((0..count).map(|i| TraceRecord::event(format!("tick{}", i))))
}
