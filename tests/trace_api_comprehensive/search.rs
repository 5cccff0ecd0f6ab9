//! Search Tests
//!
//! Tests for event-name filtering of top-level traces.

use crate::*;

fn events_session() -> TraceSession {
    session_with([
        TraceRecord::event("click"),
        TraceRecord::event("keydown"),
        TraceRecord::call(0),
        TraceRecord::Exit,
        TraceRecord::event("KeyUp"),
        TraceRecord::event("mousemove"),
    ])
}

/// Test scenario C
#[test]
fn test_scenario_c() {
    let session = events_session();
    assert_eq!(session.filter_top_level(&[0, 1], "key"), vec![1]);
}

/// Test empty query is a pass-through
#[test]
fn test_empty_query_passthrough() {
    let session = events_session();
    let top = session.store().top_level().to_vec();
    assert_eq!(session.filter_top_level(&top, ""), top);
    assert_eq!(session.filter_top_level(&top, "   "), top);
}

/// Test multi-term OR, case-insensitive, calls dropped
#[test]
fn test_multi_term_query() {
    let session = events_session();
    assert_eq!(session.search_top_level("KEY, mouse"), vec![1, 4, 5]);
    assert_eq!(session.search_top_level("click,"), vec![0]);
    assert!(session.search_top_level("scroll").is_empty());
}

/// Test search follows the window
#[test]
fn test_search_within_window() {
    let mut session = events_session();
    session.zoom(ZoomDirection::In, 0.5, 1.0);
    assert_eq!(session.window(), Window::from_start(3.0));
    assert_eq!(session.visible_roots(), vec![3, 4, 5]);
    assert_eq!(session.search_top_level("key"), vec![4]);
}

/// Test query parsing is exposed
#[test]
fn test_search_query_terms() {
    let query = SearchQuery::parse(" Click , , Touch");
    assert_eq!(query.terms(), &["click".to_string(), "touch".to_string()]);
}
