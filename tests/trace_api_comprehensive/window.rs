//! Window Tests
//!
//! Tests for window gestures through the session:
//! - zoom arithmetic (scenario D)
//! - scroll translation and edges
//! - reset and position ratio

use crate::*;

/// Test scenario D: zoom out by half around the center
#[test]
fn test_scenario_d_zoom_arithmetic() {
    let session = flat_session(100);
    let mut controller = WindowController::default();
    controller.set_window(session.store(), Window::bounded(40.0, 50.0));
    assert_eq!(controller.rendered_count(session.store()), 10.0);

    // shift = floor(max(10 * 0.5, 2) * 1) = 5
    let window = controller.zoom(session.store(), ZoomDirection::Out, 0.5, 0.5);
    assert_eq!(window, Window::bounded(37.5, 52.5));
}

/// Test zoom out past both ends clamps to the full window
#[test]
fn test_zoom_out_saturates() {
    let mut session = flat_session(20);
    session.zoom(ZoomDirection::In, 0.5, 0.5);
    assert_eq!(session.window(), Window::bounded(5.0, 15.0));

    let window = session.zoom(ZoomDirection::Out, 10.0, 0.5);
    assert_eq!(window, Window::FULL);
}

/// Test scroll translates without resizing
#[test]
fn test_scroll_translation() {
    let mut session = flat_session(100);
    session.zoom(ZoomDirection::In, 0.5, 1.0);
    assert_eq!(session.window(), Window::from_start(50.0));

    let window = session.scroll(ScrollDirection::Backward, 0.2);
    assert_eq!(window, Window::bounded(40.0, 90.0));

    let window = session.scroll(ScrollDirection::Backward, 1.0);
    assert_eq!(window, Window::bounded(0.0, 40.0));

    // Already at the start
    assert_eq!(session.scroll(ScrollDirection::Backward, 1.0), window);

    let window = session.scroll(ScrollDirection::Forward, 2.0);
    assert_eq!(window, Window::from_start(80.0));

    // Already live
    assert_eq!(session.scroll(ScrollDirection::Forward, 1.0), window);
}

/// Test configured steps
#[test]
fn test_configured_steps() {
    let config = EngineConfig {
        scroll_magnitude: 0.5,
        zoom_magnitude: 0.5,
        ..EngineConfig::default()
    };
    let mut session = TraceSession::builder().config(config).build().unwrap();
    for i in 0..40 {
        session.append(TraceRecord::event(format!("e{}", i))).unwrap();
    }

    assert_eq!(
        session.zoom_step(ZoomDirection::In, 0.5),
        Window::bounded(10.0, 30.0)
    );
    assert_eq!(
        session.scroll_step(ScrollDirection::Forward),
        Window::from_start(20.0)
    );
}

/// Test reset after arbitrary gestures
#[test]
fn test_reset_is_full() {
    let mut session = flat_session(64);
    session.zoom(ZoomDirection::In, 0.3, 0.2);
    session.scroll(ScrollDirection::Backward, 0.7);
    session.focus_on_subtree(12).unwrap();
    assert_eq!(session.reset_window(), Window::FULL);
    assert_eq!(session.visible_roots().len(), 64);
}

/// Test position ratio is not clamped
#[test]
fn test_position_ratio() {
    let mut session = flat_session(100);
    session.zoom(ZoomDirection::In, 0.5, 0.5);
    assert_eq!(session.window(), Window::bounded(25.0, 75.0));

    assert_eq!(session.position_ratio(25), 0.0);
    assert_eq!(session.position_ratio(50), 0.5);
    assert_eq!(session.position_ratio(75), 1.0);
    assert_eq!(session.position_ratio(0), -0.5);
    assert_eq!(session.position_ratio(100), 1.5);
}

/// Test focus on an unknown index
#[test]
fn test_focus_out_of_range() {
    let mut session = flat_session(3);
    let err = session.focus_on_subtree(3).unwrap_err();
    assert!(err.is_out_of_range());
    assert_eq!(session.window(), Window::FULL);
}
