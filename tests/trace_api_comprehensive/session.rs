//! Session Tests
//!
//! Tests for session construction and configuration.

use crate::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Test default session
#[test]
fn test_default_session() {
    let session = TraceSession::new();
    assert_eq!(session.trace_count(), 0);
    assert_eq!(session.window(), Window::FULL);
    assert_eq!(session.config(), &EngineConfig::default());
    assert!(session.visible_roots().is_empty());
}

/// Test builder with capacity
#[test]
fn test_builder_capacity() {
    let session = TraceSession::builder().capacity(128).build().unwrap();
    assert_eq!(session.config().initial_capacity, 128);
}

/// Test builder rejects invalid config
#[test]
fn test_builder_rejects_invalid_config() {
    let config = EngineConfig {
        zoom_magnitude: f64::NAN,
        ..EngineConfig::default()
    };
    let err = TraceSession::builder().config(config).build().unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

/// Test oversized capacity is rejected instead of allocated
#[test]
fn test_builder_rejects_oversized_capacity() {
    let err = TraceSession::builder().capacity(usize::MAX).build().unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "initial_capacity = 9223372036854775807").unwrap();
    let err = TraceSession::builder()
        .config_path(file.path())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

/// Test builder loads TOML from disk
#[test]
fn test_builder_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "scroll_magnitude = 0.5").unwrap();
    writeln!(file, "zoom_magnitude = 0.25").unwrap();

    let session = TraceSession::builder()
        .config_path(file.path())
        .capacity(8)
        .build()
        .unwrap();
    assert_eq!(session.config().scroll_magnitude, 0.5);
    assert_eq!(session.config().zoom_magnitude, 0.25);
    assert_eq!(session.config().initial_capacity, 8);
}

/// Test builder surfaces a bad config file
#[test]
fn test_builder_bad_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "scroll_magnitude = \"fast\"").unwrap();

    let err = TraceSession::builder()
        .config_path(file.path())
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

/// Test sessions are independent
#[test]
fn test_sessions_do_not_share_state() {
    let mut a = flat_session(10);
    let b = flat_session(3);
    a.zoom(ZoomDirection::In, 0.5, 0.5);

    assert_eq!(a.trace_count(), 10);
    assert_eq!(b.trace_count(), 3);
    assert_eq!(b.window(), Window::FULL);
}
