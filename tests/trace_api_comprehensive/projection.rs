//! Projection Tests
//!
//! Tests for the visible-root forest:
//! - full window identity
//! - partial roots when the left edge cuts into a call
//! - right-edge filtering of roots and children
//! - live sessions appending while a window is set

use crate::*;

/// A page load followed by a click handler three calls deep
///
/// ```text
/// 0 event load
/// 1 call
///   2 call
///     3 call
///       4 mutation
///       5 exit
///     6 mutation
///     7 exit
///   8 call
///     9 exit
///   10 exit
/// 11 event click
/// 12 call
///   13 exit
/// ```
fn page_session() -> TraceSession {
    session_with([
        TraceRecord::event("load"),
        TraceRecord::call(0),
        TraceRecord::call(1),
        TraceRecord::call(2),
        TraceRecord::mutation(MutationKind::Add),
        TraceRecord::Exit,
        TraceRecord::mutation(MutationKind::Attributes),
        TraceRecord::Exit,
        TraceRecord::call(3),
        TraceRecord::Exit,
        TraceRecord::Exit,
        TraceRecord::event("click"),
        TraceRecord::call(4),
        TraceRecord::Exit,
    ])
}

/// Test full window returns top level verbatim
#[test]
fn test_full_window_identity() {
    let session = page_session();
    assert_eq!(session.window(), Window::FULL);
    assert_eq!(session.visible_roots(), session.store().top_level());
    assert_eq!(session.visible_roots(), vec![0, 1, 11, 12]);
}

/// Test scenario B
#[test]
fn test_scenario_b() {
    let mut session = scenario_a();
    let store = session.store().clone();
    assert_eq!(
        projector::visible_roots(&store, &Window::from_start(1.0)),
        vec![1, 3]
    );

    // Same edge reached through a gesture: the minimum zoom shift of 2
    // takes one record off each side
    let window = session.zoom(ZoomDirection::In, 0.25, 0.5);
    assert_eq!(window, Window::bounded(1.0, 3.0));
    assert_eq!(session.visible_roots(), vec![1, 3]);
}

/// Test left edge deep inside the call stack
#[test]
fn test_partial_stack_reconstruction() {
    let store = page_session().store().clone();
    let roots = projector::visible_roots(&store, &Window::from_start(4.0));
    // 4 itself, then its later siblings (5), then each ancestor's (6, 7),
    // (8, 10), then top level
    assert_eq!(roots, vec![4, 5, 6, 7, 8, 10, 11, 12]);

    let roots = projector::visible_roots(&store, &Window::from_start(9.0));
    assert_eq!(roots, vec![9, 10, 11, 12]);
}

/// Test bounded window cuts the right edge
#[test]
fn test_bounded_right_edge() {
    let store = page_session().store().clone();
    assert_eq!(
        projector::visible_roots(&store, &Window::bounded(4.0, 7.0)),
        vec![4, 5, 6, 7]
    );
    assert_eq!(
        projector::visible_roots(&store, &Window::bounded(1.0, 11.0)),
        vec![1, 11]
    );
    assert_eq!(
        projector::children_for(&store, 1, &Window::bounded(1.0, 10.0)),
        vec![2, 8]
    );
    assert_eq!(
        projector::children_for(&store, 2, &Window::bounded(1.0, 7.0)),
        vec![3, 6]
    );
}

/// Test focus on a subtree stays inside it
#[test]
fn test_focus_subtree_bound() {
    let mut session = page_session();
    for index in 0..session.trace_count() {
        let window = session.focus_on_subtree(index).unwrap();
        let last = session.last_descendant(index).unwrap();
        assert_eq!(window.end, WindowEnd::Bounded(last as f64));

        for root in session.visible_roots() {
            let inside = root == index || session.ancestors(root).unwrap().contains(&index);
            assert!(inside, "root {} outside subtree of {}", root, index);
        }
    }
}

/// Test focus then children listing walks the subtree
#[test]
fn test_focus_then_expand() {
    let mut session = page_session();
    session.focus_on_subtree(2).unwrap();
    assert_eq!(session.window(), Window::bounded(2.0, 7.0));
    assert_eq!(session.visible_roots(), vec![2]);
    assert_eq!(session.children_for(2).unwrap(), vec![3, 6]);
    assert_eq!(session.children_for(3).unwrap(), vec![4, 5]);
}

/// Test window ahead of data yields nothing
#[test]
fn test_window_ahead_of_data() {
    let store = scenario_a().store().clone();
    assert!(projector::visible_roots(&store, &Window::from_start(7.0)).is_empty());
}

/// Test live window follows appends, bounded window does not
#[test]
fn test_live_session_appends() {
    let mut session = page_session();
    session.zoom(ZoomDirection::In, 0.5, 0.0);
    let bounded = session.window();
    assert!(!bounded.is_live());
    let before = session.visible_roots();

    session.append(TraceRecord::event("scroll")).unwrap();
    assert_eq!(session.visible_roots(), before);

    session.reset_window();
    assert_eq!(session.visible_roots(), vec![0, 1, 11, 12, 14]);

    session.append(TraceRecord::event("resize")).unwrap();
    assert_eq!(session.visible_roots(), vec![0, 1, 11, 12, 14, 15]);
}
