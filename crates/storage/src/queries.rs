//! Read-only tree queries over a [`TraceStore`]
//!
//! All walks move through strictly increasing (downward) or strictly
//! decreasing (upward) trace indices, so each terminates in at most
//! `store.len()` steps. They are written as loops rather than recursion so
//! a deep call stack in the traced program cannot overflow ours.
//!
//! A call that has not received its `Exit` yet is a leaf for
//! [`last_descendant`] and [`children_within_window`].

use crate::store::TraceStore;
use tracescope_core::{TraceIndex, Window};

fn visible_children(store: &TraceStore, index: TraceIndex) -> &[TraceIndex] {
    if store.is_open(index) {
        &[]
    } else {
        store.children_of(index)
    }
}

/// Deepest last descendant of `index`, or `index` itself for a leaf
///
/// `focus_on_subtree` uses this as the right edge of the focused window.
pub fn last_descendant(store: &TraceStore, index: TraceIndex) -> TraceIndex {
    let mut current = index;
    while let Some(&last) = visible_children(store, current).last() {
        current = last;
    }
    current
}

/// Children of `index` that fall inside `window`
///
/// Live windows return every child; bounded windows keep children strictly
/// before `floor(end)`.
pub fn children_within_window(
    store: &TraceStore,
    index: TraceIndex,
    window: &Window,
) -> Vec<TraceIndex> {
    let children = visible_children(store, index);
    match window.end_index() {
        None => children.to_vec(),
        Some(end) => {
            let cut = children.partition_point(|&child| child < end);
            children[..cut].to_vec()
        }
    }
}

/// Siblings that follow `index` and each of its ancestors, innermost first
///
/// Walks from `index` to the top level. At each ancestor level it appends,
/// in order, the siblings after the current node in that level's child
/// list. Top-level siblings are not included, and neither is `index`.
///
/// This is what remains "in flight" of the call stack at a window's left
/// edge.
pub fn collect_following_siblings(store: &TraceStore, index: TraceIndex) -> Vec<TraceIndex> {
    let mut result = Vec::new();
    let mut current = index;

    while let Some(parent) = store.parent_of(current) {
        let siblings = store.children_of(parent);
        if let Ok(pos) = siblings.binary_search(&current) {
            result.extend_from_slice(&siblings[pos + 1..]);
        }
        current = parent;
    }

    result
}

/// Enclosing calls of `index`, nearest first
pub fn ancestors(store: &TraceStore, index: TraceIndex) -> Vec<TraceIndex> {
    let mut result = Vec::new();
    let mut current = index;
    while let Some(parent) = store.parent_of(current) {
        result.push(parent);
        current = parent;
    }
    result
}

/// Call-stack depth of `index` (0 for top level)
pub fn depth(store: &TraceStore, index: TraceIndex) -> usize {
    let mut depth = 0;
    let mut current = index;
    while let Some(parent) = store.parent_of(current) {
        depth += 1;
        current = parent;
    }
    depth
}
