//! Call-tree projection
//!
//! Computes the roots the UI shows for a window without ever building the
//! tree for the whole log.
//!
//! ## Left edge
//!
//! When the window starts inside a call subtree, the records between the
//! left edge and the end of that subtree would otherwise be unreachable:
//! their top-level ancestor lies before the window. The projection then
//! returns a partial forest:
//!
//! ```text
//! [start] ++ following siblings of start and its ancestors ++ top-level roots
//! ```
//!
//! ## Right edge
//!
//! The right edge only hides: top-level roots past `floor(end)` are cut and
//! children are filtered by [`children_for`]. No partial stack is rebuilt
//! there.

use tracescope_core::{TraceIndex, Window};
use tracescope_storage::{children_within_window, collect_following_siblings, TraceStore};
use tracing::trace;

/// Ordered root indices visible in `window`
///
/// Returns an empty list when the window starts past the end of the log,
/// which happens transiently while a live session is still filling in.
pub fn visible_roots(store: &TraceStore, window: &Window) -> Vec<TraceIndex> {
    let start = window.start_index();
    let end = window.end_index();

    if start == 0 && end.is_none() {
        return store.top_level().to_vec();
    }
    if start >= store.len() {
        trace!(%window, trace_count = store.len(), "window ahead of recorded data");
        return Vec::new();
    }

    let top_level = store.top_level();
    let first = top_level.partition_point(|&index| index < start);
    let last = match end {
        Some(end) => top_level.partition_point(|&index| index <= end),
        None => top_level.len(),
    };
    let roots = if first < last {
        &top_level[first..last]
    } else {
        &[]
    };

    if start == 0 || roots.first() == Some(&start) {
        return roots.to_vec();
    }

    let siblings = collect_following_siblings(store, start);
    let mut result = Vec::with_capacity(1 + siblings.len() + roots.len());
    result.push(start);
    result.extend(
        siblings
            .into_iter()
            .filter(|&sibling| end.map_or(true, |end| sibling <= end)),
    );
    result.extend_from_slice(roots);
    // Every part is ascending and each part precedes the next, so
    // duplicates can only be adjacent.
    result.dedup();

    trace!(%window, roots = result.len(), "projected partial roots");
    result
}

/// Children of `index` visible in `window`
pub fn children_for(store: &TraceStore, index: TraceIndex, window: &Window) -> Vec<TraceIndex> {
    children_within_window(store, index, window)
}
