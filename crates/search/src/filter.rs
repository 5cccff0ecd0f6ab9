//! Top-level trace filtering

use crate::query::SearchQuery;
use tracescope_core::TraceIndex;
use tracescope_storage::TraceStore;
use tracing::trace;

/// Keep the top-level traces matching `query`
///
/// An empty query returns `top_traces` unchanged. Otherwise only `Event`
/// traces whose name matches survive, in input order; every other record
/// type is dropped while a search is active, as are indices not in the
/// store.
pub fn filter_top_level(
    store: &TraceStore,
    top_traces: &[TraceIndex],
    query: &SearchQuery,
) -> Vec<TraceIndex> {
    if query.is_empty() {
        return top_traces.to_vec();
    }

    let matched: Vec<TraceIndex> = top_traces
        .iter()
        .copied()
        .filter(|&index| {
            store
                .get(index)
                .map(|record| query.matches(record))
                .unwrap_or(false)
        })
        .collect();

    trace!(
        terms = query.terms().len(),
        candidates = top_traces.len(),
        matched = matched.len(),
        "filtered top-level traces"
    );
    matched
}
