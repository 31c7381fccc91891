use crate::document::Resource;
use crate::extract;
use crate::query::{MatchRange, Pattern};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One located occurrence of a query within a document.
///
/// Holds a shared borrow of the originating resource and the match's char
/// range in that resource's *extracted* text. Immutable once constructed; a
/// new search produces an entirely new collection.
pub struct SearchResult<'r, R: Resource> {
    query: Arc<str>,
    resource: &'r R,
    range: MatchRange,
}

impl<'r, R: Resource> SearchResult<'r, R> {
    fn new(query: Arc<str>, resource: &'r R, range: MatchRange) -> Self {
        Self {
            query,
            resource,
            range,
        }
    }

    /// The query this result was produced for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The resource the match was found in.
    pub fn resource(&self) -> &'r R {
        self.resource
    }

    /// The match's range in the resource's extracted text, char units.
    pub fn range(&self) -> MatchRange {
        self.range
    }
}

impl<'r, R: Resource> Clone for SearchResult<'r, R> {
    fn clone(&self) -> Self {
        Self {
            query: Arc::clone(&self.query),
            resource: self.resource,
            range: self.range,
        }
    }
}

impl<'r, R: Resource> fmt::Debug for SearchResult<'r, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchResult")
            .field("query", &self.query)
            .field("resource", &self.resource.id())
            .field("range", &self.range)
            .finish()
    }
}

/// Cooperative cancellation flag for an in-flight search.
///
/// Clone one handle into whatever supersedes the search (the user typed more
/// text) and call [`cancel`](CancelToken::cancel); the running pass checks
/// the flag between resources and discards its partial results - last query
/// wins.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Search an entire document for `query`, in spine order.
///
/// Returns every match wrapped as a [`SearchResult`], ordered by resource
/// position first and match offset within the resource second. The ordering
/// is deterministic: identical inputs yield identical output sequences.
///
/// An empty query performs no search and touches no resource. A resource
/// that fails to load is skipped and the pass continues - one unreadable
/// page never aborts a whole-document search.
pub fn search_document<'r, R: Resource>(
    query: &str,
    resources: &'r [R],
) -> Vec<SearchResult<'r, R>> {
    search_document_cancellable(query, resources, &CancelToken::new()).unwrap_or_default()
}

/// [`search_document`] with cooperative cancellation, checked between
/// resources. A cancelled pass returns `None` and discards partial results.
pub fn search_document_cancellable<'r, R: Resource>(
    query: &str,
    resources: &'r [R],
    cancel: &CancelToken,
) -> Option<Vec<SearchResult<'r, R>>> {
    let Ok(pattern) = Pattern::compile(query) else {
        return Some(Vec::new());
    };
    let shared_query: Arc<str> = Arc::from(query);

    let mut results = Vec::new();
    for resource in resources {
        if cancel.is_cancelled() {
            debug!(query, "search cancelled");
            return None;
        }
        scan_resource(&pattern, &shared_query, resource, &mut results);
    }

    debug!(query, results = results.len(), "search complete");
    Some(results)
}

/// Parallel variant of [`search_document_cancellable`]: extraction and
/// matching fan out across resources, one task per page.
///
/// Per-page work is independent and read-only, so the only synchronization
/// point is the merge; the indexed collect restores spine order regardless
/// of completion order, preserving the sequential ordering contract.
#[cfg(feature = "parallel")]
pub fn search_document_parallel<'r, R>(
    query: &str,
    resources: &'r [R],
    cancel: &CancelToken,
) -> Option<Vec<SearchResult<'r, R>>>
where
    R: Resource + Sync,
{
    let Ok(pattern) = Pattern::compile(query) else {
        return Some(Vec::new());
    };
    let shared_query: Arc<str> = Arc::from(query);

    let per_resource: Vec<Vec<SearchResult<'r, R>>> = resources
        .par_iter()
        .map(|resource| {
            if cancel.is_cancelled() {
                return Vec::new();
            }
            let mut matches = Vec::new();
            scan_resource(&pattern, &shared_query, resource, &mut matches);
            matches
        })
        .collect();

    if cancel.is_cancelled() {
        debug!(query, "search cancelled");
        return None;
    }

    let results: Vec<_> = per_resource.into_iter().flatten().collect();
    debug!(query, results = results.len(), "search complete");
    Some(results)
}

/// Extract one resource and append its matches in offset order. Load
/// failures are logged and skipped.
fn scan_resource<'r, R: Resource>(
    pattern: &Pattern,
    query: &Arc<str>,
    resource: &'r R,
    out: &mut Vec<SearchResult<'r, R>>,
) {
    let text = match extract::plain_text(resource) {
        Ok(text) => text,
        Err(err) => {
            warn!(id = resource.id(), error = %err, "skipping unsearchable resource");
            return;
        }
    };

    for range in pattern.find_all(&text) {
        out.push(SearchResult::new(Arc::clone(query), resource, range));
    }
}
