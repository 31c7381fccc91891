use std::io;
use thiserror::Error;

/// Failures the search core can report.
///
/// No variant is fatal to a whole-document search: an empty query means "no
/// search performed", and a resource that fails to load is skipped while the
/// pass continues over the remaining pages. Excerpt unavailability is not an
/// error at all; it is modeled as `None`.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query string was empty. Every non-empty query compiles.
    #[error("search query is empty")]
    EmptyQuery,

    /// A resource's raw content could not be loaded or decoded.
    #[error("failed to load resource `{id}`")]
    ResourceLoad {
        id: String,
        #[source]
        source: io::Error,
    },
}

impl SearchError {
    pub(crate) fn resource_load(id: &str, source: io::Error) -> Self {
        Self::ResourceLoad {
            id: id.to_string(),
            source,
        }
    }
}
