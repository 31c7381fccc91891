//! Whole-document search and on-demand excerpt resolution.

pub mod excerpt;
pub mod locator;

pub use excerpt::{DEFAULT_TRAILING_CONTEXT, Excerpt};
#[cfg(feature = "parallel")]
pub use locator::search_document_parallel;
pub use locator::{CancelToken, SearchResult, search_document, search_document_cancellable};
