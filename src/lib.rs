//! # Quire - Full-Text Search for Paginated Documents
//!
//! Quire is an in-memory full-text search core for paginated,
//! markup-structured documents (an e-book composed of multiple HTML-like
//! resource pages). It extracts plain text from structured markup, scans it
//! for tolerant literal matches, and produces stable, addressable result
//! locations that can be resolved to highlighted excerpts on demand.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`document`] - The read-only `Resource` page abstraction
//! - [`extract`] - Markup-to-text extraction (tag stripping, entities)
//! - [`query`] - Tolerant literal pattern compilation and scanning
//! - [`search`] - Whole-document result collection and excerpts
//! - [`error`] - The failure taxonomy
//!
//! ## Quick Start
//!
//! ```
//! use quire::document::MemoryResource;
//! use quire::search::search_document;
//!
//! let pages = vec![
//!     MemoryResource::new("ch1", "ch1.xhtml", "<p>The quick brown fox</p>"),
//!     MemoryResource::new("ch2", "ch2.xhtml", "<p>jumps over the lazy dog</p>"),
//! ];
//!
//! let results = search_document("quick", &pages);
//! assert_eq!(results.len(), 1);
//!
//! // Excerpts are computed lazily, one result at a time.
//! let excerpt = results[0].excerpt().unwrap();
//! assert!(excerpt.context.starts_with("quick"));
//! ```
//!
//! ## Semantics
//!
//! Matching is literal substring search with two tolerances: a run of line
//! breaks immediately before the query text may be absorbed into a match,
//! and one trailing word or non-ASCII character may be absorbed after it.
//! Query text is never interpreted as pattern syntax. All offsets are in
//! Unicode scalar (char) units over the *extracted* text, so they stay valid
//! for non-ASCII content regardless of encoding.
//!
//! A search is a full linear scan per invocation; no index is built or
//! persisted. Unreadable pages are skipped, never fatal: a search over a
//! document with one corrupt page still returns every match from the others.

pub mod document;
pub mod error;
pub mod extract;
pub mod query;
pub mod search;
