//! End-to-end search over a synthetic multi-page book.
//!
//! Exercises the whole pipeline the way a reader shell would drive it:
//! spine-ordered resources in, flat result list out, excerpts resolved
//! lazily per visible row.

use quire::document::{FileResource, MemoryResource, Resource};
use quire::query::MatchRange;
use quire::search::{CancelToken, search_document, search_document_cancellable};
use std::fs;
use std::io;
use std::path::PathBuf;

/// A spine entry that is either a readable page or a corrupt one.
enum Page {
    Ok(MemoryResource),
    Corrupt(&'static str),
}

impl Resource for Page {
    fn id(&self) -> &str {
        match self {
            Page::Ok(res) => res.id(),
            Page::Corrupt(id) => id,
        }
    }

    fn href(&self) -> &str {
        match self {
            Page::Ok(res) => res.href(),
            Page::Corrupt(id) => id,
        }
    }

    fn load(&self) -> io::Result<String> {
        match self {
            Page::Ok(res) => res.load(),
            Page::Corrupt(_) => Err(io::Error::new(io::ErrorKind::InvalidData, "bad encoding")),
        }
    }
}

fn page(id: &str, body: &str) -> Page {
    Page::Ok(MemoryResource::new(
        id,
        format!("{id}.xhtml"),
        format!("<html><body>{body}</body></html>"),
    ))
}

fn spine() -> Vec<Page> {
    vec![
        page("ch1", "<h1>Chapter One</h1><p>A raven perched above the door.</p>"),
        Page::Corrupt("ch2"),
        page(
            "ch3",
            "<p>The raven said &quot;nevermore&quot;.</p><p>Still the raven sat.</p>",
        ),
        page("ch4", "<p>No birds at all in this one.</p>"),
    ]
}

#[test]
fn corrupt_page_is_skipped_and_order_preserved() {
    let book = spine();
    let results = search_document("raven", &book);

    let ids: Vec<&str> = results.iter().map(|r| r.resource().id()).collect();
    assert_eq!(ids, vec!["ch1", "ch3", "ch3"]);

    // Within ch3, matches ascend by offset.
    assert!(results[1].range().start < results[2].range().start);
}

#[test]
fn results_carry_query_and_navigable_resource() {
    let book = spine();
    let results = search_document("raven", &book);

    assert!(!results.is_empty());
    for result in &results {
        assert_eq!(result.query(), "raven");
        assert!(result.resource().href().ends_with(".xhtml"));
    }
}

#[test]
fn excerpts_resolve_lazily_per_result() {
    let book = spine();
    let results = search_document("raven", &book);

    let excerpt = results[0].excerpt().unwrap();
    let rel = excerpt.match_range;
    let emphasized: String = excerpt
        .context
        .chars()
        .skip(rel.start)
        .take(rel.end - rel.start)
        .collect();
    assert!(emphasized.contains("raven"));
    // Trailing context follows the match, never precedes it.
    assert!(excerpt.context.chars().count() <= rel.len() + 30);
}

#[test]
fn match_spans_inline_markup() {
    let book = vec![page("ch1", "<p>ne<em>ver</em>more</p>")];
    let results = search_document("nevermore", &book);
    assert_eq!(results.len(), 1);
}

#[test]
fn decoded_entities_are_searchable() {
    let book = spine();
    let results = search_document("\"nevermore\"", &book);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].resource().id(), "ch3");
}

#[test]
fn empty_query_is_a_no_op() {
    let book = spine();
    assert!(search_document("", &book).is_empty());
}

#[test]
fn superseded_search_discards_its_results() {
    let book = spine();
    let cancel = CancelToken::new();
    cancel.cancel();
    assert!(search_document_cancellable("raven", &book, &cancel).is_none());
}

#[test]
fn repeated_searches_are_identical() {
    let book = spine();
    let first = search_document("raven", &book);
    let second = search_document("raven", &book);

    let key = |r: &quire::search::SearchResult<'_, Page>| -> (String, MatchRange) {
        (r.resource().id().to_string(), r.range())
    };
    assert_eq!(
        first.iter().map(key).collect::<Vec<_>>(),
        second.iter().map(key).collect::<Vec<_>>()
    );
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_search_preserves_spine_order() {
    use quire::search::search_document_parallel;

    let book = spine();
    let sequential = search_document("raven", &book);
    let parallel = search_document_parallel("raven", &book, &CancelToken::new()).unwrap();

    assert_eq!(sequential.len(), parallel.len());
    for (a, b) in sequential.iter().zip(&parallel) {
        assert_eq!(a.resource().id(), b.resource().id());
        assert_eq!(a.range(), b.range());
    }
}

/// File-backed pages behave like in-memory ones, and a page deleted between
/// the match pass and excerpting degrades to a missing excerpt, not a crash.
#[test]
fn file_backed_book_and_vanishing_page() {
    let dir: PathBuf = std::env::temp_dir()
        .join("quire_test_fixtures")
        .join(format!("book_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create fixture dir");

    let ch1 = dir.join("ch1.xhtml");
    let ch2 = dir.join("ch2.xhtml");
    fs::write(&ch1, "<html><body><p>the quick brown fox</p></body></html>").unwrap();
    fs::write(&ch2, "<html><body><p>quick as a flash</p></body></html>").unwrap();

    let book = vec![
        FileResource::new("ch1", "ch1.xhtml", &ch1),
        FileResource::new("ch2", "ch2.xhtml", &ch2),
    ];

    let results = search_document("quick", &book);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].resource().id(), "ch1");
    assert_eq!(results[1].resource().id(), "ch2");
    assert!(results[0].excerpt().is_some());

    // The second page vanishes before its excerpt is requested.
    fs::remove_file(&ch2).unwrap();
    assert!(results[1].excerpt().is_none());

    let _ = fs::remove_dir_all(&dir);
}
