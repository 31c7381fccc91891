//! The read-only page abstraction the search core consumes.
//!
//! A *document* is an ordered sequence of [`Resource`]s - the spine of an
//! e-book, one entry per page or section. The core never mutates a resource
//! and never holds one beyond the borrow it was given: search functions take
//! the document as an explicit `&[R]` parameter, so independent searches over
//! different documents can run concurrently.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One page/section of a multi-part document, independently loadable.
///
/// `load` must be idempotent: two calls observe the same content. The core
/// relies on this because excerpt resolution re-reads a resource after the
/// match pass (see [`crate::search`]). How content is produced - file system,
/// archive, in-memory cache - is the page store's concern.
pub trait Resource {
    /// Stable identifier for this resource.
    fn id(&self) -> &str;

    /// Navigational reference (where the presentation layer jumps on tap).
    fn href(&self) -> &str;

    /// Raw markup content of this resource.
    fn load(&self) -> io::Result<String>;
}

/// A resource whose markup lives in memory.
#[derive(Debug, Clone)]
pub struct MemoryResource {
    id: String,
    href: String,
    markup: String,
}

impl MemoryResource {
    pub fn new(
        id: impl Into<String>,
        href: impl Into<String>,
        markup: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            markup: markup.into(),
        }
    }
}

impl Resource for MemoryResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn href(&self) -> &str {
        &self.href
    }

    fn load(&self) -> io::Result<String> {
        Ok(self.markup.clone())
    }
}

/// A resource backed by a markup file on disk.
///
/// Loads decode as UTF-8; a file that is missing or not valid UTF-8 surfaces
/// an `io::Error`, which the locator treats as "this page is unsearchable".
#[derive(Debug, Clone)]
pub struct FileResource {
    id: String,
    href: String,
    path: PathBuf,
}

impl FileResource {
    pub fn new(id: impl Into<String>, href: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            id: id.into(),
            href: href.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Resource for FileResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn href(&self) -> &str {
        &self.href
    }

    fn load(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}
