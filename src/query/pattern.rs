use crate::error::SearchError;
use memchr::memmem;
use serde::{Deserialize, Serialize};

/// A located occurrence within extracted plain text.
///
/// Half-open `[start, end)` in **Unicode scalar (char) units**, not bytes,
/// so ranges stay valid for non-ASCII content regardless of encoding.
/// Invariant: `0 <= start <= end <= text.chars().count()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Length of the matched span in chars.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A compiled search query: a literal needle with two tolerances applied at
/// scan time.
///
/// 1. A run of line breaks (`\n`/`\r`) immediately before the literal
///    occurrence is absorbed into the match. This lets a query match text
///    that extraction split across a line boundary.
/// 2. One trailing character is absorbed after the literal occurrence iff it
///    is non-ASCII or an ASCII word character (letter/digit/underscore).
///
/// The query text itself is never interpreted as pattern syntax - matching
/// is explicit substring scanning, so metacharacters need no escaping and
/// cannot change the semantics. Matching is case-sensitive; any case folding
/// is the caller's normalization.
#[derive(Debug, Clone)]
pub struct Pattern {
    literal: Box<str>,
}

impl Pattern {
    /// Compile a query. The only rejected input is the empty string; every
    /// non-empty query compiles.
    pub fn compile(query: &str) -> Result<Self, SearchError> {
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self {
            literal: query.into(),
        })
    }

    /// The literal query text.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// Find every non-overlapping match in `text`, leftmost first.
    ///
    /// Standard leftmost semantics: after a match ends, scanning resumes at
    /// the match's end. The returned ranges are ascending by `start`,
    /// non-overlapping, and eagerly computed - the whole text is scanned in
    /// one pass.
    pub fn find_all(&self, text: &str) -> Vec<MatchRange> {
        let needle = self.literal.as_bytes();
        let finder = memmem::Finder::new(needle);
        let bytes = text.as_bytes();

        let mut matches = Vec::new();
        let mut cursor = CharCursor::new(text);
        // Byte position scanning resumes from; doubles as the floor the
        // leading tolerance may not extend past.
        let mut from = 0;

        while let Some(found) = finder.find(&bytes[from..]) {
            let hit = from + found;

            let mut start = hit;
            while start > from && matches!(bytes[start - 1], b'\n' | b'\r') {
                start -= 1;
            }

            let mut end = hit + needle.len();
            if let Some(c) = text[end..].chars().next() {
                if absorbs_trailing(c) {
                    end += c.len_utf8();
                }
            }

            let start_char = cursor.char_offset(start);
            let end_char = cursor.char_offset(end);
            matches.push(MatchRange::new(start_char, end_char));

            from = end;
        }

        matches
    }
}

/// Trailing tolerance: one wide (non-ASCII) or word character.
fn absorbs_trailing(c: char) -> bool {
    !c.is_ascii() || c.is_ascii_alphanumeric() || c == '_'
}

/// Monotone byte-to-char offset converter. Match boundaries arrive in
/// ascending byte order, so one forward pass over the text suffices.
struct CharCursor<'a> {
    text: &'a str,
    byte: usize,
    chars: usize,
}

impl<'a> CharCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            byte: 0,
            chars: 0,
        }
    }

    fn char_offset(&mut self, byte_pos: usize) -> usize {
        debug_assert!(byte_pos >= self.byte);
        self.chars += self.text[self.byte..byte_pos].chars().count();
        self.byte = byte_pos;
        self.chars
    }
}
