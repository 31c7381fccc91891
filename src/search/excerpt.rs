use crate::document::Resource;
use crate::extract;
use crate::query::MatchRange;
use crate::search::locator::SearchResult;
use serde::Serialize;

/// Default trailing context after the match, in chars.
pub const DEFAULT_TRAILING_CONTEXT: usize = 30;

/// A display window around one match: the matched text plus limited trailing
/// context.
///
/// `match_range` is the match's sub-range *within* `context`, char units.
/// Downstream rendering emphasizes that sub-range and de-emphasizes the
/// rest; this type only reports which part is which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    pub context: String,
    pub match_range: MatchRange,
}

impl<'r, R: Resource> SearchResult<'r, R> {
    /// Resolve this result to a display excerpt with the default trailing
    /// context length.
    ///
    /// Computed on demand, not stored: the resource's text is re-extracted
    /// at access time. Excerpting is rare (one visible row at a time)
    /// relative to scanning, so re-reading beats caching every page's text
    /// for the lifetime of the result list.
    pub fn excerpt(&self) -> Option<Excerpt> {
        self.excerpt_with(DEFAULT_TRAILING_CONTEXT)
    }

    /// Resolve this result to a display excerpt with an explicit trailing
    /// context length.
    ///
    /// Returns `None` on any failure - the resource became unreadable, or
    /// the stored offsets no longer land inside the re-extracted text. The
    /// caller renders a fallback (e.g. the raw query string) instead.
    pub fn excerpt_with(&self, trailing_context: usize) -> Option<Excerpt> {
        let text = extract::plain_text(self.resource()).ok()?;
        excerpt_at(&text, self.range(), trailing_context)
    }
}

/// Slice a clamped context window out of `text` and locate the match within
/// it.
///
/// The matched substring is a prefix of the window by construction, but it
/// is re-located via substring search anyway; if extraction produced
/// different text this time around, the mismatch surfaces as `None` rather
/// than a bogus highlight range.
pub(crate) fn excerpt_at(
    text: &str,
    range: MatchRange,
    trailing_context: usize,
) -> Option<Excerpt> {
    if range.start > range.end {
        return None;
    }

    let start = byte_of_char(text, range.start)?;
    let match_end = byte_of_char(text, range.end)?;
    let context_end = byte_of_char_clamped(text, range.end.saturating_add(trailing_context));

    let matched = &text[start..match_end];
    let context = &text[start..context_end];

    let at = context.find(matched)?;
    let rel_start = context[..at].chars().count();
    let rel_end = rel_start + matched.chars().count();

    Some(Excerpt {
        context: context.to_string(),
        match_range: MatchRange::new(rel_start, rel_end),
    })
}

/// Byte index of the char at `char_off`; `text.len()` when `char_off` equals
/// the char count, `None` when it is past the end.
fn byte_of_char(text: &str, char_off: usize) -> Option<usize> {
    if char_off == 0 {
        return Some(0);
    }
    let mut seen = 0;
    for (byte, _) in text.char_indices() {
        if seen == char_off {
            return Some(byte);
        }
        seen += 1;
    }
    (seen == char_off).then_some(text.len())
}

fn byte_of_char_clamped(text: &str, char_off: usize) -> usize {
    byte_of_char(text, char_off).unwrap_or(text.len())
}
