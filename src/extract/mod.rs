//! Markup-to-text extraction.
//!
//! Converts one resource's raw markup into the plain text the matcher and
//! excerpt code operate on. Stripping is a single pass over the input:
//!
//! - Tags are removed. Line-breaking tags (`<p>`, `<br>`, headings, ...)
//!   emit a `\n` so paragraph boundaries survive; inline tags (`<em>`,
//!   `<span>`, ...) emit nothing, so text split only by formatting stays
//!   contiguous and matchable.
//! - `<script>`/`<style>` element content and `<!-- -->` comments are
//!   dropped entirely.
//! - Character entities are decoded (the `entities` submodule has the
//!   table).
//!
//! No whitespace normalization happens beyond what stripping naturally
//! produces; the matcher's tolerances absorb the rest.

mod entities;

use crate::document::Resource;
use crate::error::SearchError;
use entities::decode_entities_into;

/// Strip markup from raw resource content, yielding human-visible plain text
/// in document order.
///
/// Pure function of its input; never fails. Malformed markup degrades
/// gracefully: an unterminated tag or comment swallows the remainder of the
/// input, and a `<` that cannot open a tag is kept as literal text.
pub fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() / 2);
    let mut rest = raw;

    while let Some(lt) = rest.find('<') {
        decode_entities_into(&rest[..lt], &mut out);
        let after = &rest[lt + 1..];

        if let Some(comment) = after.strip_prefix("!--") {
            match comment.find("-->") {
                Some(end) => rest = &comment[end + 3..],
                None => return out,
            }
            continue;
        }

        // A '<' not followed by a plausible tag opener is literal text.
        match after.chars().next() {
            Some(c) if c.is_ascii_alphabetic() || c == '/' || c == '!' || c == '?' => {}
            Some(_) => {
                out.push('<');
                rest = after;
                continue;
            }
            None => return out,
        }

        let Some(gt) = after.find('>') else {
            // Unterminated tag at end of input.
            return out;
        };
        let tag = &after[..gt];
        rest = &after[gt + 1..];

        let name = tag_name(tag);
        if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
            if !tag.starts_with('/') && !tag.ends_with('/') {
                rest = skip_raw_element(rest, name);
            }
        } else if is_line_break_tag(name) {
            out.push('\n');
        }
    }

    decode_entities_into(rest, &mut out);
    out
}

/// Load a resource and strip its markup.
///
/// The only fallible step in the pipeline: a resource that cannot be loaded
/// or decoded maps to [`SearchError::ResourceLoad`], which the locator treats
/// as "this page is unsearchable" and skips.
pub fn plain_text<R: Resource>(resource: &R) -> Result<String, SearchError> {
    let raw = resource
        .load()
        .map_err(|source| SearchError::resource_load(resource.id(), source))?;
    Ok(strip_markup(&raw))
}

/// Element name of a raw tag body: `/p class="x"` -> `p`, `br/` -> `br`.
fn tag_name(tag: &str) -> &str {
    let body = tag.strip_prefix('/').unwrap_or(tag);
    let end = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    &body[..end]
}

/// Tags whose presence marks a line boundary in the extracted text.
fn is_line_break_tag(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().as_str(),
        "p" | "br"
            | "div"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "li"
            | "ul"
            | "ol"
            | "dl"
            | "dt"
            | "dd"
            | "tr"
            | "table"
            | "blockquote"
            | "pre"
            | "hr"
            | "section"
            | "article"
            | "aside"
            | "header"
            | "footer"
            | "figure"
            | "figcaption"
            | "nav"
    )
}

/// Skip the content of a raw-text element until its matching close tag.
/// `name` is the element name as it appeared in the open tag.
fn skip_raw_element<'a>(mut rest: &'a str, name: &str) -> &'a str {
    loop {
        let Some(lt) = rest.find("</") else {
            return "";
        };
        let after = &rest[lt + 2..];
        let closes = after
            .get(..name.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(name));
        if closes {
            return match after.find('>') {
                Some(gt) => &after[gt + 1..],
                None => "",
            };
        }
        rest = after;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryResource;

    #[test]
    fn test_strip_inline_tags_keeps_text_adjacent() {
        assert_eq!(strip_markup("a<span>b</span>c"), "abc");
        assert_eq!(strip_markup("qu<em>ick</em> fox"), "quick fox");
    }

    #[test]
    fn test_block_tags_emit_line_breaks() {
        assert_eq!(strip_markup("<p>Hello</p>"), "\nHello\n");
        assert_eq!(strip_markup("one<br/>two"), "one\ntwo");
    }

    #[test]
    fn test_text_between_tags_preserved_exactly() {
        assert_eq!(
            strip_markup("<p>The quick  brown\tfox</p>"),
            "\nThe quick  brown\tfox\n"
        );
    }

    #[test]
    fn test_comments_dropped() {
        assert_eq!(strip_markup("a<!-- hidden -->b"), "ab");
    }

    #[test]
    fn test_unterminated_comment_swallows_rest() {
        assert_eq!(strip_markup("a<!-- hidden"), "a");
    }

    #[test]
    fn test_script_and_style_content_dropped() {
        assert_eq!(
            strip_markup("a<script>var x = '<b>not text</b>';</script>b"),
            "ab"
        );
        assert_eq!(strip_markup("a<style>p { color: red }</style>b"), "ab");
        assert_eq!(strip_markup("a<SCRIPT>x</SCRIPT>b"), "ab");
    }

    #[test]
    fn test_self_closing_script_does_not_swallow() {
        assert_eq!(strip_markup("a<script src=\"x.js\"/>b"), "ab");
    }

    #[test]
    fn test_literal_angle_bracket_kept() {
        assert_eq!(strip_markup("a < b"), "a < b");
        assert_eq!(strip_markup("1<2"), "1<2");
    }

    #[test]
    fn test_doctype_and_pi_dropped() {
        assert_eq!(
            strip_markup("<?xml version=\"1.0\"?><!DOCTYPE html>hi"),
            "hi"
        );
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(strip_markup("Fish &amp; Chips"), "Fish & Chips");
        assert_eq!(strip_markup("x &lt; y &gt; z"), "x < y > z");
    }

    #[test]
    fn test_non_ascii_text_preserved() {
        assert_eq!(strip_markup("<p>Das M\u{e4}dchen</p>"), "\nDas M\u{e4}dchen\n");
    }

    #[test]
    fn test_unterminated_tag_swallows_rest() {
        assert_eq!(strip_markup("abc<p unfinished"), "abc");
    }

    #[test]
    fn test_plain_text_loads_and_strips() {
        let res = MemoryResource::new("ch1", "ch1.xhtml", "<p>hello</p>");
        assert_eq!(plain_text(&res).unwrap(), "\nhello\n");
    }
}
