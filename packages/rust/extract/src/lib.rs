//! Marker-based section extraction.
//!
//! Given the raw generated text and a `(start_marker, end_marker)` pair,
//! [`extract_section`] deterministically slices out one section's content.
//! The generator's output format is not contractually guaranteed, so every
//! deviation maps to a defined result rather than an error:
//!
//! - start marker absent → empty (the caller substitutes fallback text)
//! - end marker absent → the trimmed remainder of the document; when markers
//!   are emitted out of order this lets content bleed across sections, which
//!   is accepted, documented behavior
//! - content that trims to nothing → empty, same as a missing marker
//!
//! Extraction is pure and per-section independent: each call reads the same
//! immutable text, and an empty result in one section never affects another.

use tracing::debug;

/// Slice the content between `start_marker` and `end_marker` out of `text`.
///
/// The returned slice borrows from `text` and is trimmed of leading and
/// trailing whitespace. Returns `""` when the start marker is missing or the
/// section is empty.
pub fn extract_section<'a>(text: &'a str, start_marker: &str, end_marker: &str) -> &'a str {
    let Some(start_idx) = text.find(start_marker) else {
        debug!(marker = start_marker, "section marker not found");
        return "";
    };

    let content_start = start_idx + start_marker.len();
    let after_start = &text[content_start..];

    match after_start.find(end_marker) {
        // No end marker: the section runs to the end of the document.
        None => after_start.trim(),
        Some(end_idx) => after_start[..end_idx].trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_between_markers_and_trims() {
        let text = "[A]  foo bar  [B]baz[END]";
        assert_eq!(extract_section(text, "[A]", "[B]"), "foo bar");
        assert_eq!(extract_section(text, "[B]", "[END]"), "baz");
    }

    #[test]
    fn missing_start_marker_yields_empty() {
        let text = "no markers here";
        assert_eq!(extract_section(text, "[A]", "[B]"), "");
        assert_eq!(extract_section(text, "[B]", "[END]"), "");
    }

    #[test]
    fn missing_end_marker_takes_trimmed_remainder() {
        let text = "[A]only start present";
        assert_eq!(extract_section(text, "[A]", "[END]"), "only start present");
    }

    #[test]
    fn remainder_is_not_truncated() {
        let body = "line one\nline two\n\nline three";
        let text = format!("[LAST]\n{body}\n");
        assert_eq!(extract_section(&text, "[LAST]", "[END]"), body);
    }

    #[test]
    fn out_of_order_markers_bleed_into_earlier_section() {
        // [B] appears before [A], so extracting A runs to end of document
        // and swallows the text under [B]. Documented behavior.
        let text = "[B]second[A]first";
        assert_eq!(extract_section(text, "[A]", "[B]"), "first");
        assert_eq!(extract_section(text, "[B]", "[END]"), "second[A]first");
    }

    #[test]
    fn whitespace_only_section_yields_empty() {
        let text = "[A]   \n\t  [B]content[END]";
        assert_eq!(extract_section(text, "[A]", "[B]"), "");
        assert_eq!(extract_section(text, "[B]", "[END]"), "content");
    }

    #[test]
    fn adjacent_markers_yield_empty() {
        let text = "[A][B]tail[END]";
        assert_eq!(extract_section(text, "[A]", "[B]"), "");
    }

    #[test]
    fn uses_first_occurrence_of_each_marker() {
        let text = "[A]first[B]x[A]second[B]y[END]";
        assert_eq!(extract_section(text, "[A]", "[B]"), "first");
    }

    #[test]
    fn end_marker_before_start_marker_is_ignored() {
        // Only end markers after the start marker count.
        let text = "[B][A]content[B]tail";
        assert_eq!(extract_section(text, "[A]", "[B]"), "content");
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "[A] alpha [B] beta [END]";
        let first = extract_section(text, "[A]", "[B]");
        let second = extract_section(text, "[A]", "[B]");
        assert_eq!(first, second);
        assert_eq!(first, "alpha");
    }

    #[test]
    fn multiline_content_keeps_interior_whitespace() {
        let text = "[A]\n  para one\n\n  para two  \n[B][END]";
        assert_eq!(extract_section(text, "[A]", "[B]"), "para one\n\n  para two");
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(extract_section("", "[A]", "[B]"), "");
    }
}
