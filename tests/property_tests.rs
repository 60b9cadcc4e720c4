//! Property-based tests for piece segmentation.
//!
//! These tests verify the invariants every cut must hold:
//! - Count: `n_chunks + 1 - overlap` pieces, or none
//! - Position: content is the substring at `pos` (chars) and `start` (bytes)
//! - Overlap: neighbours share `overlap - 1` chunks and rebuild the text
//! - Order: `sid` counts up from 0

use proptest::prelude::*;
use pieces::{idlize, Error, Piece, Segmenter, Unit};
use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Test Generators
// =============================================================================

/// Generate text, possibly empty, possibly multi-byte
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,300}").unwrap()
}

/// Generate text heavy in combining marks and emoji sequences
fn grapheme_heavy_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "e\u{301}", "👍🏽", "🇩🇪", "\r\n", "語", " "]),
        0..80,
    )
    .prop_map(|parts| parts.concat())
}

/// Generate a valid segmenter
fn valid_segmenter() -> impl Strategy<Value = Segmenter> {
    (1usize..60, 1usize..6, 0usize..4).prop_filter_map(
        "overlap exceeds length",
        |(length, overlap, context)| {
            Segmenter::new(length, overlap)
                .ok()
                .map(|s| s.with_context(context))
        },
    )
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn n_chunks(segmenter: &Segmenter, text: &str) -> usize {
    text.chars().count().div_ceil(segmenter.chunk_length())
}

fn char_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fn char_suffix(s: &str, n: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(n)).collect()
}

/// Rebuild the text from contents by dropping each piece's overlapped prefix
fn rebuild(pieces: &[Piece<'_>], overlap_chars: usize) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i == 0 {
            out.push_str(piece.content);
        } else {
            out.extend(piece.content.chars().skip(overlap_chars));
        }
    }
    out
}

// =============================================================================
// Segmenter Tests
// =============================================================================

proptest! {
    #[test]
    fn piece_count(text in arbitrary_text(), segmenter in valid_segmenter()) {
        let n = n_chunks(&segmenter, &text);
        let count = segmenter.cut(&text).count();

        if n == 0 {
            prop_assert_eq!(count, 0);
        } else {
            prop_assert_eq!(count, (n + 1).saturating_sub(segmenter.overlap()));
        }
        prop_assert_eq!(segmenter.count(&text), count);
    }

    #[test]
    fn content_located_at_pos(text in arbitrary_text(), segmenter in valid_segmenter()) {
        let max_chars = segmenter.overlap() * segmenter.chunk_length();

        for piece in segmenter.cut(&text) {
            let at_pos: String = text
                .chars()
                .skip(piece.pos)
                .take(piece.content.chars().count())
                .collect();
            prop_assert_eq!(&at_pos, piece.content);
            prop_assert_eq!(&text[piece.span()], piece.content);
            prop_assert!(piece.content.chars().count() <= max_chars);
            prop_assert!(piece.content.chars().count() <= segmenter.length());
        }
    }

    #[test]
    fn sids_count_up(text in arbitrary_text(), segmenter in valid_segmenter()) {
        for (i, piece) in segmenter.cut(&text).enumerate() {
            prop_assert_eq!(piece.sid, i);
            prop_assert_eq!(piece.pos, i * segmenter.chunk_length());
        }
    }

    #[test]
    fn neighbours_overlap_and_rebuild(text in arbitrary_text(), segmenter in valid_segmenter()) {
        let pieces: Vec<_> = segmenter.cut(&text).collect();
        if pieces.is_empty() {
            return Ok(());
        }

        let overlap_chars = (segmenter.overlap() - 1) * segmenter.chunk_length();
        for pair in pieces.windows(2) {
            prop_assert_eq!(
                char_suffix(pair[0].content, overlap_chars),
                char_prefix(pair[1].content, overlap_chars)
            );
        }
        prop_assert_eq!(rebuild(&pieces, overlap_chars), text);
    }

    #[test]
    fn context_surrounds_content(text in arbitrary_text(), segmenter in valid_segmenter()) {
        let cl = segmenter.chunk_length();
        for piece in segmenter.cut(&text) {
            prop_assert!(piece.tail.starts_with(piece.content));
            prop_assert_eq!(&text[piece.start - piece.head.len()..piece.start], piece.head);
            prop_assert_eq!(&text[piece.context_span()], format!("{}{}", piece.head, piece.tail));
            prop_assert!(piece.head.chars().count() <= segmenter.context() * cl);
            prop_assert!(
                piece.tail.chars().count() <= (segmenter.overlap() + segmenter.context()) * cl
            );
        }
    }

    #[test]
    fn grapheme_unit_never_splits_clusters(
        text in grapheme_heavy_text(),
        segmenter in valid_segmenter()
    ) {
        let segmenter = segmenter.with_unit(Unit::Grapheme);
        let boundaries: Vec<usize> = text
            .grapheme_indices(true)
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();

        for piece in segmenter.cut(&text) {
            prop_assert!(boundaries.contains(&piece.span().start));
            prop_assert!(boundaries.contains(&piece.span().end));
            prop_assert!(boundaries.contains(&piece.context_span().start));
            prop_assert!(boundaries.contains(&piece.context_span().end));
        }
    }

    #[test]
    fn rejected_exactly_when_overlap_exceeds_length(length in 0usize..80, overlap in 0usize..80) {
        let result = Segmenter::new(length, overlap);
        if length == 0 || overlap == 0 {
            let is_invalid = matches!(result, Err(Error::InvalidParameter { .. }));
            prop_assert!(is_invalid);
        } else if overlap > length {
            prop_assert_eq!(result, Err(Error::ZeroChunkLength { length, overlap }));
        } else {
            let segmenter = result.unwrap();
            prop_assert_eq!(segmenter.chunk_length(), length / overlap);
            prop_assert!(segmenter.overlap() * segmenter.chunk_length() <= length);
        }
    }

    #[test]
    fn idlize_output_is_identifier_safe(text in ".{0,80}") {
        let slug = idlize(&text);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'));
        prop_assert_eq!(idlize(&slug), slug.clone());
    }
}

// =============================================================================
// Consistency Tests
// =============================================================================

#[test]
fn cutting_is_deterministic() {
    let text = "The quick brown fox jumps over the lazy dog. Pack my box.";
    let segmenter = Segmenter::new(12, 3).unwrap().with_context(2);

    let first: Vec<_> = segmenter.cut(text).collect();
    let second: Vec<_> = segmenter.cut(text).collect();
    assert_eq!(first, second);
}
