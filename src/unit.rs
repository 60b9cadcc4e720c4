//! What counts as one "character" when measuring chunks.
//!
//! Lengths, chunk sizes and piece positions are all counted in units, never in
//! bytes. Two units are supported:
//!
//! ```text
//! "e\u{301}te"   (é written as e + combining acute)
//!
//! Char:     ['e', '\u{301}', 't', 'e']   4 units
//! Grapheme: ["e\u{301}", "t", "e"]       3 units
//! ```
//!
//! [`Unit::Char`] counts Unicode scalar values and is the default. It is what
//! most text-processing tools mean by "characters". [`Unit::Grapheme`] counts
//! extended grapheme clusters (UAX #29), so a chunk boundary never lands
//! inside an emoji sequence or between a letter and its combining marks.

use unicode_segmentation::UnicodeSegmentation;

/// The unit in which text lengths are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// Unicode scalar values (`char`).
    #[default]
    Char,
    /// Extended grapheme clusters.
    Grapheme,
}

impl Unit {
    /// Number of units in `text`.
    ///
    /// ```rust
    /// use pieces::Unit;
    ///
    /// assert_eq!(Unit::Char.count("e\u{301}"), 2);
    /// assert_eq!(Unit::Grapheme.count("e\u{301}"), 1);
    /// ```
    #[must_use]
    pub fn count(self, text: &str) -> usize {
        match self {
            Self::Char => text.chars().count(),
            Self::Grapheme => text.graphemes(true).count(),
        }
    }

    /// Byte offsets at which consecutive chunks of `step` units start,
    /// followed by `text.len()` as a closing sentinel.
    ///
    /// For `n` chunks the result has `n + 1` entries, so chunk `k` is
    /// `text[bounds[k]..bounds[k + 1]]`. Empty text yields `[0]`.
    pub(crate) fn chunk_bounds(self, text: &str, step: usize) -> Vec<usize> {
        debug_assert!(step > 0);
        let mut bounds: Vec<usize> = match self {
            Self::Char => text.char_indices().step_by(step).map(|(i, _)| i).collect(),
            Self::Grapheme => text
                .grapheme_indices(true)
                .step_by(step)
                .map(|(i, _)| i)
                .collect(),
        };
        bounds.push(text.len());
        bounds
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Char => "char",
            Self::Grapheme => "grapheme",
        })
    }
}
