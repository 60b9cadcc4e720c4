//! Segmenter configuration.
//!
//! [`SegmenterConfig`] is the unvalidated, plain-data form of a
//! [`Segmenter`]: public fields, a sensible [`Default`], and (with the `serde`
//! feature) loadable from any serde format. Missing fields take their default,
//! so a config file only needs to name what it changes:
//!
//! ```json
//! { "length": 600, "overlap": 3, "unit": "grapheme" }
//! ```
//!
//! Validation happens once, when the config becomes a segmenter.

use crate::{Error, Segmenter, Unit};

/// Plain-data parameters for a [`Segmenter`].
///
/// # Examples
///
/// ```rust
/// use pieces::{Segmenter, SegmenterConfig, Unit};
///
/// let config = SegmenterConfig {
///     length: 600,
///     overlap: 3,
///     ..SegmenterConfig::default()
/// };
/// let segmenter = config.build().unwrap();
/// assert_eq!(segmenter.chunk_length(), 200);
/// assert_eq!(segmenter.unit(), Unit::Char);
///
/// // Zero overlap is rejected on build
/// let bad = SegmenterConfig { overlap: 0, ..config };
/// assert!(Segmenter::try_from(bad).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SegmenterConfig {
    /// Target length of a piece's content, in units.
    pub length: usize,
    /// Number of chunks joined into one piece.
    pub overlap: usize,
    /// Number of head/tail context chunks.
    pub context: usize,
    /// Unit that lengths are measured in.
    pub unit: Unit,
}

impl SegmenterConfig {
    /// Validate into a [`Segmenter`].
    ///
    /// # Errors
    ///
    /// See [`Segmenter::new`].
    pub fn build(self) -> Result<Segmenter, Error> {
        Segmenter::try_from(self)
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        // ~512 tokens per piece at ~4 chars/token, each chunk in two pieces
        Self {
            length: 2048,
            overlap: 2,
            context: 0,
            unit: Unit::Char,
        }
    }
}

impl TryFrom<SegmenterConfig> for Segmenter {
    type Error = Error;

    fn try_from(config: SegmenterConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(config.length, config.overlap)?
            .with_context(config.context)
            .with_unit(config.unit))
    }
}

impl From<Segmenter> for SegmenterConfig {
    fn from(segmenter: Segmenter) -> Self {
        Self {
            length: segmenter.length(),
            overlap: segmenter.overlap(),
            context: segmenter.context(),
            unit: segmenter.unit(),
        }
    }
}
