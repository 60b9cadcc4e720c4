//! Error types for pieces.

/// Errors that can occur when configuring a segmenter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A size parameter was zero.
    #[error("invalid parameter `{name}`: {value} (must be > 0)")]
    InvalidParameter {
        /// Which parameter was rejected (`length` or `overlap`).
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// `overlap` exceeds `length`, so a chunk would hold no units.
    #[error("overlap {overlap} exceeds length {length}: chunk length would be 0")]
    ZeroChunkLength {
        /// The target piece length.
        length: usize,
        /// The overlap factor.
        overlap: usize,
    },
}

/// Result type for pieces operations.
pub type Result<T> = std::result::Result<T, Error>;
