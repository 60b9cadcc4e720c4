//! Fixed-length overlapping pieces with head/tail context.
//!
//! ## How It Works
//!
//! The text is first cut into non-overlapping *chunks* of
//! `chunk_length = length / overlap` units (integer division). Each *piece* then joins
//! `overlap` consecutive chunks, and the next piece starts one chunk later:
//!
//! ```text
//! length = 4, overlap = 2  =>  chunk_length = 2
//!
//! Document: "abcdefghij"
//! Chunks:   ab | cd | ef | gh | ij
//!
//! Piece 0: "abcd"   pos 0
//! Piece 1: "cdef"   pos 2   <- shares "cd" with piece 0
//! Piece 2: "efgh"   pos 4
//! Piece 3: "ghij"   pos 6   <- last piece ends exactly at the end
//! ```
//!
//! Every interior chunk appears in `overlap` pieces, so any passage shorter
//! than a chunk is wholly contained in some piece, and retrieval never has to
//! stitch a match across a piece boundary.
//!
//! ## Context
//!
//! With `context = c`, each piece also carries up to `c` chunks before it
//! (`head`) and its content plus up to `c` chunks after it (`tail`). Context
//! is clamped at the ends of the document rather than padded.
//!
//! ## Count
//!
//! `n_chunks + 1 - overlap` pieces are produced. When the text has fewer than
//! `overlap` chunks, no full piece fits and nothing is produced. Empty text
//! always produces nothing.

use std::iter::FusedIterator;

use crate::{Error, Piece, Result, Unit};

/// Cuts text into overlapping pieces.
///
/// ## Example
///
/// ```rust
/// use pieces::Segmenter;
///
/// let segmenter = Segmenter::new(4, 2).unwrap();
/// let pieces: Vec<_> = segmenter.cut("abcdefghij").collect();
///
/// assert_eq!(pieces.len(), 4);
/// assert_eq!(pieces[1].content, "cdef");
/// assert_eq!(pieces[1].pos, 2);
/// assert_eq!(pieces[3].content, "ghij");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    length: usize,
    overlap: usize,
    context: usize,
    chunk_length: usize,
    unit: Unit,
}

impl Segmenter {
    /// Create a segmenter with no context.
    ///
    /// # Arguments
    ///
    /// * `length` - Target length of a piece's content, in units
    /// * `overlap` - Number of chunks joined into one piece
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `length` or `overlap` is zero,
    /// and [`Error::ZeroChunkLength`] if `overlap > length`, which leaves no
    /// room for a single unit per chunk.
    pub fn new(length: usize, overlap: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidParameter {
                name: "length",
                value: length,
            });
        }
        if overlap == 0 {
            return Err(Error::InvalidParameter {
                name: "overlap",
                value: overlap,
            });
        }
        if overlap > length {
            return Err(Error::ZeroChunkLength { length, overlap });
        }
        let chunk_length = length / overlap;

        tracing::debug!(length, overlap, chunk_length, "segmenter configured");
        Ok(Self {
            length,
            overlap,
            context: 0,
            chunk_length,
            unit: Unit::Char,
        })
    }

    /// Carry `context` chunks of head and tail context on each piece.
    #[must_use]
    pub fn with_context(self, context: usize) -> Self {
        Self { context, ..self }
    }

    /// Measure lengths in `unit` instead of chars.
    #[must_use]
    pub fn with_unit(self, unit: Unit) -> Self {
        Self { unit, ..self }
    }

    /// Target length of a piece's content.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of chunks per piece.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.overlap
    }

    /// Number of context chunks on each side.
    #[must_use]
    pub const fn context(&self) -> usize {
        self.context
    }

    /// Length of a single chunk, `length / overlap` rounded down.
    #[must_use]
    pub const fn chunk_length(&self) -> usize {
        self.chunk_length
    }

    /// The unit lengths are measured in.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Cut `text` into pieces.
    ///
    /// Chunk boundaries are located up front; pieces are produced lazily
    /// as the iterator advances.
    pub fn cut<'a>(&self, text: &'a str) -> Pieces<'a> {
        let bounds = self.unit.chunk_bounds(text, self.chunk_length);
        let n_chunks = bounds.len() - 1;
        let count = self.piece_count(n_chunks);

        tracing::debug!(
            bytes = text.len(),
            unit = %self.unit,
            n_chunks,
            pieces = count,
            "cutting text into pieces"
        );

        Pieces {
            text,
            bounds,
            overlap: self.overlap,
            context: self.context,
            chunk_length: self.chunk_length,
            next: 0,
            end: count,
        }
    }

    /// The number of pieces [`cut`](Self::cut) would produce for `text`.
    #[must_use]
    pub fn count(&self, text: &str) -> usize {
        let n_chunks = self.unit.count(text).div_ceil(self.chunk_length);
        self.piece_count(n_chunks)
    }

    fn piece_count(&self, n_chunks: usize) -> usize {
        if n_chunks == 0 {
            return 0;
        }
        (n_chunks + 1).saturating_sub(self.overlap)
    }
}

/// Cut `text` into pieces of `length` units, with each chunk of
/// `length / overlap` units shared by `overlap` pieces and `context` chunks
/// of head/tail context.
///
/// Shorthand for `Segmenter::new(length, overlap)?.with_context(context).cut(text)`.
///
/// # Errors
///
/// See [`Segmenter::new`].
///
/// ```rust
/// let contents: Vec<_> = pieces::cut_pieces("abcdefghij", 4, 2, 0)
///     .unwrap()
///     .map(|p| p.content)
///     .collect();
///
/// assert_eq!(contents, ["abcd", "cdef", "efgh", "ghij"]);
/// ```
pub fn cut_pieces(text: &str, length: usize, overlap: usize, context: usize) -> Result<Pieces<'_>> {
    Ok(Segmenter::new(length, overlap)?
        .with_context(context)
        .cut(text))
}

/// Lazy iterator over the pieces of a text. Created by [`Segmenter::cut`].
///
/// A clone continues from the same position. Call [`Segmenter::cut`] again
/// to start over.
#[derive(Debug, Clone)]
pub struct Pieces<'a> {
    text: &'a str,
    bounds: Vec<usize>,
    overlap: usize,
    context: usize,
    chunk_length: usize,
    next: usize,
    end: usize,
}

impl<'a> Pieces<'a> {
    /// Number of chunks the text was divided into.
    #[must_use]
    pub fn n_chunks(&self) -> usize {
        self.bounds.len() - 1
    }

    fn piece(&self, i: usize) -> Piece<'a> {
        let n = self.n_chunks();
        let start = self.bounds[i];
        let content_end = self.bounds[(i + self.overlap).min(n)];
        let head_start = self.bounds[i.saturating_sub(self.context)];
        let tail_end = self.bounds[(i + self.overlap).saturating_add(self.context).min(n)];

        Piece {
            content: &self.text[start..content_end],
            head: &self.text[head_start..start],
            tail: &self.text[start..tail_end],
            sid: i,
            pos: i * self.chunk_length,
            start,
        }
    }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let piece = self.piece(self.next);
        self.next += 1;
        Some(piece)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for Pieces<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.piece(self.end))
    }
}

impl ExactSizeIterator for Pieces<'_> {}

impl FusedIterator for Pieces<'_> {}
