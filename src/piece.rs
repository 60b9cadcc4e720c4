//! The Piece type: overlapping content with surrounding context.

/// A piece of text with its head/tail context and position metadata.
///
/// A piece is `overlap` consecutive chunks of the original document. Its
/// `head` is up to `context` chunks before the content, and its `tail` is the
/// content followed by up to `context` more chunks:
///
/// ```text
/// chunks:   ab | cd | ef | gh | ij        overlap = 2, context = 1
///
/// piece 1:       [ cd   ef ]
///   head:   ab
///   tail:        cd   ef   gh
/// ```
///
/// All three strings borrow from the original text. Each is contiguous there,
/// so the byte offset `start` is enough to locate all of them:
///
/// ```rust
/// use pieces::cut_pieces;
///
/// let text = "abcdefghij";
/// let piece = cut_pieces(text, 4, 2, 1).unwrap().nth(1).unwrap();
///
/// assert_eq!(&text[piece.span()], piece.content);
/// assert_eq!(piece.head, "ab");
/// assert_eq!(piece.tail, "cdefgh");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Piece<'a> {
    /// The piece's primary text.
    pub content: &'a str,
    /// Context chunks immediately preceding `content`.
    pub head: &'a str,
    /// `content` followed by trailing context chunks.
    pub tail: &'a str,
    /// Index of the chunk where this piece starts.
    pub sid: usize,
    /// Offset of `content` in the original text, in units.
    pub pos: usize,
    /// Byte offset of `content` in the original text.
    pub start: usize,
}

impl Piece<'_> {
    /// The length of the content in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The byte span of the content in the original text.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.content.len()
    }

    /// The byte span covered by head and tail together.
    ///
    /// Clamped at 0 for hand-built pieces whose head is longer than `start`.
    #[must_use]
    pub fn context_span(&self) -> std::ops::Range<usize> {
        self.start.saturating_sub(self.head.len())..self.start + self.tail.len()
    }

    /// Copy the borrowed strings into an owned [`PieceBuf`].
    #[must_use]
    pub fn to_owned_piece(&self) -> PieceBuf {
        PieceBuf::from(*self)
    }
}

impl std::fmt::Display for Piece<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Piece {{ sid: {}, pos: {}, len: {}, head: {}, tail: {} }}",
            self.sid,
            self.pos,
            self.len(),
            self.head.len(),
            self.tail.len()
        )
    }
}

/// An owned [`Piece`], for when the source text does not outlive the pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceBuf {
    /// The piece's primary text.
    pub content: String,
    /// Context chunks immediately preceding `content`.
    pub head: String,
    /// `content` followed by trailing context chunks.
    pub tail: String,
    /// Index of the chunk where this piece starts.
    pub sid: usize,
    /// Offset of `content` in the original text, in units.
    pub pos: usize,
    /// Byte offset of `content` in the original text.
    pub start: usize,
}

impl PieceBuf {
    /// Borrow this piece as a [`Piece`].
    #[must_use]
    pub fn as_piece(&self) -> Piece<'_> {
        Piece {
            content: &self.content,
            head: &self.head,
            tail: &self.tail,
            sid: self.sid,
            pos: self.pos,
            start: self.start,
        }
    }
}

impl From<Piece<'_>> for PieceBuf {
    fn from(piece: Piece<'_>) -> Self {
        Self {
            content: piece.content.to_owned(),
            head: piece.head.to_owned(),
            tail: piece.tail.to_owned(),
            sid: piece.sid,
            pos: piece.pos,
            start: piece.start,
        }
    }
}

impl std::fmt::Display for PieceBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_piece().fmt(f)
    }
}
