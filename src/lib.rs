//! # pieces
//!
//! Overlapping, fixed-length text pieces with surrounding context, for
//! passage retrieval and document indexing.
//!
//! ## The Problem
//!
//! Retrieval works on passages, not documents. Cut a document into disjoint
//! passages and any phrase that straddles a cut is found in neither half:
//!
//! ```text
//! "... the answer | is 42 ..."
//!     passage 3   | passage 4     <- "answer is 42" matches nothing
//! ```
//!
//! The usual fix is overlap. This crate uses a simple, fully predictable form
//! of it: cut the text into small *chunks*, then build each *piece* from
//! `overlap` consecutive chunks, sliding one chunk at a time. Every chunk in
//! the interior of the document lands in exactly `overlap` pieces.
//!
//! ## Pieces
//!
//! ```text
//! length = 6, overlap = 3   =>   chunk_length = 2
//!
//! Document: "abcdefghijkl"
//! Chunks:   ab | cd | ef | gh | ij | kl
//!
//! Piece 0:  ab cd ef               pos 0
//! Piece 1:     cd ef gh            pos 2
//! Piece 2:        ef gh ij         pos 4
//! Piece 3:           gh ij kl      pos 6
//! ```
//!
//! `n_chunks + 1 - overlap` pieces come out, numbered by `sid` (the index of
//! their first chunk). `pos` is where the content starts in the document,
//! counted in characters.
//!
//! ## Context
//!
//! A matched passage is often easier to use with a little of what surrounds
//! it. With `context = c` every piece also carries a `head` (up to `c` chunks
//! before its content) and a `tail` (its content plus up to `c` chunks after).
//!
//! ## Quick Start
//!
//! ```rust
//! use pieces::{cut_pieces, Segmenter, Unit};
//!
//! let text = "The quick brown fox jumps over the lazy dog.";
//!
//! // One-shot
//! for piece in cut_pieces(text, 12, 3, 1)? {
//!     println!("{} @{}: {:?}", piece.sid, piece.pos, piece.content);
//! }
//!
//! // Reusable, counting grapheme clusters instead of chars
//! let segmenter = Segmenter::new(12, 3)?.with_context(1).with_unit(Unit::Grapheme);
//! assert_eq!(segmenter.count(text), segmenter.cut(text).len());
//! # Ok::<(), pieces::Error>(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter | Meaning | Constraint |
//! |-----------|---------|------------|
//! | `length` | Target content length of a piece | > 0 |
//! | `overlap` | Chunks per piece (and pieces per chunk) | > 0, `overlap <= length` |
//! | `context` | Extra chunks of head/tail | any |
//!
//! Bad parameters are rejected when the [`Segmenter`] is built; cutting
//! itself never fails.
//!
//! ## Features
//!
//! - `serde`: serialize pieces, load [`SegmenterConfig`] from config files.
//! - `html`: extract and segment the text of HTML documents (see [`html`]).
//!
//! The crate logs through `tracing` at debug level and never installs a
//! subscriber.

mod config;
mod error;
mod piece;
mod segmenter;
mod slug;
mod unit;

#[cfg(feature = "html")]
pub mod html;

pub use config::SegmenterConfig;
pub use error::{Error, Result};
pub use piece::{Piece, PieceBuf};
pub use segmenter::{cut_pieces, Pieces, Segmenter};
pub use slug::idlize;
pub use unit::Unit;

#[cfg(feature = "html")]
pub use html::cut_pieces_html;
