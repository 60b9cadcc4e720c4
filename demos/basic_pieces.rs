//! Basic Piece Cutting
//!
//! Cut a document into overlapping pieces with a little context each.
//!
//! ```bash
//! cargo run --example basic_pieces
//! ```

use pieces::{idlize, Segmenter};

fn main() -> Result<(), pieces::Error> {
    let title = "Machine Learning. A Primer";
    let document = "Machine learning models learn patterns from data. \
        They generalize these patterns to make predictions. \
        This is fundamentally different from traditional programming.";

    // 60-char pieces built from 3 chunks of 20, one chunk of context each side
    let segmenter = Segmenter::new(60, 3)?.with_context(1);
    let id = idlize(title);

    println!("Document {id}: {} chars", document.chars().count());
    println!("Pieces: {}\n", segmenter.count(document));

    for piece in segmenter.cut(document) {
        println!("[{id}/{}] @{}: {:?}", piece.sid, piece.pos, piece.content);
        println!("    head: {:?}", piece.head);
        println!("    tail: {:?}", piece.tail);
    }

    Ok(())
}
