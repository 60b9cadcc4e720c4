//! Segmenting HTML documents.
//!
//! The markup is parsed with `scraper` and reduced to its text nodes in
//! document order. Nothing is inserted between nodes, so positions in the
//! extracted text match a reader's view of the page with tags deleted.
//! Contents of non-rendered elements (`script`, `style`, `noscript`,
//! `template`) are dropped.

use scraper::node::Node;
use scraper::Html;

use crate::{PieceBuf, Result, Segmenter};

const SKIPPED: &[&str] = &["script", "style", "noscript", "template"];

/// Concatenated text content of an HTML document.
///
/// ```rust
/// use pieces::html::extract_text;
///
/// let text = extract_text("<p>Hello, <b>world</b></p><script>track()</script>");
/// assert_eq!(text, "Hello, world");
/// ```
#[must_use]
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut text = String::with_capacity(html.len() / 2);

    for node in document.root_element().descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(el) if SKIPPED.contains(&el.name()))
        });
        if !hidden {
            text.push_str(fragment);
        }
    }

    tracing::debug!(html_bytes = html.len(), text_bytes = text.len(), "extracted html text");
    text
}

impl Segmenter {
    /// Cut the text content of an HTML document into owned pieces.
    ///
    /// Positions refer to the extracted text (see [`extract_text`]).
    pub fn cut_html(&self, html: &str) -> Vec<PieceBuf> {
        let text = extract_text(html);
        self.cut(&text).map(PieceBuf::from).collect()
    }
}

/// [`cut_pieces`](crate::cut_pieces) for HTML input.
///
/// # Errors
///
/// See [`Segmenter::new`].
pub fn cut_pieces_html(
    html: &str,
    length: usize,
    overlap: usize,
    context: usize,
) -> Result<Vec<PieceBuf>> {
    Ok(Segmenter::new(length, overlap)?
        .with_context(context)
        .cut_html(html))
}
