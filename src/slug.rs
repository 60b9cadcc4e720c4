//! Identifier-safe slugs.

/// Normalize `text` into an identifier-safe token.
///
/// Lowercases and trims, turns spaces into `_` and periods into `-`, then
/// drops everything outside `[a-z0-9-_]`.
///
/// ```rust
/// use pieces::idlize;
///
/// assert_eq!(idlize("Hello World.Test"), "hello_world-test");
/// assert_eq!(idlize(" A!B@C "), "abc");
/// ```
#[must_use]
pub fn idlize(text: &str) -> String {
    text.to_lowercase()
        .trim()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('_'),
            '.' => Some('-'),
            'a'..='z' | '0'..='9' | '-' | '_' => Some(c),
            _ => None,
        })
        .collect()
}
