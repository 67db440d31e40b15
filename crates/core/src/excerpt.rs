//! Plain-text previews of post content.

use crate::parse::{ParseOptions, parse_document};

/// Preview length used by the post listings.
pub const DEFAULT_EXCERPT_LENGTH: usize = 100;

/// Builds a plain-text preview of markdown content.
///
/// Markup is removed (link text kept, images dropped), whitespace runs collapse
/// to one space, and text longer than `max_chars` characters is cut and
/// suffixed with `...`.
///
/// # Examples
///
/// ```
/// use blogmd_core::excerpt;
///
/// assert_eq!(excerpt("# Title\n\nSome **bold** text", 100), "Title Some bold text");
/// assert_eq!(excerpt("abcdef", 3), "abc...");
/// ```
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    let document = parse_document(markdown, &ParseOptions::blog()).document;
    let text = document
        .plain_text()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text,
    }
}
