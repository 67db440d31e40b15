//! Triple-backtick fence detection.
//!
//! Only backtick fences are recognized. An opening fence may carry an info
//! string (`` ```rust ``) or close on the same line (`` ```code``` ``).

/// What an opening fence line looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenceOpen<'a> {
    /// Fence continues on following lines.
    Block {
        /// Number of backticks in the opener.
        length: usize,
        /// Trimmed info string, if any.
        info: Option<&'a str>,
    },
    /// Opener and closer on one line; holds the content between them.
    SingleLine(&'a str),
}

/// Detects an opening fence at the start of a line.
///
/// Up to three leading spaces are allowed.
pub fn detect_fence_open(line: &str) -> Option<FenceOpen<'_>> {
    let after_indent = strip_indent(line)?;
    let length = after_indent.bytes().take_while(|b| *b == b'`').count();
    if length < 3 {
        return None;
    }
    let rest = &after_indent[length..];

    if let Some(close) = rest.find("```") {
        let content = &rest[..close];
        let trailing = rest[close..].trim_start_matches('`');
        if !content.is_empty() && trailing.trim().is_empty() {
            return Some(FenceOpen::SingleLine(content));
        }
    }

    // Backticks in an info string would make the line ambiguous with a code span.
    if rest.contains('`') {
        return None;
    }
    let info = rest.trim();
    Some(FenceOpen::Block {
        length,
        info: (!info.is_empty()).then_some(info),
    })
}

/// Returns true if the line closes a fence opened with `length` backticks.
///
/// A closer has at least as many backticks as the opener and nothing but whitespace after them.
pub fn is_closing_fence(line: &str, length: usize) -> bool {
    let Some(after_indent) = strip_indent(line) else {
        return false;
    };
    let count = after_indent.bytes().take_while(|b| *b == b'`').count();
    count >= 3 && count >= length && after_indent[count..].trim().is_empty()
}

fn strip_indent(line: &str) -> Option<&str> {
    let spaces = line.bytes().take_while(|b| *b == b' ').count();
    if spaces > 3 {
        return None;
    }
    Some(&line[spaces..])
}
