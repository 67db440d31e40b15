//! Inline span parsing.
//!
//! Spans are matched left to right. At each position the candidates are tried
//! in a fixed order: code span, image, link, bold, italic. A delimiter that
//! cannot be closed on the same line stays literal text.

use crate::ast::Inline;

/// Line ends before which a delimiter kind is known to have no closer.
///
/// A failed closer search from one position fails from every later position
/// on the same line, so each line is searched at most once per kind.
#[derive(Default)]
struct Misses {
    code: usize,
    bracket: usize,
    strong_asterisk: usize,
    strong_underscore: usize,
}

/// Parses inline content of a single block.
pub fn parse_inlines(input: &str) -> Vec<Inline> {
    let bytes = input.as_bytes();
    let mut out = Vec::new();
    let mut misses = Misses::default();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match match_span(input, pos, &mut misses) {
            Some((inline, end)) => {
                push_text(&mut out, &input[text_start..pos]);
                out.push(inline);
                pos = end;
                text_start = end;
            }
            // Delimiters are ASCII, so stepping by byte never splits a slice boundary.
            None => pos += 1,
        }
    }
    push_text(&mut out, &input[text_start..]);
    out
}

fn push_text(out: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(Inline::Text(text.to_string()));
    }
}

/// Tries every span kind at `pos`, returning the span and the byte offset after it.
fn match_span(input: &str, pos: usize, misses: &mut Misses) -> Option<(Inline, usize)> {
    match input.as_bytes()[pos] {
        b'`' => code_span(input, pos, &mut misses.code),
        b'!' => image(input, pos, &mut misses.bracket),
        b'[' => link(input, pos, &mut misses.bracket),
        b'*' => strong(input, pos, b'*', &mut misses.strong_asterisk)
            .or_else(|| emphasis(input, pos, b'*')),
        b'_' => strong(input, pos, b'_', &mut misses.strong_underscore)
            .or_else(|| emphasis(input, pos, b'_')),
        _ => None,
    }
}

/// Rest of the current line starting at `from`.
fn line_from(input: &str, from: usize) -> &str {
    let rest = &input[from..];
    match rest.find('\n') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Finds `pattern` in `s`, skipping the first character so the span before it is non-empty.
fn find_after_first(s: &str, pattern: &str) -> Option<usize> {
    let first = s.chars().next()?.len_utf8();
    s[first..].find(pattern).map(|idx| idx + first)
}

fn code_span(input: &str, pos: usize, miss: &mut usize) -> Option<(Inline, usize)> {
    if pos < *miss {
        return None;
    }
    let start = pos + 1;
    let line = line_from(input, start);
    let Some(close) = line.find('`') else {
        *miss = start + line.len();
        return None;
    };
    if close == 0 {
        return None;
    }
    Some((Inline::Code(line[..close].to_string()), start + close + 1))
}

/// Matches `[text](target)` at `pos`, returning text, target and end offset.
fn bracket_target<'a>(
    input: &'a str,
    pos: usize,
    miss: &mut usize,
) -> Option<(&'a str, &'a str, usize)> {
    if input.as_bytes().get(pos) != Some(&b'[') || pos < *miss {
        return None;
    }
    let start = pos + 1;
    let line = line_from(input, start);
    let found = find_after_first(line, "](").and_then(|mid| {
        let after = &line[mid + 2..];
        find_after_first(after, ")").map(|close| (mid, close))
    });
    let Some((mid, close)) = found else {
        *miss = start + line.len();
        return None;
    };
    let text = &line[..mid];
    let target = &line[mid + 2..mid + 2 + close];
    Some((text, target, start + mid + 2 + close + 1))
}

fn image(input: &str, pos: usize, miss: &mut usize) -> Option<(Inline, usize)> {
    let (alt, src, end) = bracket_target(input, pos + 1, miss)?;
    Some((
        Inline::Image {
            src: src.to_string(),
            alt: alt.to_string(),
        },
        end,
    ))
}

fn link(input: &str, pos: usize, miss: &mut usize) -> Option<(Inline, usize)> {
    let (text, href, end) = bracket_target(input, pos, miss)?;
    Some((
        Inline::Link {
            href: href.to_string(),
            children: parse_inlines(text),
        },
        end,
    ))
}

fn strong(input: &str, pos: usize, marker: u8, miss: &mut usize) -> Option<(Inline, usize)> {
    let bytes = input.as_bytes();
    if bytes.get(pos + 1) != Some(&marker) || pos < *miss {
        return None;
    }
    let start = pos + 2;
    let line = line_from(input, start);
    let delimiter = if marker == b'*' { "**" } else { "__" };
    let Some(close) = find_after_first(line, delimiter) else {
        *miss = start + line.len();
        return None;
    };
    Some((
        Inline::Strong(parse_inlines(&line[..close])),
        start + close + 2,
    ))
}

fn emphasis(input: &str, pos: usize, marker: u8) -> Option<(Inline, usize)> {
    let start = pos + 1;
    let line = line_from(input, start).as_bytes();
    let mut i = 1;
    while i < line.len() {
        if line[i] == marker {
            if line.get(i + 1) == Some(&marker) {
                // A doubled marker belongs to a nested strong span.
                i += 2;
                continue;
            }
            let content = &input[start..start + i];
            return Some((Inline::Emphasis(parse_inlines(content)), start + i + 1));
        }
        i += 1;
    }
    None
}
