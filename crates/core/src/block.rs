//! Line classification and block assembly.

use crate::ast::{Block, BlockKind, Document, ListItem};
use crate::code_fence::{FenceOpen, detect_fence_open, is_closing_fence};
use crate::error::{ParseDiagnostics, ParseWarning, SourceLocation};
use crate::inline::parse_inlines;
use crate::parse::ParseOptions;

/// A source line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// Opening code fence.
    Fence(FenceOpen<'a>),
    /// `#` heading with its text.
    Heading {
        /// Number of `#` markers.
        level: u8,
        /// Heading text without markers.
        text: &'a str,
    },
    /// `---`, `___` or `***`.
    ThematicBreak,
    /// `>` quote with its text.
    Quote(&'a str),
    /// List item with its text.
    Item {
        /// Whether the marker was `N.`.
        ordered: bool,
        /// Item text without the marker.
        text: &'a str,
    },
    /// Anything else.
    Text(&'a str),
}

impl Line<'_> {
    /// Block kind this line starts or continues, `None` for blank lines.
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            Line::Blank => None,
            Line::Fence(_) => Some(BlockKind::CodeBlock),
            Line::Heading { .. } => Some(BlockKind::Heading),
            Line::ThematicBreak => Some(BlockKind::ThematicBreak),
            Line::Quote(_) => Some(BlockKind::BlockQuote),
            Line::Item { .. } => Some(BlockKind::List),
            Line::Text(_) => Some(BlockKind::Paragraph),
        }
    }
}

/// Classifies a single source line.
pub fn classify(line: &str) -> Line<'_> {
    if line.trim().is_empty() {
        return Line::Blank;
    }
    if let Some(open) = detect_fence_open(line) {
        return Line::Fence(open);
    }
    if let Some((level, text)) = heading(line) {
        return Line::Heading { level, text };
    }
    if matches!(line.trim_end(), "---" | "___" | "***") {
        return Line::ThematicBreak;
    }
    if let Some(text) = marker_text(line, ">") {
        return Line::Quote(text);
    }
    if let Some(text) = marker_text(line, "-").or_else(|| marker_text(line, "*")) {
        return Line::Item {
            ordered: false,
            text,
        };
    }
    if let Some(text) = ordered_item(line) {
        return Line::Item {
            ordered: true,
            text,
        };
    }
    Line::Text(line)
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let text = marker_text(line, &line[..level])?;
    // `level` is at most 6, so the cast cannot truncate.
    Some((level as u8, text))
}

/// Text after `marker` when the marker is followed by whitespace and non-empty text.
fn marker_text<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

fn ordered_item(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    marker_text(&line[digits..], ".")
}

/// Assembles classified lines into blocks.
pub fn parse_blocks(
    input: &str,
    options: &ParseOptions,
    diagnostics: &mut ParseDiagnostics,
) -> Document {
    let lines: Vec<&str> = input.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        match classify(lines[i]) {
            Line::Blank => i += 1,
            Line::Fence(FenceOpen::SingleLine(code)) => {
                blocks.push(Block::CodeBlock {
                    info: None,
                    code: code.to_string(),
                });
                i += 1;
            }
            Line::Fence(FenceOpen::Block { length, info }) => {
                match (i + 1..lines.len()).find(|&j| is_closing_fence(lines[j], length)) {
                    Some(close) => {
                        blocks.push(Block::CodeBlock {
                            info: info.map(str::to_string),
                            code: lines[i + 1..close].join("\n"),
                        });
                        i = close + 1;
                    }
                    None => {
                        let column = lines[i].len() - lines[i].trim_start().len() + 1;
                        diagnostics.add_warning(ParseWarning::UnclosedCodeFence {
                            location: SourceLocation::new(i + 1, column),
                            context: lines[i].trim().to_string(),
                        });
                        i = paragraph(&lines, i, &mut blocks, diagnostics);
                    }
                }
            }
            Line::Heading { level, text } => {
                blocks.push(Block::Heading {
                    level,
                    content: parse_inlines(text),
                });
                i += 1;
            }
            Line::ThematicBreak => {
                blocks.push(Block::ThematicBreak);
                i += 1;
            }
            Line::Quote(text) => {
                blocks.push(Block::BlockQuote(parse_inlines(text)));
                i += 1;
            }
            Line::Item { ordered, .. } => {
                i = list(&lines, i, ordered, options, &mut blocks);
            }
            Line::Text(_) => i = paragraph(&lines, i, &mut blocks, diagnostics),
        }
    }

    Document { blocks }
}

/// Collects the paragraph starting at `start`, returning the index after it.
fn paragraph(
    lines: &[&str],
    start: usize,
    blocks: &mut Vec<Block>,
    diagnostics: &mut ParseDiagnostics,
) -> usize {
    let mut end = start + 1;
    while end < lines.len() && matches!(classify(lines[end]), Line::Text(_)) {
        end += 1;
    }
    for (offset, line) in lines[start..end].iter().enumerate() {
        if missing_heading_space(line) {
            diagnostics.add_warning_at("heading marker without a space", start + offset + 1, 1);
        }
    }
    // Lines are kept verbatim, whitespace included.
    let text = lines[start..end].join("\n");
    blocks.push(Block::Paragraph(parse_inlines(&text)));
    end
}

/// `#Title`: a heading marker glued to its text renders as a paragraph.
fn missing_heading_space(line: &str) -> bool {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    (1..=6).contains(&level) && line[level..].starts_with(|c: char| !c.is_whitespace())
}

/// Collects the list starting at `start`, returning the index after it.
///
/// Blank lines between items do not end the list.
fn list(
    lines: &[&str],
    start: usize,
    first_ordered: bool,
    options: &ParseOptions,
    blocks: &mut Vec<Block>,
) -> usize {
    let accepts = |ordered: bool| !options.distinguish_ordered_lists || ordered == first_ordered;
    let mut items = Vec::new();
    let mut i = start;

    while i < lines.len() {
        match classify(lines[i]) {
            Line::Item { ordered, text } if accepts(ordered) => {
                items.push(ListItem {
                    ordered,
                    content: parse_inlines(text),
                });
                i += 1;
            }
            Line::Blank => {
                let next = (i + 1..lines.len()).find(|&j| classify(lines[j]) != Line::Blank);
                match next.map(|j| (j, classify(lines[j]))) {
                    Some((j, Line::Item { ordered, .. })) if accepts(ordered) => i = j,
                    _ => break,
                }
            }
            _ => break,
        }
    }

    blocks.push(Block::List {
        ordered: options.distinguish_ordered_lists && first_ordered,
        items,
    });
    i
}
