//! Document parsing entry points.

use crate::ast::Document;
use crate::block::parse_blocks;
use crate::error::ParseDiagnostics;

/// Parser options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep `N.` items apart from `-`/`*` items and mark their lists as ordered.
    ///
    /// Off by default: every list is unordered, which is what the blog has always rendered.
    pub distinguish_ordered_lists: bool,
}

impl ParseOptions {
    /// Defaults matching the blog's historical output.
    pub const fn blog() -> Self {
        Self {
            distinguish_ordered_lists: false,
        }
    }
}

/// A parsed document together with the diagnostics collected on the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    /// Parsed blocks.
    pub document: Document,
    /// Recoverable oddities found in the input.
    pub diagnostics: ParseDiagnostics,
}

/// Parses markdown into a typed document.
///
/// Never fails: unrecognized constructs become paragraph text.
///
/// # Examples
///
/// ```
/// use blogmd_core::{Block, ParseOptions, parse_document};
///
/// let output = parse_document("# Hello\n\nWorld", &ParseOptions::blog());
/// assert_eq!(output.document.blocks.len(), 2);
/// assert!(matches!(output.document.blocks[0], Block::Heading { level: 1, .. }));
/// ```
pub fn parse_document(input: &str, options: &ParseOptions) -> ParseOutput {
    let mut diagnostics = ParseDiagnostics::new();
    let document = parse_blocks(input, options, &mut diagnostics);
    ParseOutput {
        document,
        diagnostics,
    }
}
