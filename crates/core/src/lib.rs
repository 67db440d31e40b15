#![deny(missing_docs)]
//! blogmd core: typed markdown document model, parsing, slugs, excerpts and the post feed.

/// Typed document model.
pub mod ast;
/// Line classification and block assembly.
pub mod block;
/// Code fence detection utilities.
pub mod code_fence;
/// Core error and diagnostic types.
pub mod error;
/// Plain-text previews.
pub mod excerpt;
/// Inline span parsing.
pub mod inline;
/// Document parsing entry points.
pub mod parse;
/// Post feed model.
pub mod posts;
/// Slug generation utilities.
pub mod slug;

pub use ast::{Block, BlockKind, Document, Inline, ListItem, inline_text};
pub use error::{BlogmdError, ParseDiagnostics, ParseWarning, SourceLocation};
pub use excerpt::{DEFAULT_EXCERPT_LENGTH, excerpt};
pub use parse::{ParseOptions, ParseOutput, parse_document};
pub use posts::{ArchiveYear, DEFAULT_CATEGORY, Post, PostFeed};
pub use slug::{Slugger, slugify};
