#![deny(missing_docs)]
//! blogmd HTML engine: markdown to HTML fragments for the blog pages.
//!
//! Two engines produce the same constructs:
//!
//! - [`Engine::Parsed`] parses into typed blocks and inlines, then renders once.
//! - [`Engine::Cascade`] applies the ordered regex rules in [`cascade`].

/// Ordered regex rule cascade.
pub mod cascade;
/// Render output buffer and heading state.
pub mod context;
/// Conversion options.
pub mod options;
/// HTML rendering of parsed documents.
pub mod render;

pub use context::{Context, HeadingEntry};
pub use options::{DEFAULT_IMAGE_CLASS, Engine, Options};

use blogmd_core::{ParseDiagnostics, parse_document};
use render::render_document;

/// Result of a detailed conversion.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// HTML fragment.
    pub html: String,
    /// Headings in document order. Empty for the cascade engine.
    pub headings: Vec<HeadingEntry>,
    /// Recoverable oddities found in the input. Empty for the cascade engine.
    pub diagnostics: ParseDiagnostics,
}

/// Reusable converter holding a set of options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    /// Creates a converter with the given options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Options this converter was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Converts markdown to an HTML fragment.
    pub fn convert(&self, markdown: &str) -> String {
        self.convert_detailed(markdown).html
    }

    /// Converts markdown, also returning headings and diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use blogmd_html::{Converter, Options};
    ///
    /// let converter = Converter::new(Options::default());
    /// let result = converter.convert_detailed("## Setup\n\n```\nnever closed");
    /// assert_eq!(result.headings[0].slug, "setup");
    /// assert_eq!(result.diagnostics.count(), 1);
    /// ```
    pub fn convert_detailed(&self, markdown: &str) -> Conversion {
        log::debug!(
            "Converting {} bytes with the {:?} engine",
            markdown.len(),
            self.options.engine
        );

        match self.options.engine {
            Engine::Cascade => Conversion {
                html: cascade::convert(markdown),
                ..Conversion::default()
            },
            Engine::Parsed => {
                let parsed = parse_document(markdown, &self.options.parse_options());
                for warning in &parsed.diagnostics.warnings {
                    log::warn!("{}", warning);
                }

                let mut ctx = Context::new(&self.options);
                render_document(&parsed.document, &mut ctx);
                let (html, headings) = ctx.finish();

                Conversion {
                    html,
                    headings,
                    diagnostics: parsed.diagnostics,
                }
            }
        }
    }
}

/// Converts markdown to HTML with the default options.
///
/// # Examples
///
/// ```
/// assert_eq!(blogmd_html::convert("# Title"), "<h1>Title</h1>");
/// assert_eq!(blogmd_html::convert(""), "");
/// ```
pub fn convert(markdown: &str) -> String {
    Converter::default().convert(markdown)
}

/// Converts markdown to HTML with the given options.
pub fn convert_with_options(markdown: &str, options: &Options) -> String {
    match options.engine {
        Engine::Cascade => cascade::convert(markdown),
        Engine::Parsed => Converter::new(options.clone()).convert(markdown),
    }
}
