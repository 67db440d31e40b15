//! Output buffer and per-document state for the render pass.

use crate::Options;
use blogmd_core::Slugger;
use serde::Serialize;

/// Heading metadata extracted during rendering.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Heading depth (1-6).
    pub depth: u8,
    /// Unique slug for the heading.
    pub slug: String,
    /// Visible heading text.
    pub text: String,
}

/// Tracks the output buffer and heading state while rendering one document.
pub struct Context<'a> {
    html: String,
    headings: Vec<HeadingEntry>,
    slugger: Slugger,
    options: &'a Options,
}

impl<'a> Context<'a> {
    /// Creates an empty context.
    pub fn new(options: &'a Options) -> Self {
        Self {
            html: String::with_capacity(4096),
            headings: Vec::new(),
            slugger: Slugger::new(),
            options,
        }
    }

    /// Rendering options in effect.
    pub fn options(&self) -> &'a Options {
        self.options
    }

    /// Writes markup without escaping.
    pub fn push_raw(&mut self, s: &str) {
        self.html.push_str(s);
    }

    /// Writes author text, escaped unless raw HTML is allowed.
    pub fn push_text(&mut self, s: &str) {
        if self.options.raw_html {
            self.html.push_str(s);
        } else {
            if s.contains('<') {
                log::debug!("Escaping raw HTML in text: {}", s);
            }
            self.html.push_str(&html_escape::encode_text(s));
        }
    }

    /// Writes code content; always escaped so it displays literally.
    pub fn push_code_text(&mut self, s: &str) {
        self.html.push_str(&html_escape::encode_text(s));
    }

    /// Writes a double-quoted attribute value.
    pub fn push_attr_value(&mut self, s: &str) {
        self.html
            .push_str(&html_escape::encode_double_quoted_attribute(s));
    }

    /// Records a heading and returns its unique slug.
    pub fn add_heading(&mut self, depth: u8, text: String) -> String {
        let slug = self.slugger.next_slug(&text);
        self.headings.push(HeadingEntry {
            depth,
            slug: slug.clone(),
            text,
        });
        slug
    }

    /// Consumes the context, returning the HTML and collected headings.
    pub fn finish(self) -> (String, Vec<HeadingEntry>) {
        (self.html, self.headings)
    }
}
