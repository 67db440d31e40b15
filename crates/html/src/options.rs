//! Conversion options.

use serde::{Deserialize, Serialize};

/// Image class the blog stylesheet targets.
pub const DEFAULT_IMAGE_CLASS: &str = "post-image";

/// Which conversion engine runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Block-then-inline parser with a single render pass.
    #[default]
    Parsed,
    /// Ordered regex substitutions followed by a cleanup pass.
    Cascade,
}

/// Rendering options.
///
/// The rule cascade has a fixed rule table and only honors `engine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Conversion engine.
    pub engine: Engine,
    /// Whether text passes through unescaped, so authors can embed HTML.
    #[serde(alias = "rawHtml")]
    pub raw_html: bool,
    /// Render `N.` lists as `<ol>` instead of folding them into `<ul>`.
    #[serde(alias = "distinguishOrderedLists")]
    pub distinguish_ordered_lists: bool,
    /// Emit `id` attributes on headings.
    #[serde(alias = "headingIds")]
    pub heading_ids: bool,
    /// Class attribute for images; `None` omits it.
    #[serde(alias = "imageClass")]
    pub image_class: Option<String>,
    /// Add `target="_blank"` to links.
    #[serde(alias = "openLinksInNewTab")]
    pub open_links_in_new_tab: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            engine: Engine::Parsed,
            raw_html: true,
            distinguish_ordered_lists: false,
            heading_ids: false,
            image_class: Some(DEFAULT_IMAGE_CLASS.to_string()),
            open_links_in_new_tab: true,
        }
    }
}

impl Options {
    /// Parser options derived from these rendering options.
    pub fn parse_options(&self) -> blogmd_core::ParseOptions {
        blogmd_core::ParseOptions {
            distinguish_ordered_lists: self.distinguish_ordered_lists,
        }
    }
}
