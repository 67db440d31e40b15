use blogmd_core::{BlogmdError, DEFAULT_EXCERPT_LENGTH, Post, PostFeed};
use blogmd_html::{Converter, HeadingEntry, Options};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Options
// ============================================================================

/// Reads an options object, falling back to defaults when it is missing or invalid.
fn parse_options(options: JsValue) -> Options {
    if options.is_undefined() || options.is_null() {
        return Options::default();
    }
    serde_wasm_bindgen::from_value(options).unwrap_or_default()
}

/// Serializes to plain JS objects, so flattened structs do not become `Map`s.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn load_feed(feed_json: &str) -> Result<PostFeed, JsError> {
    PostFeed::from_json(feed_json).map_err(|e: BlogmdError| JsError::new(&e.to_string()))
}

// ============================================================================
// Conversion API
// ============================================================================

/// Result of `convert_detailed`.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertResult {
    /// HTML fragment.
    pub html: String,
    /// Headings in document order.
    pub headings: Vec<HeadingEntry>,
    /// Human-readable diagnostics.
    pub warnings: Vec<String>,
}

/// Converts markdown to an HTML fragment.
#[wasm_bindgen]
pub fn convert(markdown: &str, options: JsValue) -> String {
    Converter::new(parse_options(options)).convert(markdown)
}

/// Converts markdown and reports headings and warnings alongside the HTML.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { html, headings, warnings } = convert_detailed("## Setup", { headingIds: true });
/// // html = '<h2 id="setup">Setup</h2>'
/// ```
#[wasm_bindgen]
pub fn convert_detailed(markdown: &str, options: JsValue) -> Result<JsValue, JsError> {
    let conversion = Converter::new(parse_options(options)).convert_detailed(markdown);
    to_js(&ConvertResult {
        html: conversion.html,
        headings: conversion.headings,
        warnings: conversion
            .diagnostics
            .warnings
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

/// Plain-text preview of markdown, `length` characters long (100 by default).
#[wasm_bindgen]
pub fn excerpt(markdown: &str, length: Option<u32>) -> String {
    let length = length.map_or(DEFAULT_EXCERPT_LENGTH, |n| n as usize);
    blogmd_core::excerpt(markdown, length)
}

// ============================================================================
// Post API
// ============================================================================

/// Listing entry for one post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary<'a> {
    /// Post id.
    pub id: &'a str,
    /// Post title.
    pub title: &'a str,
    /// Publication date.
    pub date: &'a str,
    /// Category, `misc` when the post has none.
    pub category: &'a str,
    /// Free-form tags.
    pub tags: &'a [String],
    /// Estimated reading time in minutes.
    pub reading_time: Option<u32>,
    /// View counter.
    pub views: u64,
    /// Plain-text preview of the content.
    pub preview: String,
}

impl<'a> From<&'a Post> for PostSummary<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            id: &post.id,
            title: &post.title,
            date: &post.date,
            category: post.category_or_default(),
            tags: &post.tags,
            reading_time: post.reading_time,
            views: post.views,
            preview: post.preview(DEFAULT_EXCERPT_LENGTH),
        }
    }
}

/// A post rendered for its page.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPost<'a> {
    /// Post metadata.
    #[serde(flatten)]
    pub summary: PostSummary<'a>,
    /// Rendered content.
    pub html: String,
    /// Headings of the content.
    pub headings: Vec<HeadingEntry>,
}

/// Lists the posts of a `{ "posts": [...] }` feed, newest first.
#[wasm_bindgen]
pub fn sorted_posts(feed_json: &str) -> Result<JsValue, JsError> {
    let feed = load_feed(feed_json)?;
    let summaries: Vec<PostSummary<'_>> = feed
        .sorted_by_date()
        .into_iter()
        .map(PostSummary::from)
        .collect();
    to_js(&summaries)
}

/// Renders one post of a feed by id.
#[wasm_bindgen]
pub fn render_post(feed_json: &str, id: &str, options: JsValue) -> Result<JsValue, JsError> {
    let feed = load_feed(feed_json)?;
    let post = feed.get(id).map_err(|e| JsError::new(&e.to_string()))?;
    let conversion = Converter::new(parse_options(options)).convert_detailed(&post.content);

    to_js(&RenderedPost {
        summary: PostSummary::from(post),
        html: conversion.html,
        headings: conversion.headings,
    })
}
