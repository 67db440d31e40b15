use blogmd_wasm::{convert, convert_detailed, excerpt, render_post, sorted_posts};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
struct ConvertResult {
    html: String,
    headings: Vec<HeadingEntry>,
    warnings: Vec<String>,
}

#[derive(Deserialize, Debug)]
struct HeadingEntry {
    depth: u8,
    slug: String,
    text: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PostSummary {
    id: String,
    category: String,
    reading_time: Option<u32>,
    preview: String,
}

#[derive(Deserialize, Debug)]
struct RenderedPost {
    id: String,
    title: String,
    html: String,
    headings: Vec<HeadingEntry>,
}

const FEED: &str = r##"{
  "posts": [
    { "id": 1, "title": "First", "date": "2023-05-01", "category": "cpp", "readingTime": 5,
      "content": "# Templates\n\nSome **bold** words." },
    { "id": "two", "title": "Second", "date": "2024-01-15",
      "content": "Plain text." }
  ]
}"##;

fn options(json: &str) -> JsValue {
    let value: serde_json::Value = serde_json::from_str(json).expect("valid options json");
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .expect("serialize options")
}

#[wasm_bindgen_test]
fn convert_with_default_options() {
    assert_eq!(convert("# Title", JsValue::UNDEFINED), "<h1>Title</h1>");
    assert_eq!(convert("", JsValue::NULL), "");
    assert_eq!(
        convert("- a\n- b", JsValue::UNDEFINED),
        "<ul><li>a</li><li>b</li></ul>"
    );
}

#[wasm_bindgen_test]
fn convert_reads_camel_case_options() {
    let html = convert(
        "1. one\n\n[x](/y)",
        options(r#"{ "distinguishOrderedLists": true, "openLinksInNewTab": false }"#),
    );
    assert_eq!(html, "<ol><li>one</li></ol>\n<p><a href=\"/y\">x</a></p>");
}

#[wasm_bindgen_test]
fn invalid_options_fall_back_to_defaults() {
    let html = convert("# Title", options(r#"{ "engine": "unknown" }"#));
    assert_eq!(html, "<h1>Title</h1>");
}

#[wasm_bindgen_test]
fn convert_detailed_reports_headings_and_warnings() {
    let result = convert_detailed(
        "## Setup\n\n```\nnever closed",
        options(r#"{ "headingIds": true }"#),
    )
    .expect("convert should succeed");
    let result: ConvertResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(result.html.starts_with(r#"<h2 id="setup">Setup</h2>"#));
    assert_eq!(result.headings.len(), 1);
    assert_eq!(result.headings[0].depth, 2);
    assert_eq!(result.headings[0].slug, "setup");
    assert_eq!(result.headings[0].text, "Setup");
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].starts_with("Unclosed code fence"));
}

#[wasm_bindgen_test]
fn excerpt_defaults_to_one_hundred_chars() {
    let long = "word ".repeat(50);
    let preview = excerpt(&long, None);
    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), 99 + 3);
    assert_eq!(excerpt("**short**", Some(10)), "short");
}

#[wasm_bindgen_test]
fn sorted_posts_lists_newest_first() {
    let posts = sorted_posts(FEED).expect("feed should parse");
    let posts: Vec<PostSummary> = serde_wasm_bindgen::from_value(posts).expect("deserialize posts");

    let ids: Vec<_> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["two", "1"]);
    assert_eq!(posts[0].category, "misc");
    assert_eq!(posts[1].reading_time, Some(5));
    assert_eq!(posts[1].preview, "Templates Some bold words.");
}

#[wasm_bindgen_test]
fn render_post_by_id() {
    let post = render_post(FEED, "1", JsValue::UNDEFINED).expect("post should render");
    let post: RenderedPost = serde_wasm_bindgen::from_value(post).expect("deserialize post");

    assert_eq!(post.id, "1");
    assert_eq!(post.title, "First");
    assert_eq!(
        post.html,
        "<h1>Templates</h1>\n<p>Some <strong>bold</strong> words.</p>"
    );
    assert_eq!(post.headings[0].slug, "templates");
}

#[wasm_bindgen_test]
fn render_post_rejects_unknown_ids_and_bad_feeds() {
    assert!(render_post(FEED, "missing", JsValue::UNDEFINED).is_err());
    assert!(sorted_posts("{ not json").is_err());
}
