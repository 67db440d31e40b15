use blogmd_core::ParseWarning;
use blogmd_html::{Converter, Engine, Options, convert, convert_with_options};
use insta::assert_snapshot;

fn cascade() -> Options {
    Options {
        engine: Engine::Cascade,
        ..Options::default()
    }
}

#[test]
fn plain_text_is_one_paragraph() {
    assert_snapshot!(convert("hello world"), @"<p>hello world</p>");
}

#[test]
fn heading_is_not_wrapped() {
    assert_snapshot!(convert("# Title"), @"<h1>Title</h1>");
    assert_snapshot!(convert("### Third"), @"<h3>Third</h3>");
}

#[test]
fn bold_and_italic_do_not_nest() {
    assert_snapshot!(
        convert("**bold** and *italic*"),
        @"<p><strong>bold</strong> and <em>italic</em></p>"
    );
}

#[test]
fn adjacent_items_form_one_list() {
    assert_snapshot!(
        convert("- a\n- b\n- c"),
        @"<ul><li>a</li><li>b</li><li>c</li></ul>"
    );
}

#[test]
fn fenced_block_has_no_paragraph_inside() {
    let html = convert("```\ncode line\n```");
    assert_snapshot!(html, @"<pre><code>code line</code></pre>");
    assert!(!html.contains("<p>"));
}

#[test]
fn image_is_not_a_link() {
    let html = convert("![alt](img.png)");
    assert_snapshot!(html, @r#"<p><img src="img.png" alt="alt" class="post-image"></p>"#);
    assert!(!html.contains("<a"));
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("\n\n  \n"), "");
    assert_eq!(convert_with_options("", &cascade()), "");
}

#[test]
fn full_post() {
    let markdown = "# Post\n\nIntro with [link](https://x.dev).\n\n---\n\n> quote";
    assert_eq!(
        convert(markdown),
        "<h1>Post</h1>\n\
         <p>Intro with <a href=\"https://x.dev\" target=\"_blank\" rel=\"noopener noreferrer\">link</a>.</p>\n\
         <hr>\n\
         <blockquote>quote</blockquote>"
    );
}

#[test]
fn code_block_content_is_literal() {
    let html = convert("```cpp\nif (a < b && *p) {}\n```");
    assert_snapshot!(
        html,
        @r#"<pre><code class="language-cpp">if (a &lt; b &amp;&amp; *p) {}</code></pre>"#
    );
}

#[test]
fn raw_html_passes_through_by_default() {
    assert_snapshot!(convert("a <kbd>Ctrl</kbd> key"), @"<p>a <kbd>Ctrl</kbd> key</p>");

    let options = Options {
        raw_html: false,
        ..Options::default()
    };
    assert_snapshot!(
        convert_with_options("a <kbd>Ctrl</kbd> key", &options),
        @"<p>a &lt;kbd&gt;Ctrl&lt;/kbd&gt; key</p>"
    );
}

#[test]
fn ordered_lists_are_opt_in() {
    assert_snapshot!(convert("1. one\n2. two"), @"<ul><li>one</li><li>two</li></ul>");

    let options = Options {
        distinguish_ordered_lists: true,
        ..Options::default()
    };
    assert_snapshot!(
        convert_with_options("1. one\n2. two", &options),
        @"<ol><li>one</li><li>two</li></ol>"
    );
}

#[test]
fn heading_ids_and_outline() {
    let converter = Converter::new(Options {
        heading_ids: true,
        ..Options::default()
    });
    let result = converter.convert_detailed("## 安装指南\n\ntext\n\n## 安装指南");
    assert_eq!(
        result.html,
        "<h2 id=\"安装指南\">安装指南</h2>\n<p>text</p>\n<h2 id=\"安装指南-1\">安装指南</h2>"
    );
    let slugs: Vec<_> = result.headings.iter().map(|h| h.slug.as_str()).collect();
    assert_eq!(slugs, ["安装指南", "安装指南-1"]);
    assert!(!result.diagnostics.has_warnings());
}

#[test]
fn heading_ids_never_repeat() {
    let converter = Converter::new(Options {
        heading_ids: true,
        ..Options::default()
    });
    let result = converter.convert_detailed("## A\n\n## A\n\n## A 1");
    let slugs: Vec<_> = result.headings.iter().map(|h| h.slug.as_str()).collect();
    assert_eq!(slugs, ["a", "a-1", "a-1-1"]);
    assert_eq!(result.html.matches(r#"id="a-1""#).count(), 1);
}

#[test]
fn unclosed_fence_is_reported() {
    let result = Converter::default().convert_detailed("intro\n\n```rust\nlet x = 1;");
    assert_eq!(result.html, "<p>intro</p>\n<p>```rust\nlet x = 1;</p>");
    assert!(matches!(
        result.diagnostics.warnings.as_slice(),
        [ParseWarning::UnclosedCodeFence { .. }]
    ));
}

#[test]
fn cascade_engine_keeps_rule_order() {
    let options = cascade();
    assert_snapshot!(convert_with_options("# Title", &options), @"<h1>Title</h1>");
    assert_snapshot!(
        convert_with_options("**bold** and *italic*", &options),
        @"<p><strong>bold</strong> and <em>italic</em></p>"
    );
    assert_snapshot!(
        convert_with_options("[blog](https://example.com)", &options),
        @r#"<p><a href="https://example.com" target="_blank">blog</a></p>"#
    );
}

#[test]
fn cascade_reports_no_outline() {
    let result = Converter::new(cascade()).convert_detailed("## Heading");
    assert_eq!(result.html, "<h2>Heading</h2>");
    assert!(result.headings.is_empty());
    assert!(!result.diagnostics.has_warnings());
}

#[test]
fn engines_agree_on_simple_constructs() {
    for markdown in ["# Title", "hello world", "**bold**", "---", "> quote"] {
        assert_eq!(
            convert(markdown),
            convert_with_options(markdown, &cascade()),
            "engines differ on {:?}",
            markdown
        );
    }
}
