//! Single-pass HTML rendering of a parsed document.

use crate::context::Context;
use blogmd_core::{Block, Document, Inline, ListItem, inline_text};

/// Renders every block, separating blocks with a newline.
pub fn render_document(document: &Document, ctx: &mut Context) {
    for (index, block) in document.blocks.iter().enumerate() {
        if index > 0 {
            ctx.push_raw("\n");
        }
        render_block(block, ctx);
    }
}

/// Renders one block element.
pub fn render_block(block: &Block, ctx: &mut Context) {
    match block {
        Block::Heading { level, content } => render_heading(*level, content, ctx),
        Block::Paragraph(content) => {
            ctx.push_raw("<p>");
            render_inlines(content, ctx);
            ctx.push_raw("</p>");
        }
        Block::BlockQuote(content) => {
            ctx.push_raw("<blockquote>");
            render_inlines(content, ctx);
            ctx.push_raw("</blockquote>");
        }
        Block::List { ordered, items } => render_list(*ordered, items, ctx),
        Block::CodeBlock { info, code } => {
            match info {
                Some(lang) => {
                    ctx.push_raw("<pre><code class=\"language-");
                    ctx.push_attr_value(lang);
                    ctx.push_raw("\">");
                }
                None => ctx.push_raw("<pre><code>"),
            }
            ctx.push_code_text(code);
            ctx.push_raw("</code></pre>");
        }
        Block::ThematicBreak => ctx.push_raw("<hr>"),
    }
}

fn render_heading(level: u8, content: &[Inline], ctx: &mut Context) {
    let slug = ctx.add_heading(level, inline_text(content));
    let tag = format!("h{}", level);

    ctx.push_raw("<");
    ctx.push_raw(&tag);
    if ctx.options().heading_ids {
        ctx.push_raw(" id=\"");
        ctx.push_attr_value(&slug);
        ctx.push_raw("\"");
    }
    ctx.push_raw(">");
    render_inlines(content, ctx);
    ctx.push_raw("</");
    ctx.push_raw(&tag);
    ctx.push_raw(">");
}

fn render_list(ordered: bool, items: &[ListItem], ctx: &mut Context) {
    let tag = if ordered { "ol" } else { "ul" };
    ctx.push_raw("<");
    ctx.push_raw(tag);
    ctx.push_raw(">");
    for item in items {
        ctx.push_raw("<li>");
        render_inlines(&item.content, ctx);
        ctx.push_raw("</li>");
    }
    ctx.push_raw("</");
    ctx.push_raw(tag);
    ctx.push_raw(">");
}

/// Renders inline content in order.
pub fn render_inlines(inlines: &[Inline], ctx: &mut Context) {
    for inline in inlines {
        render_inline(inline, ctx);
    }
}

fn render_inline(inline: &Inline, ctx: &mut Context) {
    match inline {
        Inline::Text(text) => ctx.push_text(text),
        Inline::Strong(children) => {
            ctx.push_raw("<strong>");
            render_inlines(children, ctx);
            ctx.push_raw("</strong>");
        }
        Inline::Emphasis(children) => {
            ctx.push_raw("<em>");
            render_inlines(children, ctx);
            ctx.push_raw("</em>");
        }
        Inline::Code(code) => {
            ctx.push_raw("<code>");
            ctx.push_code_text(code);
            ctx.push_raw("</code>");
        }
        Inline::Link { href, children } => {
            ctx.push_raw("<a href=\"");
            ctx.push_attr_value(href);
            ctx.push_raw("\"");
            if ctx.options().open_links_in_new_tab {
                ctx.push_raw(" target=\"_blank\" rel=\"noopener noreferrer\"");
            }
            ctx.push_raw(">");
            render_inlines(children, ctx);
            ctx.push_raw("</a>");
        }
        Inline::Image { src, alt } => {
            ctx.push_raw("<img src=\"");
            ctx.push_attr_value(src);
            ctx.push_raw("\" alt=\"");
            ctx.push_attr_value(alt);
            ctx.push_raw("\"");
            if let Some(class) = &ctx.options().image_class {
                ctx.push_raw(" class=\"");
                ctx.push_attr_value(class);
                ctx.push_raw("\"");
            }
            ctx.push_raw(">");
        }
    }
}
