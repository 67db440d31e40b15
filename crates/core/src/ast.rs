//! Typed document model produced by the block and inline parsers.

/// Explicit kind tag for a block or a classified source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#`..`######` heading.
    Heading,
    /// Run of plain text lines.
    Paragraph,
    /// Single `>` line.
    BlockQuote,
    /// Run of `-`, `*` or `N.` items.
    List,
    /// Triple-backtick fenced block.
    CodeBlock,
    /// `---`, `___` or `***`.
    ThematicBreak,
}

/// Inline (span-level) content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text.
    Text(String),
    /// `**x**` or `__x__`.
    Strong(Vec<Inline>),
    /// `*x*` or `_x_`.
    Emphasis(Vec<Inline>),
    /// `` `x` ``, content kept verbatim.
    Code(String),
    /// `[text](href)`.
    Link {
        /// Link target as written.
        href: String,
        /// Parsed link text.
        children: Vec<Inline>,
    },
    /// `![alt](src)`.
    Image {
        /// Image source as written.
        src: String,
        /// Alternate text, kept verbatim.
        alt: String,
    },
}

/// A single list entry with its source marker flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Whether the item used an `N.` marker.
    pub ordered: bool,
    /// Parsed item content.
    pub content: Vec<Inline>,
}

/// Block-level structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level 1..=6.
    Heading {
        /// Heading depth.
        level: u8,
        /// Parsed heading text.
        content: Vec<Inline>,
    },
    /// Paragraph; source lines are joined with `\n`.
    Paragraph(Vec<Inline>),
    /// One-line quote.
    BlockQuote(Vec<Inline>),
    /// Coalesced list items.
    List {
        /// Whether the list renders as `<ol>`. Only set when ordered lists are distinguished.
        ordered: bool,
        /// Items in source order.
        items: Vec<ListItem>,
    },
    /// Fenced code, content verbatim.
    CodeBlock {
        /// Info string from the opening fence, if any.
        info: Option<String>,
        /// Code content without the fence lines.
        code: String,
    },
    /// Horizontal rule.
    ThematicBreak,
}

impl Block {
    /// Returns the kind tag of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::BlockQuote(_) => BlockKind::BlockQuote,
            Block::List { .. } => BlockKind::List,
            Block::CodeBlock { .. } => BlockKind::CodeBlock,
            Block::ThematicBreak => BlockKind::ThematicBreak,
        }
    }
}

/// A parsed document: blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level blocks.
    pub blocks: Vec<Block>,
}

impl Document {
    /// Returns true if the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Plain text of the whole document with markup removed.
    ///
    /// Blocks are separated by a single space, link text is kept and images are dropped.
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            let text = match block {
                Block::Heading { content, .. }
                | Block::Paragraph(content)
                | Block::BlockQuote(content) => inline_text(content),
                Block::List { items, .. } => items
                    .iter()
                    .map(|item| inline_text(&item.content))
                    .collect::<Vec<_>>()
                    .join(" "),
                Block::CodeBlock { code, .. } => code.clone(),
                Block::ThematicBreak => String::new(),
            };
            if !text.is_empty() {
                parts.push(text);
            }
        }
        parts.join(" ")
    }
}

/// Concatenates the visible text of inline content.
pub fn inline_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    push_inline_text(inlines, &mut out);
    out
}

fn push_inline_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Strong(children)
            | Inline::Emphasis(children)
            | Inline::Link { children, .. } => push_inline_text(children, out),
            Inline::Image { .. } => {}
        }
    }
}
