//! Ordered regex rule cascade.
//!
//! Each rule rewrites the output of the previous one, so rule order is part of
//! the behavior: headings before paragraphs, bold before italics, fenced blocks
//! before code spans, images before links. Rules see each other's output, and
//! overlapping matches can interact; the parsed engine exists for that reason.
//!
//! Line-anchored patterns run in CRLF mode, so `\r\n` input never leaves a
//! stray `\r` inside a tag.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// How a rule builds its replacement.
pub enum Replacement {
    /// Template with `${n}` capture references.
    Template(&'static str),
    /// Replacement computed from the captures.
    Function(fn(&Captures<'_>) -> String),
}

/// A named pattern and its replacement.
pub struct Rule {
    /// Short rule name, used in logs.
    pub name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: Replacement) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("cascade rule patterns are valid"),
            replacement,
        }
    }

    fn template(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self::new(name, pattern, Replacement::Template(template))
    }

    /// Applies the rule to every match in `input`.
    pub fn apply(&self, input: &str) -> String {
        match &self.replacement {
            Replacement::Template(template) => {
                self.pattern.replace_all(input, *template).into_owned()
            }
            Replacement::Function(build) => self
                .pattern
                .replace_all(input, |caps: &Captures<'_>| build(caps))
                .into_owned(),
        }
    }
}

/// Block tags a line may start with and still escape the paragraph rule.
const BLOCK_TAG_PREFIXES: &[&str] = &[
    "<h",
    "<ul",
    "<ol",
    "<li",
    "<blockquote",
    "<pre",
    "<code",
    "<hr",
];

fn wrap_paragraph(caps: &Captures<'_>) -> String {
    let line = &caps[0];
    if BLOCK_TAG_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
    {
        line.to_string()
    } else {
        format!("<p>{}</p>", line)
    }
}

/// Conversion rules in application order.
pub static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::template("h6", r"(?mR)^#{6}\s+(.+)$", "<h6>${1}</h6>"),
        Rule::template("h5", r"(?mR)^#{5}\s+(.+)$", "<h5>${1}</h5>"),
        Rule::template("h4", r"(?mR)^#{4}\s+(.+)$", "<h4>${1}</h4>"),
        Rule::template("h3", r"(?mR)^#{3}\s+(.+)$", "<h3>${1}</h3>"),
        Rule::template("h2", r"(?mR)^#{2}\s+(.+)$", "<h2>${1}</h2>"),
        Rule::template("h1", r"(?mR)^#\s+(.+)$", "<h1>${1}</h1>"),
        Rule::template("bold-asterisk", r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        Rule::template("bold-underscore", r"__(.+?)__", "<strong>${1}</strong>"),
        // Content may not open with the marker, so `***` and `___` survive for the rule lines.
        Rule::template("italic-asterisk", r"\*([^*\n].*?)\*", "<em>${1}</em>"),
        Rule::template("italic-underscore", r"_([^_\n].*?)_", "<em>${1}</em>"),
        Rule::template("fenced-code", r"(?s)```(.*?)```", "<pre><code>${1}</code></pre>"),
        Rule::template("code-span", r"`(.+?)`", "<code>${1}</code>"),
        Rule::template("blockquote", r"(?mR)^>\s+(.+)$", "<blockquote>${1}</blockquote>"),
        Rule::template("item-dash", r"(?mR)^-\s+(.+)$", "<li>${1}</li>"),
        Rule::template("item-asterisk", r"(?mR)^\*\s+(.+)$", "<li>${1}</li>"),
        Rule::template("item-numbered", r"(?mR)^\d+\.\s+(.+)$", "<li>${1}</li>"),
        Rule::template("list", r"(?R)<li>.*</li>(?:\r?\n<li>.*</li>)*", "<ul>${0}</ul>"),
        Rule::template(
            "image",
            r"!\[(.+?)\]\((.+?)\)",
            r#"<img src="${2}" alt="${1}" class="post-image">"#,
        ),
        Rule::template(
            "link",
            r"\[(.+?)\]\((.+?)\)",
            r#"<a href="${2}" target="_blank">${1}</a>"#,
        ),
        Rule::template("rule-dash", r"(?mR)^---$", "<hr>"),
        Rule::template("rule-underscore", r"(?mR)^___$", "<hr>"),
        Rule::template("rule-asterisk", r"(?mR)^\*\*\*$", "<hr>"),
        Rule::new("paragraph", r"(?mR)^.+$", Replacement::Function(wrap_paragraph)),
        Rule::template("paragraph-break", r"\n\n", "</p><p>"),
        Rule::template("double-close", r"</p></p>", "</p>"),
        Rule::template("empty-paragraph", r"<p></p>", ""),
    ]
});

/// Cleanup rules repairing nesting left behind by [`RULES`].
pub static CLEANUP: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::template("merge-ul", r"</ul><ul>", ""),
        Rule::template("merge-ol", r"</ol><ol>", ""),
        Rule::template("unwrap-heading-open", r"<p><h", "<h"),
        Rule::template("unwrap-heading-close", r"</h(\d+)></p>", "</h${1}>"),
    ]
});

/// Runs the full cascade: every rule in order, then the cleanup pass.
pub fn convert(markdown: &str) -> String {
    let mut html = markdown.to_string();
    for rule in RULES.iter().chain(CLEANUP.iter()) {
        html = rule.apply(&html);
        log::trace!("cascade rule {} applied", rule.name);
    }
    html
}
