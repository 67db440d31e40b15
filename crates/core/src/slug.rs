use std::collections::HashMap;

/// Github-style slug generator that keeps slugs unique within one document.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next slug for the given heading text.
    ///
    /// Repeats get `-1`, `-2`, ... suffixes in order of appearance. A suffixed
    /// slug is also reserved, so a later heading that slugifies to it moves on.
    pub fn next_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();
        while self.counts.contains_key(&slug) {
            let count = self.counts.entry(base.clone()).or_insert(0);
            *count += 1;
            slug = format!("{}-{}", base, *count);
        }
        self.counts.insert(slug.clone(), 0);
        slug
    }
}

/// Slugifies heading text without deduplication.
///
/// Letters and digits (any script) are lowercased and kept, `-` and `_` are kept,
/// spaces become `-`, everything else is dropped. Hyphen runs are neither
/// collapsed nor trimmed. Text that slugifies to nothing yields `heading`.
///
/// # Examples
///
/// ```
/// use blogmd_core::slug::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("C++ 模板元编程"), "c-模板元编程");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            slug.extend(ch.to_lowercase());
        } else if ch == ' ' {
            slug.push('-');
        }
    }
    if slug.is_empty() {
        slug.push_str("heading");
    }
    slug
}
