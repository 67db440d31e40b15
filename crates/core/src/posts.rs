//! Post feed model for the blog's `data/posts.json`.

use crate::error::BlogmdError;
use crate::excerpt::excerpt;
use serde::{Deserialize, Deserializer, Serialize};

/// Category used when a post does not name one.
pub const DEFAULT_CATEGORY: &str = "misc";

/// A single post record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post id; numeric ids in the feed are read as strings.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Post title.
    pub title: String,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    /// Category key (e.g. `cpp`, `web`).
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub reading_time: Option<u32>,
    /// View counter.
    #[serde(default)]
    pub views: u64,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "post id must be a string or number, got {other}"
        ))),
    }
}

impl Post {
    /// Category, falling back to [`DEFAULT_CATEGORY`].
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    /// Year part of the date.
    pub fn year(&self) -> &str {
        self.date.split('-').next().unwrap_or_default()
    }

    /// Month part of the date, if present.
    pub fn month(&self) -> Option<&str> {
        self.date.split('-').nth(1)
    }

    /// Plain-text preview of the content.
    pub fn preview(&self, max_chars: usize) -> String {
        excerpt(&self.content, max_chars)
    }
}

/// One year of the archive, newest posts first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveYear<'a> {
    /// Four-digit year.
    pub year: &'a str,
    /// Posts published that year.
    pub posts: Vec<&'a Post>,
}

/// The whole post list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostFeed {
    /// Posts in feed order.
    pub posts: Vec<Post>,
}

impl PostFeed {
    /// Decodes a feed from `{ "posts": [...] }` JSON.
    pub fn from_json(json: &str) -> Result<Self, BlogmdError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Posts newest first. Dates compare as ISO strings; equal dates keep feed order.
    pub fn sorted_by_date(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Looks up a post by id.
    pub fn find(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Looks up a post by id, failing with [`BlogmdError::PostNotFound`].
    pub fn get(&self, id: &str) -> Result<&Post, BlogmdError> {
        self.find(id).ok_or_else(|| BlogmdError::post_not_found(id))
    }

    /// Posts of one category, newest first.
    pub fn in_category(&self, category: &str) -> Vec<&Post> {
        self.sorted_by_date()
            .into_iter()
            .filter(|post| post.category_or_default() == category)
            .collect()
    }

    /// All posts grouped by year, newest year first.
    pub fn archive(&self) -> Vec<ArchiveYear<'_>> {
        group_by_year(self.sorted_by_date())
    }

    /// Posts of one category grouped by year, newest year first.
    pub fn archive_for(&self, category: &str) -> Vec<ArchiveYear<'_>> {
        group_by_year(self.in_category(category))
    }

    /// Increments the view counter of a post and returns the new count.
    pub fn record_view(&mut self, id: &str) -> Result<u64, BlogmdError> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| BlogmdError::post_not_found(id))?;
        post.views += 1;
        Ok(post.views)
    }
}

/// Groups date-sorted posts into years, preserving order within each year.
fn group_by_year(sorted: Vec<&Post>) -> Vec<ArchiveYear<'_>> {
    let mut years: Vec<ArchiveYear<'_>> = Vec::new();
    for post in sorted {
        match years.last_mut() {
            Some(group) if group.year == post.year() => group.posts.push(post),
            _ => years.push(ArchiveYear {
                year: post.year(),
                posts: vec![post],
            }),
        }
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r##"{
        "posts": [
            {"id": 1, "title": "Templates", "date": "2024-03-02", "category": "cpp",
             "tags": ["C++"], "readingTime": 8, "views": 10, "content": "# Templates\n\nBody"},
            {"id": "2", "title": "Streams", "date": "2025-01-15", "category": "java",
             "content": "Java **streams** explained"},
            {"id": 3, "title": "Notes", "date": "2024-11-30"},
            {"id": 4, "title": "Ranges", "date": "2025-01-15", "category": "cpp"}
        ]
    }"##;

    fn feed() -> PostFeed {
        PostFeed::from_json(FEED).expect("feed should parse")
    }

    #[test]
    fn numeric_and_string_ids() {
        let feed = feed();
        assert_eq!(feed.posts[0].id, "1");
        assert_eq!(feed.posts[1].id, "2");
        assert_eq!(feed.posts[0].reading_time, Some(8));
        assert_eq!(feed.posts[2].views, 0);
        assert_eq!(feed.posts[0].content, "# Templates\n\nBody");
    }

    #[test]
    fn sorted_newest_first_with_stable_ties() {
        let feed = feed();
        let ids: Vec<&str> = feed.sorted_by_date().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "3", "1"]);
    }

    #[test]
    fn category_defaults_to_misc() {
        let feed = feed();
        assert_eq!(feed.posts[2].category_or_default(), "misc");
        let misc: Vec<&str> = feed.in_category("misc").iter().map(|p| p.title.as_str()).collect();
        assert_eq!(misc, vec!["Notes"]);
    }

    #[test]
    fn archive_groups_by_year() {
        let feed = feed();
        let archive = feed.archive();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive[0].year, "2025");
        assert_eq!(archive[0].posts.len(), 2);
        assert_eq!(archive[1].year, "2024");
        assert_eq!(archive[1].posts[0].month(), Some("11"));

        let cpp = feed.archive_for("cpp");
        assert_eq!(cpp.len(), 2);
        assert_eq!(cpp[0].posts[0].title, "Ranges");
    }

    #[test]
    fn find_and_record_view() {
        let mut feed = feed();
        assert!(feed.find("9").is_none());
        assert!(matches!(
            feed.get("9"),
            Err(BlogmdError::PostNotFound { .. })
        ));
        assert_eq!(feed.record_view("1").unwrap(), 11);
        assert_eq!(feed.get("1").unwrap().views, 11);
    }

    #[test]
    fn preview_uses_excerpt() {
        let feed = feed();
        assert_eq!(feed.posts[1].preview(100), "Java streams explained");
        assert_eq!(feed.posts[1].preview(4), "Java...");
    }

    #[test]
    fn rejects_bad_id() {
        let err = PostFeed::from_json(r#"{"posts":[{"id":true,"title":"x","date":"2024-01-01"}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("post id must be a string or number"));
    }
}
