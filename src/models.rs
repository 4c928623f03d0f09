use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::PageDataError;

/// A front page story after normalization.
///
/// `score` and `comments` always hold decimal digits only; `url` is always
/// absolute. `rank` is the zero-based position the story had in the source
/// document and never changes when the page is re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub score: String,
    pub comments: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    pub rank: usize,
}

impl Entry {
    pub fn score_count(&self) -> u64 {
        self.score.parse().unwrap_or(0)
    }

    pub fn comments_count(&self) -> u64 {
        self.comments.parse().unwrap_or(0)
    }
}

/// Page document as produced by the scraper.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPage {
    pub items: Vec<RawItem>,
}

/// One scraped story, every field optional and loosely typed.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub score: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub item_id: Option<String>,
}

// Scrapers are not consistent about quoting numbers, so take any scalar as text
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Score,
    Comments,
    #[default]
    Rank,
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Score,
        SortKey::Comments,
        SortKey::Rank,
        SortKey::Title,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::Comments => "comments",
            SortKey::Rank => "rank",
            SortKey::Title => "title",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = PageDataError;

    /// Accepts `score`, `comments`, `rank` and `title`, case-insensitively and
    /// with an optional leading `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_prefix(':').unwrap_or(name);
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| PageDataError::UnsupportedSortKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sort_key_names() {
        assert_eq!("score".parse::<SortKey>().unwrap(), SortKey::Score);
        assert_eq!(":comments".parse::<SortKey>().unwrap(), SortKey::Comments);
        assert_eq!(" Rank ".parse::<SortKey>().unwrap(), SortKey::Rank);
        assert_eq!("TITLE".parse::<SortKey>().unwrap(), SortKey::Title);
    }

    #[test]
    fn rejects_unknown_sort_key() {
        let err = "user".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, PageDataError::UnsupportedSortKey(ref key) if key == "user"));
        assert!("".parse::<SortKey>().is_err());
    }

    #[test]
    fn raw_item_accepts_numbers_and_nulls() {
        let raw = r#"{"title":"Hi","score":42,"comments":null,"item_id":7}"#;
        let item: RawItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.title.as_deref(), Some("Hi"));
        assert_eq!(item.score.as_deref(), Some("42"));
        assert_eq!(item.comments, None);
        assert_eq!(item.item_id.as_deref(), Some("7"));
        assert_eq!(item.url, None);
    }

    #[test]
    fn entry_json_omits_absent_fields() {
        let entry = Entry {
            title: "NextId".into(),
            url: "http://news.ycombinator.com/news2".into(),
            description: None,
            score: "0".into(),
            comments: "0".into(),
            user: None,
            time: None,
            item_id: None,
            rank: 0,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["score"], "0");
        assert!(json.get("user").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(entry.score_count(), 0);
    }
}
