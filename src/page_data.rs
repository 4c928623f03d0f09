use tracing::debug;

use crate::error::Result;
use crate::models::{Entry, RawItem, RawPage, SortKey};
use crate::normalize::{comments_url, decode_title, extract_count, resolve_url};
use crate::stats;

/// One scraped front page: normalized stories in their current display order.
///
/// The set of stories is fixed at construction; only `sort_on` reorders it.
/// Statistics are order-independent.
#[derive(Debug, Clone)]
pub struct PageData {
    entries: Vec<Entry>,
    sort_key: SortKey,
}

impl PageData {
    /// Parses a `{"items": [...]}` document. Fails without a partial page when
    /// the text is not JSON or `items` is missing or not an array of objects.
    pub fn new(raw_json: &str) -> Result<Self> {
        let page: RawPage = serde_json::from_str(raw_json)?;

        let entries: Vec<Entry> = page
            .items
            .into_iter()
            .enumerate()
            .map(|(rank, item)| Self::normalize(rank, item))
            .collect();

        debug!(count = entries.len(), "parsed page data");

        Ok(Self {
            entries,
            sort_key: SortKey::Rank,
        })
    }

    fn normalize(rank: usize, item: RawItem) -> Entry {
        Entry {
            title: decode_title(item.title.as_deref()),
            url: resolve_url(item.url.as_deref()),
            description: item.description,
            score: extract_count(item.score.as_deref()),
            comments: extract_count(item.comments.as_deref()),
            user: item.user,
            time: item.time,
            item_id: item.item_id,
            rank,
        }
    }

    /// Stories in current order.
    pub fn data(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key of the last applied sort, `Rank` for a freshly parsed page.
    pub fn current_sort(&self) -> SortKey {
        self.sort_key
    }

    /// Reorders the stories in place. Score and comments sort descending,
    /// title ascending; all three are stable with respect to the order before
    /// the call. Rank always restores source order.
    pub fn sort_on(&mut self, key: SortKey) {
        match key {
            SortKey::Score => self
                .entries
                .sort_by(|a, b| b.score_count().cmp(&a.score_count())),
            SortKey::Comments => self
                .entries
                .sort_by(|a, b| b.comments_count().cmp(&a.comments_count())),
            SortKey::Rank => self.entries.sort_by_key(|entry| entry.rank),
            SortKey::Title => self.entries.sort_by(|a, b| a.title.cmp(&b.title)),
        }
        self.sort_key = key;
        debug!(key = %key, "sorted page data");
    }

    /// Same as `sort_on` for a key given by name. An unknown name leaves the
    /// order untouched.
    pub fn sort_on_name(&mut self, key: &str) -> Result<()> {
        let key: SortKey = key.parse()?;
        self.sort_on(key);
        Ok(())
    }

    fn scores(&self) -> Vec<u64> {
        self.entries.iter().map(Entry::score_count).collect()
    }

    pub fn mean_score(&self) -> f64 {
        stats::mean(&self.scores())
    }

    pub fn median_score(&self) -> f64 {
        stats::median(&self.scores())
    }

    pub fn mode_score(&self) -> u64 {
        stats::mode(&self.scores())
    }

    /// The story at the top of the current order.
    pub fn selected(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn selected_url(&self) -> Option<&str> {
        self.selected().map(|entry| entry.url.as_str())
    }

    /// Discussion page of the top story; `None` if it has no item id.
    pub fn selected_comments_url(&self) -> Option<String> {
        self.selected()
            .and_then(|entry| entry.item_id.as_deref())
            .map(comments_url)
    }
}
