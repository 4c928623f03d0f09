use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageDataError {
    /// The text is not JSON, or has no `items` array of objects.
    #[error("malformed page data: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("unsupported sort key: {0} (expected score, comments, rank or title)")]
    UnsupportedSortKey(String),
}

pub type Result<T> = std::result::Result<T, PageDataError>;
