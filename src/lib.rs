//! Normalization, sorting and score statistics for scraped Hacker News front
//! pages.

pub mod config;
pub mod error;
pub mod models;
mod normalize;
pub mod page_data;
mod stats;

pub use error::{PageDataError, Result};
pub use models::{Entry, SortKey};
pub use page_data::PageData;
