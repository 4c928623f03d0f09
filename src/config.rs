/// Host every relative story link is resolved against.
pub const SOURCE_HOST: &str = "http://news.ycombinator.com";

/// Path of the discussion page on the source host, takes `?id=<item_id>`.
pub const ITEM_PATH: &str = "item";

/// Value used for a score or comment count the scraper did not capture.
pub const DEFAULT_COUNT: &str = "0";
