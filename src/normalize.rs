use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::config::{DEFAULT_COUNT, ITEM_PATH, SOURCE_HOST};

lazy_static! {
    static ref DIGITS: Regex = Regex::new(r"[0-9]+").unwrap();
    static ref SOURCE_BASE: Url = Url::parse(SOURCE_HOST).unwrap();
}

/// Pulls the first run of ASCII digits out of text like `"260 points"` or
/// `"29&nbsp;comments"`. Missing or digit-free text counts as zero.
pub fn extract_count(raw: Option<&str>) -> String {
    let Some(digits) = raw.and_then(|text| DIGITS.find(text)) else {
        return DEFAULT_COUNT.to_string();
    };

    // Round-trip through u64 to drop leading zeros; overflow saturates
    let count = digits
        .as_str()
        .parse::<u64>()
        .unwrap_or(u64::MAX);
    count.to_string()
}

pub fn decode_title(raw: Option<&str>) -> String {
    raw.map(|title| html_escape::decode_html_entities(title).to_string())
        .unwrap_or_default()
}

/// Links written as `scheme://host...` are kept verbatim; other text the
/// parser still reads as absolute (`http:/foo`) is replaced by its normalized
/// form. Anything else (`/news2`, `item?id=1`) points at a page on the source
/// site and is resolved against its root.
pub fn resolve_url(raw: Option<&str>) -> String {
    let raw = raw.map(str::trim).unwrap_or_default();

    if let Ok(url) = Url::parse(raw) {
        if url.has_host() {
            let literal = raw
                .get(url.scheme().len()..)
                .is_some_and(|rest| rest.starts_with("://"));
            return if literal { raw.to_string() } else { url.to_string() };
        }
    }

    match SOURCE_BASE.join(raw) {
        Ok(url) if url.has_host() => url.to_string(),
        _ => {
            tracing::warn!(url = raw, "could not resolve story url, linking to site root");
            SOURCE_BASE.to_string()
        }
    }
}

/// Discussion page for a story on the source site.
pub fn comments_url(item_id: &str) -> String {
    format!(
        "{}/{}?id={}",
        SOURCE_HOST,
        ITEM_PATH,
        urlencoding::encode(item_id.trim())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_scraped_text() {
        assert_eq!(extract_count(Some("260 points")), "260");
        assert_eq!(extract_count(Some("0 points")), "0");
        assert_eq!(extract_count(Some("122 comments")), "122");
        assert_eq!(extract_count(Some("1 point")), "1");
        assert_eq!(extract_count(Some("29&nbsp;comments")), "29");
        assert_eq!(extract_count(Some("  007 ")), "7");
    }

    #[test]
    fn missing_counts_default_to_zero() {
        assert_eq!(extract_count(None), "0");
        assert_eq!(extract_count(Some("discuss")), "0");
        assert_eq!(extract_count(Some("")), "0");
    }

    #[test]
    fn non_ascii_digits_are_not_counts() {
        assert_eq!(extract_count(Some("\u{0662}\u{0666}\u{0660} points")), "0");
        assert_eq!(extract_count(Some("\u{FF12}\u{FF16}\u{FF10} points")), "0");
        assert_eq!(extract_count(Some("\u{0661}2 comments")), "2");
    }

    #[test]
    fn huge_counts_saturate() {
        let count = extract_count(Some("99999999999999999999999 points"));
        assert_eq!(count, u64::MAX.to_string());
    }

    #[test]
    fn decodes_entities_in_titles() {
        assert_eq!(
            decode_title(Some("Ray Kurzweil joins Google &amp;")),
            "Ray Kurzweil joins Google &"
        );
        assert_eq!(decode_title(Some("Don&#39;t &lt;panic&gt;")), "Don't <panic>");
        assert_eq!(decode_title(None), "");
    }

    #[test]
    fn keeps_absolute_urls_verbatim() {
        let raw =
            "http://www.kurzweilai.net/joins-google?utm_source=twitterfeed&utm_medium=twitter";
        assert_eq!(resolve_url(Some(raw)), raw);
        assert_eq!(resolve_url(Some("https://example.com")), "https://example.com");
    }

    #[test]
    fn resolves_relative_urls_on_source_host() {
        assert_eq!(resolve_url(Some("/news2")), "http://news.ycombinator.com/news2");
        assert_eq!(
            resolve_url(Some("item?id=4992617")),
            "http://news.ycombinator.com/item?id=4992617"
        );
        assert_eq!(resolve_url(None), "http://news.ycombinator.com/");
    }

    #[test]
    fn normalizes_absolute_urls_missing_slashes() {
        assert_eq!(resolve_url(Some("http:/foo")), "http://foo/");
        assert_eq!(resolve_url(Some("https:example.com/a")), "https://example.com/a");
    }

    #[test]
    fn hostless_schemes_fall_back_to_site_root() {
        assert_eq!(resolve_url(Some("mailto:someone")), "http://news.ycombinator.com/");
    }

    #[test]
    fn builds_comments_url() {
        assert_eq!(comments_url("4924763"), "http://news.ycombinator.com/item?id=4924763");
        assert_eq!(comments_url("a b"), "http://news.ycombinator.com/item?id=a%20b");
    }
}
