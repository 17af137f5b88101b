//! Page id lookup in a post URL query string.

/// Query parameter carrying the numeric post identifier.
pub const PAGE_ID_PARAM: &str = "page_id";

/// Extracts the `page_id` query parameter from a post URL as an integer.
///
/// Returns `None` when there is no query, the parameter is missing or blank,
/// or its first value is not an integer. `Some(0)` and negative values are
/// returned as-is; rejecting them is the caller's job.
pub fn extract_page_id(post_url: &str) -> Option<i64> {
    let without_fragment = post_url.split('#').next().unwrap_or(post_url);
    let (_, query) = without_fragment.split_once('?')?;
    if query.is_empty() {
        return None;
    }

    let first = url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, value)| key == PAGE_ID_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .next()?;

    first.trim().parse::<i64>().ok()
}
