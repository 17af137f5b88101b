//! Scheme defaulting, query stripping, trailing slash.

const DEFAULT_SCHEME: &str = "http:";

/// Canonicalizes a blog (or post) URL into the account-table key form.
///
/// A missing scheme becomes `http:`, a protocol-relative `//host` gets `http:`
/// prepended, anything from the first `?` or `#` is dropped and a single
/// trailing `/` is ensured. Host and path are otherwise left untouched, so
/// applying this twice yields the same string.
pub fn normalize_blog_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len() + DEFAULT_SCHEME.len() + 3);

    let has_scheme = url.starts_with("http://") || url.starts_with("https://");
    if !has_scheme && !url.starts_with("//") {
        out.push_str(DEFAULT_SCHEME);
        out.push_str("//");
    } else if !url.starts_with("http:") && !url.starts_with("https:") {
        out.push_str(DEFAULT_SCHEME);
    }

    let end = url.find(['?', '#']).unwrap_or(url.len());
    out.push_str(&url[..end]);

    if !out.ends_with('/') {
        out.push('/');
    }
    out
}
