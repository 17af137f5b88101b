//! Blog URL canonicalization and page id extraction.
//!
//! The normalized blog URL is the account-table key: a post URL and the
//! blog URL from the account list must normalize to the same string.

mod normalize;
mod page_id;

pub use normalize::normalize_blog_url;
pub use page_id::{extract_page_id, PAGE_ID_PARAM};
