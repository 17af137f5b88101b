//! Account records and the normalized-URL lookup table.

use std::collections::HashMap;

use crate::url_model::normalize_blog_url;
use crate::xmlrpc::Credentials;

/// One row of the account list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub email: String,
    pub email_password: String,
    pub blog_url: String,
    pub username: String,
    pub password: String,
}

impl AccountRecord {
    pub const FIELD_COUNT: usize = 5;

    /// Builds a record from a CSV row; rows without exactly five fields yield `None`.
    pub fn from_row(row: Vec<String>) -> Option<Self> {
        let [email, email_password, blog_url, username, password]: [String; 5] =
            row.try_into().ok()?;
        Some(Self {
            email,
            email_password,
            blog_url,
            username,
            password,
        })
    }
}

/// Credentials keyed by normalized blog URL. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct AccountTable {
    by_blog: HashMap<String, Credentials>,
}

impl AccountTable {
    /// Later records for the same normalized blog URL replace earlier ones.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = AccountRecord>,
    {
        let mut by_blog = HashMap::new();
        for record in records {
            by_blog.insert(
                normalize_blog_url(&record.blog_url),
                Credentials {
                    username: record.username,
                    password: record.password,
                },
            );
        }
        Self { by_blog }
    }

    /// Raw CSV rows; rows with the wrong field count are skipped.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        Self::from_records(rows.into_iter().filter_map(AccountRecord::from_row))
    }

    /// `blog_url` must already be normalized.
    pub fn lookup(&self, blog_url: &str) -> Option<&Credentials> {
        self.by_blog.get(blog_url)
    }

    pub fn len(&self) -> usize {
        self.by_blog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_blog.is_empty()
    }
}
