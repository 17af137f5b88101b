//! Input list loading: plain item lists and CSV rows.
//!
//! An item path may name a file (one item per line), a directory (one item
//! per `*.txt` file), or neither, in which case `<path>.d` and then
//! `<path>.txt` are tried. CSV paths fall back to `<path>.csv`.

mod csv_rows;
mod sources;

use std::path::PathBuf;

pub use csv_rows::open_csv_rows;
pub use sources::{open_items, random_finite_items};

#[derive(Debug, thiserror::Error)]
pub enum ItemsError {
    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ItemsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ItemsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// `<path><suffix>`, e.g. `posts` + `.txt` = `posts.txt`.
pub(crate) fn with_suffix(path: &std::path::Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}
