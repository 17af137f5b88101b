//! File-driven entry point: account CSV + post list in, events out.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::RemoverConfig;
use crate::items;
use crate::transport::{CurlTransport, IsolatedExecutor};

use super::{AccountTable, EventSink, PostRemover, RemovalSummary};

/// Builds the account table from the CSV at `accs_path` (or `<accs_path>.csv`).
pub fn load_accounts(accs_path: &Path) -> Result<AccountTable> {
    let rows = items::open_csv_rows(accs_path).context("load account list")?;
    let row_count = rows.len();
    let table = AccountTable::from_rows(rows);
    tracing::info!(
        rows = row_count,
        blogs = table.len(),
        "account table built from {}",
        accs_path.display()
    );
    Ok(table)
}

/// Loads the post list, shuffled unless `shuffle` is false.
pub fn load_posts(posts_path: &Path, shuffle: bool) -> Result<Vec<String>> {
    let loaded = if shuffle {
        items::random_finite_items(posts_path, &mut rand::thread_rng())
    } else {
        items::open_items(posts_path)
    };
    let posts = loaded.context("load post list")?;
    tracing::info!(posts = posts.len(), shuffle, "post list loaded from {}", posts_path.display());
    Ok(posts)
}

/// Loads both lists, then deletes every post over libcurl.
///
/// Only input loading can fail; per-post failures arrive at `sink` as
/// error events and are counted in the returned summary.
pub async fn remove_from_paths<S>(
    accs_path: &Path,
    posts_path: &Path,
    cfg: &RemoverConfig,
    sink: &mut S,
) -> Result<RemovalSummary>
where
    S: EventSink + ?Sized,
{
    let accounts = load_accounts(accs_path)?;
    let posts = load_posts(posts_path, cfg.shuffle_posts)?;

    let transport = CurlTransport::from_config(cfg);
    let executor = IsolatedExecutor::new(Arc::new(transport), cfg.request_timeout());
    let remover = PostRemover::new(accounts, executor, cfg);

    let summary = remover.remove_posts(posts, sink).await;
    tracing::info!(
        processed = summary.processed,
        done = summary.done,
        failed = summary.failed,
        "removal run finished"
    );
    Ok(summary)
}
