//! The per-post removal workflow.

use crate::config::RemoverConfig;
use crate::transport::IsolatedExecutor;
use crate::url_model::{extract_page_id, normalize_blog_url};
use crate::xmlrpc::{decode_response, delete_post_request, is_delete_confirmed};

use super::{AccountTable, EventSink, RemovalError, RemovalEvent, RemovalSummary};

/// Deletes posts one by one using credentials from an [`AccountTable`].
#[derive(Debug)]
pub struct PostRemover {
    accounts: AccountTable,
    executor: IsolatedExecutor,
    xmlrpc_path: String,
}

impl PostRemover {
    pub fn new(accounts: AccountTable, executor: IsolatedExecutor, cfg: &RemoverConfig) -> Self {
        Self {
            accounts,
            executor,
            xmlrpc_path: cfg.xmlrpc_path.clone(),
        }
    }

    /// Processes every post in iteration order, strictly sequentially.
    ///
    /// Each post gets a `Begin` event and then exactly one `Done` or `Error`.
    /// Per-post failures are reported through `sink` and never end the run.
    pub async fn remove_posts<I, S>(&self, posts: I, sink: &mut S) -> RemovalSummary
    where
        I: IntoIterator<Item = String>,
        S: EventSink + ?Sized,
    {
        let mut summary = RemovalSummary::default();
        let mut emit = |event: RemovalEvent| {
            summary.record(&event);
            sink.on_event(event);
        };

        for post_url in posts {
            emit(RemovalEvent::Begin {
                post_url: post_url.clone(),
            });

            match self.remove_one(&post_url).await {
                Ok(()) => {
                    tracing::info!(post_url = %post_url, "post deleted");
                    emit(RemovalEvent::Done { post_url });
                }
                Err(e) => {
                    tracing::warn!(post_url = %post_url, "post not deleted: {}", e);
                    emit(RemovalEvent::Error {
                        post_url,
                        message: e.to_string(),
                    });
                }
            }
        }

        summary
    }

    /// Runs the workflow for one post and returns its single outcome.
    pub async fn remove_one(&self, post_url: &str) -> Result<(), RemovalError> {
        let page_id = match extract_page_id(post_url) {
            Some(id) if id > 0 => id,
            _ => return Err(RemovalError::MissingPageId),
        };

        let blog_url = normalize_blog_url(post_url);
        let credentials = self
            .accounts
            .lookup(&blog_url)
            .filter(|c| c.is_complete())
            .ok_or(RemovalError::MissingCredentials)?;

        let request = delete_post_request(&blog_url, &self.xmlrpc_path, page_id, credentials);
        tracing::debug!(url = %request.url, page_id, "sending delete request");

        let body = self.executor.execute(request).await?;
        let params = decode_response(&String::from_utf8_lossy(&body))?;

        if is_delete_confirmed(&params) {
            Ok(())
        } else {
            tracing::debug!(?params, "unexpected delete result");
            Err(RemovalError::InvalidResult)
        }
    }
}
