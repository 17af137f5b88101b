//! Run one transport call on a detached worker thread with a deadline.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;

use super::{RemoteRequest, Transport, TransportError};

/// Executes requests in isolation from the caller.
///
/// Each call gets a fresh OS thread. The caller waits for that thread's single
/// message or the deadline, whichever comes first. A late worker is never
/// joined; its send simply fails once the receiver is gone.
#[derive(Clone)]
pub struct IsolatedExecutor {
    transport: Arc<dyn Transport>,
    deadline: Duration,
}

impl IsolatedExecutor {
    /// The caller never waits longer than `deadline` for an outcome.
    pub fn new(transport: Arc<dyn Transport>, deadline: Duration) -> Self {
        Self {
            transport,
            deadline,
        }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Sends `request` and returns the response body or a transport error.
    /// Always returns within the deadline and never panics.
    pub async fn execute(&self, request: RemoteRequest) -> Result<Vec<u8>, TransportError> {
        let (tx, rx) = oneshot::channel();
        let transport = Arc::clone(&self.transport);

        std::thread::Builder::new()
            .name("wpr-request".to_string())
            .spawn(move || {
                let outcome = transport.post(&request);
                // Receiver gone means the caller already timed out.
                let _ = tx.send(outcome);
            })
            .map_err(TransportError::Spawn)?;

        match tokio::time::timeout(self.deadline, rx).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => Err(TransportError::WorkerLost),
            Err(_) => {
                tracing::warn!("request worker abandoned after {:?}", self.deadline);
                Err(TransportError::TimedOut(self.deadline))
            }
        }
    }
}

impl std::fmt::Debug for IsolatedExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IsolatedExecutor")
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}
