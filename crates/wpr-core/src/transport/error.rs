//! Transport failure kinds. Display text becomes the `request error:` detail.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// libcurl reported an error (connect, resolve, read, its own timeout).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response status outside 2xx.
    #[error("HTTP {0}")]
    Http(u32),
    /// No outcome from the worker before the deadline; the worker is abandoned.
    #[error("timed out after {}s", .0.as_secs_f64())]
    TimedOut(Duration),
    /// The worker thread ended without reporting (it panicked).
    #[error("request worker exited without a result")]
    WorkerLost,
    /// The worker thread could not be started.
    #[error("spawn request worker: {0}")]
    Spawn(#[source] std::io::Error),
}
