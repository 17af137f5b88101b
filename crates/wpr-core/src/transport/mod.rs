//! Outbound XML-RPC transport.
//!
//! A [`Transport`] performs one blocking HTTP POST. The [`IsolatedExecutor`]
//! runs it on its own worker thread and waits for the single outcome with a
//! deadline, so a hung connection or a panic inside the HTTP stack never
//! reaches the removal loop.

mod curl_post;
mod error;
mod executor;

pub use curl_post::CurlTransport;
pub use error::TransportError;
pub use executor::IsolatedExecutor;

/// A fully formed POST: absolute URL, body bytes and extra header lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRequest {
    pub url: String,
    pub body: Vec<u8>,
    pub headers: Vec<(String, String)>,
}

/// Blocking request sender. Implementations must be callable from any thread.
pub trait Transport: Send + Sync + 'static {
    /// Sends `request` and returns the (possibly truncated) response body.
    fn post(&self, request: &RemoteRequest) -> Result<Vec<u8>, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&RemoteRequest) -> Result<Vec<u8>, TransportError> + Send + Sync + 'static,
{
    fn post(&self, request: &RemoteRequest) -> Result<Vec<u8>, TransportError> {
        self(request)
    }
}
