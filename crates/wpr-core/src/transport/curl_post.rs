//! libcurl-backed POST with timeouts and a response size cap.

use std::time::Duration;

use super::{RemoteRequest, Transport, TransportError};
use crate::config::RemoverConfig;

/// libcurl gives up this much before the executor deadline so its own, more
/// specific timeout error normally reaches the caller first.
const CURL_HEADROOM: Duration = Duration::from_millis(500);

/// Sends XML-RPC requests with a libcurl easy handle (one handle per request).
#[derive(Debug, Clone)]
pub struct CurlTransport {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_response_bytes: u64,
    pub user_agent: Option<String>,
}

impl CurlTransport {
    pub fn from_config(cfg: &RemoverConfig) -> Self {
        // libcurl treats a zero timeout as "no limit".
        let timeout = cfg
            .request_timeout()
            .saturating_sub(CURL_HEADROOM)
            .max(Duration::from_millis(1));
        Self {
            timeout,
            connect_timeout: cfg.connect_timeout().min(timeout),
            max_response_bytes: cfg.max_response_bytes,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::from_config(&RemoverConfig::default())
    }
}

impl Transport for CurlTransport {
    fn post(&self, request: &RemoteRequest) -> Result<Vec<u8>, TransportError> {
        let cap = usize::try_from(self.max_response_bytes).unwrap_or(usize::MAX);
        let mut body: Vec<u8> = Vec::new();
        let mut truncated = false;

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.post(true)?;
        easy.post_fields_copy(&request.body)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        // Suppress libcurl's automatic `Expect: 100-continue` on larger bodies.
        list.append("Expect:")?;
        easy.http_headers(list)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                let room = cap.saturating_sub(body.len());
                if data.len() > room {
                    body.extend_from_slice(&data[..room]);
                    truncated = true;
                    // Short write stops the transfer.
                    return Ok(0);
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        match performed {
            Ok(()) => {}
            Err(e) if truncated && e.is_write_error() => {
                tracing::debug!(url = %request.url, cap, "response truncated at cap");
            }
            Err(e) => return Err(TransportError::Curl(e)),
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(TransportError::Http(code));
        }
        Ok(body)
    }
}
