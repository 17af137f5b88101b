//! Per-post failure taxonomy. The Display text is the error event message.

use crate::transport::TransportError;
use crate::xmlrpc::XmlRpcError;

#[derive(Debug, thiserror::Error)]
pub enum RemovalError {
    #[error("missing page_id")]
    MissingPageId,
    #[error("missing acc_username or missing acc_password")]
    MissingCredentials,
    #[error("request error: {0}")]
    Transport(#[from] TransportError),
    #[error("fault {code}: {message}")]
    Fault { code: i64, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// Response decoded but was not a single `true`.
    #[error("fail")]
    InvalidResult,
}

impl From<XmlRpcError> for RemovalError {
    fn from(e: XmlRpcError) -> Self {
        match e {
            XmlRpcError::Fault { code, message } => RemovalError::Fault { code, message },
            XmlRpcError::Malformed(detail) => RemovalError::MalformedResponse(detail),
        }
    }
}
