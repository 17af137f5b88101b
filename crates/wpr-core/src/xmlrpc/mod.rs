//! XML-RPC envelope encoding and decoding.
//!
//! Only what a `metaWeblog.deletePost` round trip needs is exposed publicly,
//! but the value model covers every XML-RPC type so arbitrary fault and
//! response bodies decode cleanly.

mod decode;
mod delete_post;
mod encode;

pub use decode::decode_response;
pub use delete_post::{
    delete_post_request, is_delete_confirmed, Credentials, CONTENT_TYPE, DELETE_POST_METHOD,
};
pub use encode::encode_call;

/// An XML-RPC value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Boolean(bool),
    String(String),
    Double(f64),
    /// `dateTime.iso8601` kept as the raw text.
    DateTime(String),
    Base64(Vec<u8>),
    Array(Vec<Value>),
    Struct(Vec<(String, Value)>),
    Nil,
}

impl Value {
    /// Looks up a struct member by name.
    pub fn member(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Struct(members) => members.iter().find(|(k, _)| k == name).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum XmlRpcError {
    /// The server answered with a `<fault>` envelope.
    #[error("fault {code}: {message}")]
    Fault { code: i64, message: String },
    /// Body is not a well-formed `methodResponse`.
    #[error("{0}")]
    Malformed(String),
}
