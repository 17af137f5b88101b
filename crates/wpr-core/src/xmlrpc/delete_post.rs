//! `metaWeblog.deletePost` request construction and result check.

use super::{encode_call, Value};
use crate::transport::RemoteRequest;

pub const DELETE_POST_METHOD: &str = "metaWeblog.deletePost";
pub const CONTENT_TYPE: &str = "application/xml;charset=utf-8";

/// Blog login used for the remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Both parts must be non-empty for a call to make sense.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Builds the POST that deletes `page_id` from the blog at `blog_url`.
///
/// `blog_url` must already be normalized (it ends with `/`), so the endpoint
/// is `blog_url` followed by `xmlrpc_path`. The blog id argument is always
/// empty and the publish flag always false.
pub fn delete_post_request(
    blog_url: &str,
    xmlrpc_path: &str,
    page_id: i64,
    credentials: &Credentials,
) -> RemoteRequest {
    let body = encode_call(
        DELETE_POST_METHOD,
        &[
            Value::from(""),
            Value::Int(page_id),
            Value::from(credentials.username.as_str()),
            Value::from(credentials.password.as_str()),
            Value::Boolean(false),
        ],
    );

    RemoteRequest {
        url: format!("{}{}", blog_url, xmlrpc_path.trim_start_matches('/')),
        body: body.into_bytes(),
        headers: vec![("Content-Type".to_string(), CONTENT_TYPE.to_string())],
    }
}

/// The server confirms a deletion with exactly one boolean `true`.
pub fn is_delete_confirmed(params: &[Value]) -> bool {
    matches!(params, [Value::Boolean(true)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials {
            username: "bob".to_string(),
            password: "s&cret".to_string(),
        }
    }

    #[test]
    fn request_targets_xmlrpc_endpoint() {
        let req = delete_post_request("http://example.com/", "xmlrpc.php", 42, &creds());
        assert_eq!(req.url, "http://example.com/xmlrpc.php");
        assert_eq!(
            req.headers,
            vec![(
                "Content-Type".to_string(),
                "application/xml;charset=utf-8".to_string()
            )]
        );
    }

    #[test]
    fn request_body_carries_params_in_order() {
        let req = delete_post_request("http://example.com/blog/", "xmlrpc.php", 42, &creds());
        assert_eq!(req.url, "http://example.com/blog/xmlrpc.php");
        let body = String::from_utf8(req.body).unwrap();
        let blog_id = body.find("<string></string>").unwrap();
        let page_id = body.find("<int>42</int>").unwrap();
        let user = body.find("<string>bob</string>").unwrap();
        let pass = body.find("<string>s&amp;cret</string>").unwrap();
        let publish = body.find("<boolean>0</boolean>").unwrap();
        assert!(blog_id < page_id && page_id < user && user < pass && pass < publish);
    }

    #[test]
    fn leading_slash_in_path_is_not_doubled() {
        let req = delete_post_request("http://example.com/", "/xmlrpc.php", 1, &creds());
        assert_eq!(req.url, "http://example.com/xmlrpc.php");
    }

    #[test]
    fn only_single_true_confirms() {
        assert!(is_delete_confirmed(&[Value::Boolean(true)]));
        assert!(!is_delete_confirmed(&[Value::Boolean(false)]));
        assert!(!is_delete_confirmed(&[]));
        assert!(!is_delete_confirmed(&[Value::Boolean(true), Value::Boolean(true)]));
        assert!(!is_delete_confirmed(&[Value::Int(1)]));
        assert!(!is_delete_confirmed(&[Value::String("1".to_string())]));
    }

    #[test]
    fn incomplete_credentials() {
        let mut c = creds();
        assert!(c.is_complete());
        c.password.clear();
        assert!(!c.is_complete());
    }
}
