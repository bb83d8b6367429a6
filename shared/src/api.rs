//! Backend HTTP contract: endpoint paths and how replies are read.
//!
//! The client performs the actual requests; everything here works on plain
//! status codes and body text so it can be exercised without a browser.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use thiserror::Error;

use crate::model::{parse_directory, Directory};

/// Same set `encodeURIComponent` leaves alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request did not complete: {0}")]
    Transport(String),
    #[error("server answered with status {status}")]
    Server {
        status: u16,
        detail: Option<String>,
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// `detail`, else `message`.
    pub fn server_text(&self) -> Option<&str> {
        match self {
            ApiError::Server {
                detail, message, ..
            } => detail.as_deref().or_else(|| message.as_deref()),
            _ => None,
        }
    }

    /// Malformed bodies are shown like a failed request.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Malformed(_))
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base)
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base,
        encode_component(activity),
        encode_component(email)
    )
}

pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/participants?email={}",
        base,
        encode_component(activity),
        encode_component(email)
    )
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn text_field(object: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Reads a signup or unregister reply. `Ok` carries the server's `message`.
pub fn read_reply(status: u16, body: &str) -> Result<String, ApiError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| ApiError::Malformed("expected a JSON object".to_string()))?;

    if is_success(status) {
        Ok(text_field(object, "message").unwrap_or_default())
    } else {
        Err(ApiError::Server {
            status,
            detail: text_field(object, "detail"),
            message: text_field(object, "message"),
        })
    }
}

/// Reads the `GET /activities` reply.
pub fn read_directory(status: u16, body: &str) -> Result<Directory, ApiError> {
    if !is_success(status) {
        let object = serde_json::from_str::<Value>(body).ok();
        let object = object.as_ref().and_then(Value::as_object);
        return Err(ApiError::Server {
            status,
            detail: object.and_then(|o| text_field(o, "detail")),
            message: object.and_then(|o| text_field(o, "message")),
        });
    }
    parse_directory(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("Chess Club"), "Chess%20Club");
        assert_eq!(encode_component("c@x.com"), "c%40x.com");
        assert_eq!(encode_component("a+b/c?d&e=f#g"), "a%2Bb%2Fc%3Fd%26e%3Df%23g");
        assert_eq!(encode_component("it's (ok)!*~"), "it's%20(ok)!*~");
        assert_eq!(encode_component("Café"), "Caf%C3%A9");
    }

    #[test]
    fn builds_endpoints() {
        assert_eq!(activities_url(""), "/activities");
        assert_eq!(
            signup_url("", "Chess Club", "c@x.com"),
            "/activities/Chess%20Club/signup?email=c%40x.com"
        );
        assert_eq!(
            unregister_url("https://club.example", "Art & Craft", "a+1@x.com"),
            "https://club.example/activities/Art%20%26%20Craft/participants?email=a%2B1%40x.com"
        );
    }

    #[test]
    fn successful_signup_carries_message() {
        let reply = read_reply(200, r#"{"message":"Signed up c@x.com"}"#);
        assert_eq!(reply, Ok("Signed up c@x.com".to_string()));
    }

    #[test]
    fn error_reply_keeps_detail() {
        let err = read_reply(400, r#"{"detail":"Already signed up"}"#).unwrap_err();
        assert_eq!(err.detail(), Some("Already signed up"));
        assert_eq!(err.server_text(), Some("Already signed up"));
        assert!(!err.is_transport());
    }

    #[test]
    fn error_reply_without_detail_falls_back_to_message() {
        let err = read_reply(404, r#"{"message":"gone"}"#).unwrap_err();
        assert_eq!(err.detail(), None);
        assert_eq!(err.server_text(), Some("gone"));
    }

    #[test]
    fn structured_detail_is_not_text() {
        let body = r#"{"detail":[{"loc":["query","email"],"msg":"field required"}]}"#;
        let err = read_reply(422, body).unwrap_err();
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn malformed_bodies_count_as_transport() {
        let err = read_reply(200, "<html>oops</html>").unwrap_err();
        assert!(err.is_transport());
        let err = read_reply(500, "[1, 2]").unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn directory_reply() {
        let body = r#"{"Chess Club": {"description":"Think ahead","schedule":"Fridays","max_participants":10,"participants":["a@x.com","b@x.com"]}}"#;
        let directory = read_directory(200, body).unwrap();
        assert_eq!(directory.len(), 1);

        let err = read_directory(503, "Service Unavailable").unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 503,
                detail: None,
                message: None
            }
        );
        assert!(read_directory(200, r#"{"x": 1}"#).unwrap_err().is_transport());
    }
}
