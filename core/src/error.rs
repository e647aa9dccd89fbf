//! Error taxonomy surfaced to API callers.
//!
//! # Design
//! Every typed failure is an `AppError`: a kind (which fixes the status
//! code), a human-readable message, and an optional payload of extra keys
//! such as upstream validation details. Errors are raised where they are
//! detected and rendered once, at the top of the HTTP layer.

use serde_json::{Map, Value};
use thiserror::Error;

/// Category of a typed failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input, detected locally or reported by the upstream as a 400.
    Validation,
    /// The upstream has no such resource.
    NotFound,
    /// The upstream answered with an unexpected failure.
    Upstream,
    /// The upstream could not be reached at all.
    Connectivity,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Upstream => 502,
            ErrorKind::Connectivity => 503,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    pub payload: Option<Map<String, Value>>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            payload: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Upstream, message)
    }

    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Connectivity, message)
    }

    /// Attach extra keys to the rendered body. Only JSON objects carry keys;
    /// any other value is ignored.
    pub fn with_payload(mut self, payload: Option<Value>) -> Self {
        if let Some(Value::Object(map)) = payload {
            self.payload = Some(map);
        }
        self
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// The uniform error body: the payload's keys, then `message`, which
    /// always wins over a payload key of the same name.
    pub fn to_body(&self) -> Value {
        let mut body = self.payload.clone().unwrap_or_default();
        body.insert("message".to_string(), Value::String(self.message.clone()));
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn status_codes_follow_kind() {
        assert_eq!(AppError::validation("x").status_code(), 400);
        assert_eq!(AppError::not_found("x").status_code(), 404);
        assert_eq!(AppError::upstream("x").status_code(), 502);
        assert_eq!(AppError::connectivity("x").status_code(), 503);
    }

    #[test]
    fn body_without_payload_is_just_message() {
        let err = AppError::not_found("client not found");
        assert_eq!(err.to_body(), json!({"message": "client not found"}));
    }

    #[test]
    fn payload_keys_are_merged_under_message() {
        let err = AppError::validation("upstream validation error")
            .with_payload(Some(json!({"errors": {"email": "invalid"}})));
        assert_eq!(
            err.to_body(),
            json!({
                "errors": {"email": "invalid"},
                "message": "upstream validation error",
            })
        );
    }

    #[test]
    fn message_overrides_payload_message() {
        let err = AppError::validation("ours").with_payload(Some(json!({"message": "theirs"})));
        assert_eq!(err.to_body(), json!({"message": "ours"}));
    }

    #[test]
    fn non_object_payload_is_dropped() {
        let err = AppError::validation("bad").with_payload(Some(json!(["a", "b"])));
        assert!(err.payload.is_none());
        assert_eq!(err.to_body(), json!({"message": "bad"}));
    }

    #[test]
    fn displays_message() {
        let err = AppError::connectivity("connection error: refused");
        assert_eq!(err.to_string(), "connection error: refused");
    }
}
