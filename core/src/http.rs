//! HTTP transport types for the upstream round-trip.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and classifies `HttpResponse` values
//! without touching the network; the gateway's transport executes the I/O.
//! A transport that gets no response at all reports a `TransportError`
//! instead of fabricating an `HttpResponse`.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// HTTP method for an upstream request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Every request is sent with `content-type: application/json`, including
/// bodiless GETs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url.into(), None)
    }

    pub fn post(url: impl Into<String>, body: &Value) -> Self {
        Self::new(HttpMethod::Post, url.into(), Some(body.to_string()))
    }

    pub fn put(url: impl Into<String>, body: &Value) -> Self {
        Self::new(HttpMethod::Put, url.into(), Some(body.to_string()))
    }

    fn new(method: HttpMethod, url: String, body: Option<String>) -> Self {
        Self {
            method,
            url,
            headers: json_headers(),
            body,
        }
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// No response was received: DNS failure, refused connection, timeout.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    pub timed_out: bool,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn get_has_json_header_and_no_body() {
        let req = HttpRequest::get("http://h/clientes/1");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://h/clientes/1");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn post_serializes_body() {
        let req = HttpRequest::post("http://h/clientes", &json!({"name": "Ana"}));
        assert_eq!(req.method, HttpMethod::Post);
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"name": "Ana"}));
    }

    #[test]
    fn put_serializes_body() {
        let req = HttpRequest::put("http://h/clientes/7", &json!({"email": "a@b.c"}));
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.body.as_deref(), Some(r#"{"email":"a@b.c"}"#));
    }

    #[test]
    fn method_display() {
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
    }

    #[test]
    fn transport_error_displays_message() {
        let err = TransportError::timeout("operation timed out");
        assert!(err.timed_out);
        assert_eq!(err.to_string(), "operation timed out");
    }
}
