//! Classification of upstream responses.
//!
//! # Design
//! `read_response` only ever sees a response that actually arrived, so
//! "the upstream answered with a failure status" (`Status`) and "nothing
//! answered" (`Connection`) are separate variants. No status code gets
//! special meaning here; the service decides what a 400 or 404 means for
//! each operation.

use serde_json::Value;
use thiserror::Error;

use crate::http::{HttpResponse, TransportError};

/// A successful (2xx) upstream reply with its parsed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

/// Why an upstream call did not produce a usable reply.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UpstreamFailure {
    /// No response was received.
    #[error("{0}")]
    Connection(#[from] TransportError),

    /// The upstream answered with a non-2xx status. `body` holds the error
    /// body when it was valid JSON.
    #[error("upstream responded with HTTP {status}")]
    Status { status: u16, body: Option<Value> },

    /// The upstream answered 2xx but the body was not JSON.
    #[error("upstream returned an invalid JSON body: {0}")]
    InvalidBody(String),
}

/// Turn a raw upstream response into a parsed reply or a failure.
///
/// An empty 2xx body parses as `null`.
pub fn read_response(response: HttpResponse) -> Result<UpstreamReply, UpstreamFailure> {
    if !(200..300).contains(&response.status) {
        return Err(UpstreamFailure::Status {
            status: response.status,
            body: serde_json::from_str(&response.body).ok(),
        });
    }
    if response.body.trim().is_empty() {
        return Ok(UpstreamReply {
            status: response.status,
            body: Value::Null,
        });
    }
    let body = serde_json::from_str(&response.body)
        .map_err(|e| UpstreamFailure::InvalidBody(e.to_string()))?;
    Ok(UpstreamReply {
        status: response.status,
        body,
    })
}
