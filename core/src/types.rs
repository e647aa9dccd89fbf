//! The client record as returned by the read endpoint.
//!
//! # Design
//! The gateway owns no data; this is a projection of whatever the upstream
//! returns. `id` stays a raw JSON value since the upstream may use strings
//! or numbers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Exactly the fields exposed by `GET /clientes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientRecord {
    pub id: Value,
    pub name: Value,
    pub email: Value,
}

impl ClientRecord {
    /// Keep `id`, `name` and `email`, dropping everything else. Missing
    /// fields (or a body that is not an object) become `null`.
    pub fn project(upstream: &Value) -> Self {
        let field = |key: &str| upstream.get(key).cloned().unwrap_or(Value::Null);
        Self {
            id: field("id"),
            name: field("name"),
            email: field("email"),
        }
    }
}
