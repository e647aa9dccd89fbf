//! Client resource operations on top of the upstream client.
//!
//! Each operation is one upstream round-trip. Upstream failures are mapped
//! to `AppError` here, because only this layer knows what a 400 or 404
//! means for a given endpoint.

use std::sync::Arc;

use clientes_core::{url_builder, AppError, ClientRecord, UpstreamFailure};
use serde_json::{Map, Value};
use tracing::info;

use crate::config::Config;
use crate::transport::HttpTransport;
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct ClientesService {
    base_url: Arc<str>,
    upstream: UpstreamClient,
}

impl ClientesService {
    pub fn new(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: Arc::from(config.external_api_url.as_str()),
            upstream: UpstreamClient::new(transport),
        }
    }

    /// Forward a new client to the upstream and return its body verbatim.
    pub async fn create_client(&self, data: Map<String, Value>) -> Result<Value, AppError> {
        let url = url_builder::build(&self.base_url, None);
        match self.upstream.post(&url, &Value::Object(data)).await {
            Ok(reply) => {
                info!(status = reply.status, "client created upstream");
                Ok(reply.body)
            }
            Err(UpstreamFailure::Status { status: 400, body }) => {
                Err(AppError::validation("upstream validation error").with_payload(body))
            }
            Err(failure) => Err(unexpected(failure)),
        }
    }

    /// Fetch a client, keeping only `id`, `name` and `email`.
    pub async fn get_client(&self, id: &str) -> Result<ClientRecord, AppError> {
        let url = url_builder::build(&self.base_url, Some(id));
        match self.upstream.get(&url).await {
            Ok(reply) => Ok(ClientRecord::project(&reply.body)),
            Err(failure) => Err(resource_failure(failure)),
        }
    }

    /// Forward a (possibly partial) update and return the upstream body verbatim.
    pub async fn update_client(
        &self,
        id: &str,
        data: Map<String, Value>,
    ) -> Result<Value, AppError> {
        let url = url_builder::build(&self.base_url, Some(id));
        match self.upstream.put(&url, &Value::Object(data)).await {
            Ok(reply) => {
                info!(%id, "client updated upstream");
                Ok(reply.body)
            }
            Err(failure) => Err(resource_failure(failure)),
        }
    }
}

/// Mapping for operations addressing a single existing client.
fn resource_failure(failure: UpstreamFailure) -> AppError {
    match failure {
        UpstreamFailure::Status { status: 404, .. } => AppError::not_found("client not found"),
        other => unexpected(other),
    }
}

fn unexpected(failure: UpstreamFailure) -> AppError {
    match failure {
        UpstreamFailure::Connection(err) => AppError::connectivity(format!("connection error: {err}")),
        other => AppError::upstream(format!("external API error: {other}")),
    }
}
