//! Outbound calls to the external client API.

use std::sync::Arc;

use clientes_core::{read_response, HttpRequest, UpstreamFailure, UpstreamReply};
use serde_json::Value;
use tracing::{debug, warn};

use crate::transport::HttpTransport;

/// Issues one request per call, never retries, and leaves the meaning of
/// failure statuses to the caller.
#[derive(Clone)]
pub struct UpstreamClient {
    transport: Arc<dyn HttpTransport>,
}

impl UpstreamClient {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn post(&self, url: &str, body: &Value) -> Result<UpstreamReply, UpstreamFailure> {
        self.send(HttpRequest::post(url, body)).await
    }

    pub async fn get(&self, url: &str) -> Result<UpstreamReply, UpstreamFailure> {
        self.send(HttpRequest::get(url)).await
    }

    pub async fn put(&self, url: &str, body: &Value) -> Result<UpstreamReply, UpstreamFailure> {
        self.send(HttpRequest::put(url, body)).await
    }

    async fn send(&self, request: HttpRequest) -> Result<UpstreamReply, UpstreamFailure> {
        let method = request.method;
        let url = request.url.clone();
        debug!(%method, %url, "calling upstream");

        let response = self.transport.execute(request).await.map_err(|err| {
            warn!(%method, %url, timed_out = err.timed_out, error = %err, "upstream unreachable");
            err
        })?;

        debug!(%method, %url, status = response.status, "upstream responded");
        read_response(response)
    }
}
