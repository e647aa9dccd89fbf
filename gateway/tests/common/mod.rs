#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::{self, Request};
use axum::Router;
use clientes_core::{HttpRequest, HttpResponse, TransportError};
use clientes_gateway::{app, ClientesService, Config, HttpTransport};
use http_body_util::BodyExt;
use serde_json::Value;

pub const BASE_URL: &str = "https://mock-api.com";

/// Test double that records every request and answers with one canned reply.
pub struct StubTransport {
    reply: Result<HttpResponse, TransportError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn responding(status: u16, body: Value) -> Arc<Self> {
        Self::responding_text(status, &body.to_string())
    }

    pub fn responding_text(status: u16, body: &str) -> Arc<Self> {
        Self::with_reply(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Self::with_reply(Err(TransportError::new(message)))
    }

    fn with_reply(reply: Result<HttpResponse, TransportError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

pub fn service_with(base_url: &str, transport: Arc<StubTransport>) -> ClientesService {
    let config = Config::new(base_url).unwrap();
    ClientesService::new(&config, transport)
}

pub fn app_with(transport: Arc<StubTransport>) -> Router {
    app(service_with(BASE_URL, transport))
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}
