//! HTTP endpoints for the client resource.

use axum::body::Bytes;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use clientes_core::{AppError, ClientRecord};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::ApiError;
use crate::service::ClientesService;

/// Checked in this order; the first one missing is reported.
pub const REQUIRED_FIELDS: [&str; 2] = ["name", "email"];

pub fn router() -> Router<ClientesService> {
    Router::new()
        .route("/clientes", post(create_client))
        .route("/clientes/{id}", get(get_client).put(update_client))
}

/// A request body that is a non-empty JSON object, or `None` for anything
/// else: no body, malformed JSON, a non-object value, or `{}`.
///
/// The content type is not checked.
#[derive(Debug)]
pub struct JsonObject(pub Option<Map<String, Value>>);

impl JsonObject {
    fn require(self) -> Result<Map<String, Value>, ApiError> {
        self.0
            .ok_or_else(|| AppError::validation("no data provided").into())
    }
}

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            debug!(%rejection, "unreadable request body");
            ApiError::BadRequest
        })?;
        let object = match serde_json::from_slice(&bytes) {
            Ok(Value::Object(map)) if !map.is_empty() => Some(map),
            _ => None,
        };
        Ok(Self(object))
    }
}

async fn create_client(
    State(service): State<ClientesService>,
    body: JsonObject,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let data = body.require()?;
    if let Some(field) = REQUIRED_FIELDS.iter().find(|field| !data.contains_key(**field)) {
        return Err(AppError::validation(format!("missing required field: {field}")).into());
    }

    let created = service.create_client(data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_client(
    State(service): State<ClientesService>,
    Path(id): Path<String>,
) -> Result<Json<ClientRecord>, ApiError> {
    Ok(Json(service.get_client(&id).await?))
}

async fn update_client(
    State(service): State<ClientesService>,
    Path(id): Path<String>,
    body: JsonObject,
) -> Result<Json<Value>, ApiError> {
    let data = body.require()?;
    Ok(Json(service.update_client(&id, data).await?))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
