//! In-memory stand-in for the external client API.
//!
//! Serves `/clientes` with the behavior the gateway expects from the real
//! upstream: generated ids, a 400 with field errors when `name` or `email`
//! is missing or the email has no `@`, 404 for unknown ids, and records
//! that carry more fields than the gateway exposes.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const REQUIRED_FIELDS: [&str; 2] = ["name", "email"];

pub type Db = Arc<RwLock<HashMap<String, Map<String, Value>>>>;

type Reply = (StatusCode, Json<Value>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/clientes", post(create_client))
        .route("/clientes/{id}", get(get_client).put(update_client))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_client(
    State(db): State<Db>,
    Json(mut input): Json<Map<String, Value>>,
) -> Reply {
    let errors = field_errors(&input);
    if !errors.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors })));
    }

    let id = Uuid::new_v4().to_string();
    input.insert("id".to_string(), Value::String(id.clone()));
    input
        .entry("status")
        .or_insert_with(|| Value::String("active".to_string()));
    db.write().await.insert(id, input.clone());
    (StatusCode::CREATED, Json(Value::Object(input)))
}

async fn get_client(State(db): State<Db>, Path(id): Path<String>) -> Reply {
    match db.read().await.get(&id) {
        Some(record) => (StatusCode::OK, Json(Value::Object(record.clone()))),
        None => not_found(),
    }
}

async fn update_client(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<Map<String, Value>>,
) -> Reply {
    let mut records = db.write().await;
    let Some(record) = records.get_mut(&id) else {
        return not_found();
    };
    for (key, value) in input {
        if key != "id" {
            record.insert(key, value);
        }
    }
    (StatusCode::OK, Json(Value::Object(record.clone())))
}

fn field_errors(input: &Map<String, Value>) -> Map<String, Value> {
    let mut errors = Map::new();
    for field in REQUIRED_FIELDS {
        if !input.contains_key(field) {
            errors.insert(field.to_string(), "is required".into());
        }
    }
    if let Some(email) = input.get("email") {
        if !email.as_str().is_some_and(|email| email.contains('@')) {
            errors.insert("email".to_string(), "is invalid".into());
        }
    }
    errors
}

fn not_found() -> Reply {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "not found"})))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn complete_input_has_no_field_errors() {
        let input = object(json!({"name": "Ana", "email": "ana@test.com"}));
        assert!(field_errors(&input).is_empty());
    }

    #[test]
    fn every_missing_field_is_reported() {
        let errors = field_errors(&Map::new());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name"], "is required");
        assert_eq!(errors["email"], "is required");
    }

    #[test]
    fn email_without_at_sign_is_invalid() {
        let errors = field_errors(&object(json!({"name": "Ana", "email": "ana"})));
        assert_eq!(Value::Object(errors), json!({"email": "is invalid"}));
    }

    #[test]
    fn only_absent_fields_are_reported() {
        let errors = field_errors(&object(json!({"name": "Ana"})));
        assert_eq!(Value::Object(errors), json!({"email": "is required"}));
    }
}
