//! I/O-free core of the clientes gateway.
//!
//! # Overview
//! Builds upstream URLs and `HttpRequest` values, classifies `HttpResponse`
//! values, and defines the error taxonomy surfaced to API callers. The
//! gateway crate executes the actual HTTP round-trip, keeping this crate
//! deterministic and testable.
//!
//! # Design
//! - `url_builder::build` is the only place that joins the base URL and ids.
//! - `upstream::read_response` turns a raw response into either a parsed
//!   JSON reply or an `UpstreamFailure`. "No response at all" never reaches
//!   it; that case is a `TransportError` produced by the transport.
//! - `AppError` carries kind, message and optional payload, and knows how
//!   to render itself as the uniform JSON error body.

pub mod error;
pub mod http;
pub mod types;
pub mod upstream;
pub mod url_builder;

pub use error::{AppError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse, TransportError};
pub use types::ClientRecord;
pub use upstream::{read_response, UpstreamFailure, UpstreamReply};
