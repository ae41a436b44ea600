//! Axum integration for the wedding RSVP service.
//!
//! Everything here is HTTP plumbing shared by the service binary and its
//! tests; none of it knows about RSVPs.
//!
//! # Request Flow
//!
//! 1. **Correlation ID** is read from `X-Correlation-ID` or generated
//! 2. **Extract** the JSON body with [`JsonBody`], rejecting bad input as 400
//! 3. **Handle** the request in the service crate
//! 4. **Map** failures to [`AppError`], which renders `{ "error", "code" }`
//!
//! # Example
//!
//! ```ignore
//! use wedding_rsvp_web::{AppError, JsonBody, correlation_id_layer};
//! use axum::{Router, routing::post, Json};
//!
//! async fn submit(JsonBody(form): JsonBody<Form>) -> Result<Json<Receipt>, AppError> {
//!     let receipt = save(form).await.map_err(|e| AppError::internal("Failed").with_source(e))?;
//!     Ok(Json(receipt))
//! }
//!
//! let app = Router::new()
//!     .route("/api/rsvp", post(submit))
//!     .layer(correlation_id_layer());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::JsonBody;
pub use middleware::{CORRELATION_ID_HEADER, CorrelationId, correlation_id_layer};
