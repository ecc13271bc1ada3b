//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! The boundary taxonomy: validation (400), not-found (404), upstream source
//! unavailable (503), everything else internal (500). Internal detail is
//! logged, never returned to the caller.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A required path parameter is missing or blank; carries the field name.
  #[error("validation failed: {0} is required")]
  Validation(String),

  #[error("not found: {0}")]
  NotFound(String),

  /// An external data source could not be reached; carries the upstream
  /// message as detail.
  #[error("external data source unavailable: {0}")]
  Unavailable(String),

  #[error("internal error: {0}")]
  Internal(String),
}

impl ApiError {
  /// Wrap a store error; the detail stays server-side.
  pub fn store(e: impl std::error::Error) -> Self { ApiError::Internal(e.to_string()) }
}

impl From<atlas_core::Error> for ApiError {
  fn from(e: atlas_core::Error) -> Self {
    match e {
      atlas_core::Error::DataSourceUnavailable { .. } => ApiError::Unavailable(e.to_string()),
      other => ApiError::Internal(other.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::Validation(field) => (
        StatusCode::BAD_REQUEST,
        json!({ "error": "Validation failed", "details": { (field.as_str()): "is required" } }),
      ),
      ApiError::NotFound(message) => {
        (StatusCode::NOT_FOUND, json!({ "error": message }))
      }
      ApiError::Unavailable(detail) => (
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "error": "External data source unavailable", "details": detail }),
      ),
      ApiError::Internal(detail) => {
        tracing::error!(%detail, "request failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          json!({ "error": "Internal server error" }),
        )
      }
    };
    (status, Json(body)).into_response()
  }
}
