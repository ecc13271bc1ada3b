//! Handler for `GET /countries/image`.

use axum::{
  extract::State,
  http::header,
  response::{IntoResponse, Response},
};

use atlas_core::{source::CountryDataSource, store::CountryStore};

use crate::{AppState, error::ApiError};

/// `GET /countries/image`: serve the summary artifact bytes.
///
/// 404 until a refresh has generated the file.
pub async fn handler<S, F>(
  State(state): State<AppState<S, F>>,
) -> Result<Response, ApiError>
where
  S: CountryStore,
  F: CountryDataSource,
{
  if !state.artifact.exists() {
    return Err(ApiError::NotFound("Summary image not found".to_string()));
  }

  let bytes = tokio::fs::read(state.artifact.path())
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

  Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response())
}
