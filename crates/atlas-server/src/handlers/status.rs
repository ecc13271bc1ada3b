//! Handler for `GET /status`.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use atlas_core::{source::CountryDataSource, store::CountryStore};

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct StatusResponse {
  pub total_countries:   u64,
  /// `None` (serialised as null) until the first successful refresh.
  pub last_refreshed_at: Option<DateTime<Utc>>,
}

/// `GET /status`
pub async fn handler<S, F>(
  State(state): State<AppState<S, F>>,
) -> Result<Json<StatusResponse>, ApiError>
where
  S: CountryStore,
  F: CountryDataSource,
{
  let total_countries = state
    .store
    .count_countries()
    .await
    .map_err(ApiError::store)?;
  let last_refreshed_at = state
    .store
    .last_refreshed_at()
    .await
    .map_err(ApiError::store)?;

  Ok(Json(StatusResponse { total_countries, last_refreshed_at }))
}
