//! Handler for `POST /countries/refresh`.

use axum::{Json, extract::State};

use atlas_core::{source::CountryDataSource, store::CountryStore};

use crate::{
  AppState,
  error::ApiError,
  pipeline::{self, RefreshOutcome},
};

/// `POST /countries/refresh`: run the full fetch/merge/persist pipeline.
///
/// 503 when either upstream source is unavailable (nothing written), 500 for
/// any other pipeline failure.
pub async fn handler<S, F>(
  State(state): State<AppState<S, F>>,
) -> Result<Json<RefreshOutcome>, ApiError>
where
  S: CountryStore,
  F: CountryDataSource,
{
  let outcome = pipeline::refresh_countries(
    state.store.as_ref(),
    state.fetcher.as_ref(),
    state.artifact.as_ref(),
  )
  .await?;
  Ok(Json(outcome))
}
