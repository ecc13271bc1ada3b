//! Handlers for `/countries` list/get/delete.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/countries` | Optional `?region=`, `?currency=`, `?sort=` |
//! | `GET`    | `/countries/:name` | 400 blank name, 404 unknown |
//! | `DELETE` | `/countries/:name` | Same matching as GET |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::json;

use atlas_core::{
  country::Country,
  source::CountryDataSource,
  store::{CountryQuery, CountryStore, SortKey},
};

use crate::{AppState, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub region:   Option<String>,
  pub currency: Option<String>,
  pub sort:     Option<String>,
}

/// `GET /countries[?region=&currency=&sort=]`
pub async fn list<S, F>(
  State(state): State<AppState<S, F>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Country>>, ApiError>
where
  S: CountryStore,
  F: CountryDataSource,
{
  let query = CountryQuery {
    region:        params.region,
    currency_code: params.currency,
    // Unrecognized sort values fall back to insertion order, not an error.
    sort:          params.sort.as_deref().and_then(SortKey::parse),
  };

  let countries = state
    .store
    .list_countries(query)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(countries))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /countries/:name`
pub async fn get_one<S, F>(
  State(state): State<AppState<S, F>>,
  Path(name): Path<String>,
) -> Result<Json<Country>, ApiError>
where
  S: CountryStore,
  F: CountryDataSource,
{
  require_name(&name)?;

  let country = state
    .store
    .get_country(&name)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("Country not found".to_string()))?;
  Ok(Json(country))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /countries/:name`
pub async fn delete_one<S, F>(
  State(state): State<AppState<S, F>>,
  Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: CountryStore,
  F: CountryDataSource,
{
  require_name(&name)?;

  let deleted = state
    .store
    .delete_country(&name)
    .await
    .map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::NotFound("Country not found".to_string()));
  }
  Ok(Json(json!({ "message": "Country deleted successfully" })))
}

/// Blank or whitespace-only names are a validation error; the raw value is
/// still what gets matched against the store.
fn require_name(raw: &str) -> Result<(), ApiError> {
  if raw.trim().is_empty() {
    return Err(ApiError::Validation("name".to_string()));
  }
  Ok(())
}
