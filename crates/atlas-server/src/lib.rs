//! Atlas HTTP server.
//!
//! Exposes an axum [`Router`] over any [`CountryStore`] + [`CountryDataSource`]
//! pair: the refresh pipeline trigger, list/get/delete reads, status, and the
//! summary image. TLS and deployment concerns are the caller's responsibility.

pub mod error;
pub mod handlers;
pub mod pipeline;

use std::{path::PathBuf, sync::Arc};

use atlas_artifact::SummaryArtifact;
use atlas_core::{source::CountryDataSource, store::CountryStore};
use axum::{
  Json, Router,
  http::StatusCode,
  response::IntoResponse,
  routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` layered
/// under `ATLAS_*` environment variables. Every field defaults, so the
/// server boots with no config file at all.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                String,
  #[serde(default = "default_port")]
  pub port:                u16,
  #[serde(default = "default_db_path")]
  pub db_path:             PathBuf,
  #[serde(default = "default_countries_url")]
  pub countries_url:       String,
  #[serde(default = "default_rates_url")]
  pub rates_url:           String,
  #[serde(default = "default_cache_dir")]
  pub cache_dir:           PathBuf,
  /// Force the plain-text artifact renderer even when bitmap support is
  /// compiled in.
  #[serde(default)]
  pub placeholder_artifact: bool,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }
fn default_db_path() -> PathBuf { PathBuf::from("atlas.db") }
fn default_countries_url() -> String { atlas_fetch::DEFAULT_COUNTRIES_URL.to_string() }
fn default_rates_url() -> String { atlas_fetch::DEFAULT_RATES_URL.to_string() }
fn default_cache_dir() -> PathBuf { PathBuf::from("./cache") }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, F> {
  pub store:    Arc<S>,
  pub fetcher:  Arc<F>,
  pub artifact: Arc<SummaryArtifact>,
}

// Manual impl: `Arc` clones regardless of whether S/F do.
impl<S, F> Clone for AppState<S, F> {
  fn clone(&self) -> Self {
    Self {
      store:    self.store.clone(),
      fetcher:  self.fetcher.clone(),
      artifact: self.artifact.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the Atlas API.
pub fn router<S, F>(state: AppState<S, F>) -> Router
where
  S: CountryStore + 'static,
  F: CountryDataSource + 'static,
{
  Router::new()
    .route("/", get(index))
    .route("/status", get(handlers::status::handler::<S, F>))
    .route("/countries", get(handlers::countries::list::<S, F>))
    .route("/countries/refresh", post(handlers::refresh::handler::<S, F>))
    .route("/countries/image", get(handlers::image::handler::<S, F>))
    .route(
      "/countries/{name}",
      get(handlers::countries::get_one::<S, F>)
        .delete(handlers::countries::delete_one::<S, F>),
    )
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

/// `GET /`: service index.
async fn index() -> impl IntoResponse {
  Json(json!({
    "message": "Country Currency & Exchange API",
    "version": env!("CARGO_PKG_VERSION"),
    "endpoints": {
      "POST /countries/refresh": "Refresh country data from external APIs",
      "GET /countries": "Get all countries (supports ?region=, ?currency=, ?sort=)",
      "GET /countries/:name": "Get specific country by name",
      "DELETE /countries/:name": "Delete a country",
      "GET /status": "Get API status",
      "GET /countries/image": "Get summary image"
    }
  }))
}

async fn not_found() -> impl IntoResponse {
  (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}

// ─── Integration tests ────────────────────────────────────────────────────────
