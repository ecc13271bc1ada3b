//! The `CountryStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `atlas-store-sqlite`).
//! Higher layers (`atlas-server`) depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::country::{Country, NewCountry};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Sort keys accepted by [`CountryStore::list_countries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  GdpDesc,
  GdpAsc,
  PopulationDesc,
  PopulationAsc,
  NameAsc,
  NameDesc,
}

impl SortKey {
  /// Parse a query-string sort value, case-insensitively. Unknown values
  /// yield `None` so callers fall back to insertion order instead of
  /// erroring.
  pub fn parse(s: &str) -> Option<Self> {
    match s.to_ascii_lowercase().as_str() {
      "gdp_desc" => Some(SortKey::GdpDesc),
      "gdp_asc" => Some(SortKey::GdpAsc),
      "population_desc" => Some(SortKey::PopulationDesc),
      "population_asc" => Some(SortKey::PopulationAsc),
      "name_asc" => Some(SortKey::NameAsc),
      "name_desc" => Some(SortKey::NameDesc),
      _ => None,
    }
  }
}

/// Parameters for [`CountryStore::list_countries`].
#[derive(Debug, Clone, Default)]
pub struct CountryQuery {
  /// Case-insensitive exact match on region.
  pub region:        Option<String>,
  /// Case-insensitive exact match on currency code.
  pub currency_code: Option<String>,
  /// `None` sorts by insertion id ascending.
  pub sort:          Option<SortKey>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an Atlas country store backend.
///
/// Name matching is case-insensitive everywhere: an upsert for "japan"
/// updates the existing "Japan" row (same id, stored casing kept).
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CountryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert or update a country by case-insensitive name and return the
  /// stored row. `last_refreshed_at` is set by the store.
  fn upsert_country(
    &self,
    input: NewCountry,
  ) -> impl Future<Output = Result<Country, Self::Error>> + Send + '_;

  /// Delete a country by case-insensitive name. Returns whether a row was
  /// removed.
  fn delete_country<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// List countries, optionally filtered and sorted per `query`.
  fn list_countries(
    &self,
    query: CountryQuery,
  ) -> impl Future<Output = Result<Vec<Country>, Self::Error>> + Send + '_;

  /// Retrieve a country by case-insensitive name. `None` if not found.
  fn get_country<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Country>, Self::Error>> + Send + 'a;

  /// Total number of stored countries.
  fn count_countries(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Top `limit` countries by estimated GDP, descending, nulls excluded.
  fn top_countries_by_gdp(
    &self,
    limit: u32,
  ) -> impl Future<Output = Result<Vec<Country>, Self::Error>> + Send + '_;

  // ── Refresh metadata ──────────────────────────────────────────────────

  /// Timestamp of the most recent successful refresh, if any.
  fn last_refreshed_at(
    &self,
  ) -> impl Future<Output = Result<Option<DateTime<Utc>>, Self::Error>> + Send + '_;

  /// Overwrite the refresh timestamp.
  fn set_last_refreshed_at(
    &self,
    at: DateTime<Utc>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
