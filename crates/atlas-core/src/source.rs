//! The `CountryDataSource` trait: the two upstream fetches.
//!
//! Implemented over HTTP by `atlas-fetch`; integration tests substitute a
//! canned stub. Both fetches are independent and the orchestrator issues them
//! concurrently.

use std::{collections::HashMap, future::Future};

use crate::{country::RawCountry, error::Error};

/// Abstraction over the two external datasets the refresh pipeline joins.
///
/// Each method fails with [`Error::DataSourceUnavailable`] when the upstream
/// call errors or times out; that kind short-circuits the whole refresh.
pub trait CountryDataSource: Send + Sync {
  /// Fetch the full country list from the countries source.
  fn fetch_countries(
    &self,
  ) -> impl Future<Output = Result<Vec<RawCountry>, Error>> + Send + '_;

  /// Fetch the USD-based exchange-rate table, keyed by currency code.
  fn fetch_exchange_rates(
    &self,
  ) -> impl Future<Output = Result<HashMap<String, f64>, Error>> + Send + '_;
}
