//! HTTP implementation of [`CountryDataSource`].
//!
//! One `reqwest` client, two upstream endpoints, a bounded per-request
//! timeout. Any transport, status, or decode failure maps to
//! [`Error::DataSourceUnavailable`] carrying the upstream message; retry and
//! backoff are deliberately out of scope.

use std::{collections::HashMap, time::Duration};

use atlas_core::{Error, country::RawCountry, source::CountryDataSource};
use serde::Deserialize;

pub const DEFAULT_COUNTRIES_URL: &str =
  "https://restcountries.com/v2/all?fields=name,capital,region,population,flag,currencies";
pub const DEFAULT_RATES_URL: &str = "https://open.er-api.com/v6/latest/USD";

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

const COUNTRIES_SOURCE: &str = "RestCountries API";
const RATES_SOURCE: &str = "Exchange Rate API";

// ─── Fetcher ─────────────────────────────────────────────────────────────────

/// HTTP fetcher for the countries and exchange-rate sources.
#[derive(Clone)]
pub struct HttpFetcher {
  client:        reqwest::Client,
  countries_url: String,
  rates_url:     String,
}

/// Envelope of the exchange-rate source response; only `rates` matters.
#[derive(Debug, Deserialize)]
struct RatesResponse {
  rates: HashMap<String, f64>,
}

impl HttpFetcher {
  pub fn new(
    countries_url: impl Into<String>,
    rates_url: impl Into<String>,
  ) -> reqwest::Result<Self> {
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    Ok(Self {
      client,
      countries_url: countries_url.into(),
      rates_url: rates_url.into(),
    })
  }

  async fn get_json<T: serde::de::DeserializeOwned>(
    &self,
    url: &str,
    source: &'static str,
  ) -> Result<T, Error> {
    tracing::debug!(url, "fetching upstream dataset");
    let response = self
      .client
      .get(url)
      .send()
      .await
      .and_then(|r| r.error_for_status())
      .map_err(|e| Error::unavailable(source, e.to_string()))?;

    response
      .json()
      .await
      .map_err(|e| Error::unavailable(source, e.to_string()))
  }
}

impl CountryDataSource for HttpFetcher {
  async fn fetch_countries(&self) -> Result<Vec<RawCountry>, Error> {
    self.get_json(&self.countries_url, COUNTRIES_SOURCE).await
  }

  async fn fetch_exchange_rates(&self) -> Result<HashMap<String, f64>, Error> {
    let envelope: RatesResponse = self.get_json(&self.rates_url, RATES_SOURCE).await?;
    Ok(envelope.rates)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rates_response_extracts_rate_table() {
    let json = r#"{
      "result": "success",
      "base_code": "USD",
      "rates": {"USD": 1.0, "JPY": 147.52, "EUR": 0.92}
    }"#;

    let envelope: RatesResponse = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.rates.len(), 3);
    assert_eq!(envelope.rates.get("JPY"), Some(&147.52));
  }

  #[tokio::test]
  async fn unreachable_source_maps_to_unavailable() {
    // Port 1 on loopback refuses immediately: the failure must surface as
    // DataSourceUnavailable, never a panic or generic error.
    let fetcher =
      HttpFetcher::new("http://127.0.0.1:1/none", "http://127.0.0.1:1/none").unwrap();

    let err = fetcher.fetch_countries().await.unwrap_err();
    assert!(matches!(err, Error::DataSourceUnavailable { ref source_name, .. }
      if source_name == "RestCountries API"));

    let err = fetcher.fetch_exchange_rates().await.unwrap_err();
    assert!(matches!(err, Error::DataSourceUnavailable { ref source_name, .. }
      if source_name == "Exchange Rate API"));
  }
}
