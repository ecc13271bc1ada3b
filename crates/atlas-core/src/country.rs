//! Country records: the stored shape and the raw upstream shapes.
//!
//! `Country` is what the store returns and the API serves. `RawCountry` is
//! the wire shape of one entry from the countries source (RestCountries v2);
//! the merge engine turns a `RawCountry` plus the rate table into a
//! `NewCountry` ready for upsert.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored country row as served over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
  pub id:                i64,
  pub name:              String,
  pub capital:           Option<String>,
  pub region:            Option<String>,
  pub population:        u64,
  pub currency_code:     Option<String>,
  pub exchange_rate:     Option<f64>,
  pub estimated_gdp:     Option<f64>,
  pub flag_url:          Option<String>,
  pub last_refreshed_at: DateTime<Utc>,
}

/// A country ready to be upserted. The store assigns `id` and
/// `last_refreshed_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCountry {
  pub name:          String,
  pub capital:       Option<String>,
  pub region:        Option<String>,
  pub population:    u64,
  pub currency_code: Option<String>,
  pub exchange_rate: Option<f64>,
  pub estimated_gdp: Option<f64>,
  pub flag_url:      Option<String>,
}

/// One country as returned by the countries source.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountry {
  pub name:       String,
  #[serde(default)]
  pub capital:    Option<String>,
  #[serde(default)]
  pub region:     Option<String>,
  #[serde(default)]
  pub population: u64,
  #[serde(default)]
  pub flag:       Option<String>,
  #[serde(default)]
  pub currencies: Vec<RawCurrency>,
}

/// One currency entry attached to a raw country. Source data carries 0 or 1
/// per country, but the shape allows more; only the first is used.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCurrency {
  #[serde(default)]
  pub code:   Option<String>,
  #[serde(default)]
  pub name:   Option<String>,
  #[serde(default)]
  pub symbol: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn raw_country_deserializes_v2_payload() {
    let json = r#"{
      "name": "Japan",
      "capital": "Tokyo",
      "region": "Asia",
      "population": 125000000,
      "flag": "https://flagcdn.com/jp.svg",
      "currencies": [{"code": "JPY", "name": "Japanese yen", "symbol": "¥"}]
    }"#;

    let raw: RawCountry = serde_json::from_str(json).unwrap();
    assert_eq!(raw.name, "Japan");
    assert_eq!(raw.population, 125_000_000);
    assert_eq!(raw.currencies.len(), 1);
    assert_eq!(raw.currencies[0].code.as_deref(), Some("JPY"));
  }

  #[test]
  fn raw_country_tolerates_missing_optional_fields() {
    let json = r#"{"name": "Antarctica", "population": 1000}"#;

    let raw: RawCountry = serde_json::from_str(json).unwrap();
    assert_eq!(raw.name, "Antarctica");
    assert!(raw.capital.is_none());
    assert!(raw.region.is_none());
    assert!(raw.flag.is_none());
    assert!(raw.currencies.is_empty());
  }
}
