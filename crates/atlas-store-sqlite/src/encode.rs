//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. Populations are stored as
//! SQLite INTEGER and never negative by construction.

use atlas_core::country::Country;
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `countries` row, column order:
/// id, name, capital, region, population, currency_code, exchange_rate,
/// estimated_gdp, flag_url, last_refreshed_at.
pub struct RawCountryRow {
  pub id:                i64,
  pub name:              String,
  pub capital:           Option<String>,
  pub region:            Option<String>,
  pub population:        i64,
  pub currency_code:     Option<String>,
  pub exchange_rate:     Option<f64>,
  pub estimated_gdp:     Option<f64>,
  pub flag_url:          Option<String>,
  pub last_refreshed_at: String,
}

impl RawCountryRow {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawCountryRow {
      id:                row.get(0)?,
      name:              row.get(1)?,
      capital:           row.get(2)?,
      region:            row.get(3)?,
      population:        row.get(4)?,
      currency_code:     row.get(5)?,
      exchange_rate:     row.get(6)?,
      estimated_gdp:     row.get(7)?,
      flag_url:          row.get(8)?,
      last_refreshed_at: row.get(9)?,
    })
  }

  pub fn into_country(self) -> Result<Country> {
    Ok(Country {
      id:                self.id,
      name:              self.name,
      capital:           self.capital,
      region:            self.region,
      population:        self.population.max(0) as u64,
      currency_code:     self.currency_code,
      exchange_rate:     self.exchange_rate,
      estimated_gdp:     self.estimated_gdp,
      flag_url:          self.flag_url,
      last_refreshed_at: decode_dt(&self.last_refreshed_at)?,
    })
  }
}
