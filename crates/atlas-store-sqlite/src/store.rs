//! [`SqliteStore`]: the SQLite implementation of [`CountryStore`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;

use atlas_core::{
  country::{Country, NewCountry},
  store::{CountryQuery, CountryStore, SortKey},
};

use crate::{
  Error, Result,
  encode::{RawCountryRow, encode_dt},
  schema::SCHEMA,
};

const COUNTRY_COLUMNS: &str = "id, name, capital, region, population, currency_code, \
                               exchange_rate, estimated_gdp, flag_url, last_refreshed_at";

// ─── Store ───────────────────────────────────────────────────────────────────

/// An Atlas country store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// ORDER BY clause for a list query. `None` (and unknown sort values, already
/// folded to `None` by the caller) fall back to insertion order. SQLite sorts
/// NULL below every value, so `gdp_desc` puts null-GDP rows last.
fn order_clause(sort: Option<SortKey>) -> &'static str {
  match sort {
    Some(SortKey::GdpDesc) => "estimated_gdp DESC",
    Some(SortKey::GdpAsc) => "estimated_gdp ASC",
    Some(SortKey::PopulationDesc) => "population DESC",
    Some(SortKey::PopulationAsc) => "population ASC",
    Some(SortKey::NameAsc) => "name ASC",
    Some(SortKey::NameDesc) => "name DESC",
    None => "id ASC",
  }
}

// ─── CountryStore impl ───────────────────────────────────────────────────────

impl CountryStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn upsert_country(&self, input: NewCountry) -> Result<Country> {
    // The name column collates NOCASE, so the conflict target matches
    // case-insensitively; an update keeps the originally stored casing.
    let at_str = encode_dt(Utc::now());
    let population = input.population as i64;

    let raw: RawCountryRow = self
      .conn
      .call(move |conn| {
        let row = conn.query_row(
          &format!(
            "INSERT INTO countries (
               name, capital, region, population, currency_code,
               exchange_rate, estimated_gdp, flag_url, last_refreshed_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(name) DO UPDATE SET
               capital           = excluded.capital,
               region            = excluded.region,
               population        = excluded.population,
               currency_code     = excluded.currency_code,
               exchange_rate     = excluded.exchange_rate,
               estimated_gdp     = excluded.estimated_gdp,
               flag_url          = excluded.flag_url,
               last_refreshed_at = excluded.last_refreshed_at
             RETURNING {COUNTRY_COLUMNS}"
          ),
          rusqlite::params![
            input.name,
            input.capital,
            input.region,
            population,
            input.currency_code,
            input.exchange_rate,
            input.estimated_gdp,
            input.flag_url,
            at_str,
          ],
          RawCountryRow::from_row,
        )?;
        Ok(row)
      })
      .await?;

    raw.into_country()
  }

  async fn delete_country(&self, name: &str) -> Result<bool> {
    let name = name.to_owned();

    let affected = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM countries WHERE name = ?1",
          rusqlite::params![name],
        )?;
        Ok(n)
      })
      .await?;

    Ok(affected > 0)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_countries(&self, query: CountryQuery) -> Result<Vec<Country>> {
    let CountryQuery { region, currency_code: currency, sort } = query;

    let raws: Vec<RawCountryRow> = self
      .conn
      .call(move |conn| {
        // Build WHERE clause dynamically; region/currency columns have no
        // collation of their own, so fold both sides.
        let mut conds: Vec<String> = vec![];
        let mut binds: Vec<String> = vec![];

        if let Some(r) = region {
          binds.push(r);
          conds.push(format!("LOWER(region) = LOWER(?{})", binds.len()));
        }
        if let Some(c) = currency {
          binds.push(c);
          conds.push(format!("LOWER(currency_code) = LOWER(?{})", binds.len()));
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT {COUNTRY_COLUMNS} FROM countries {where_clause} ORDER BY {}",
          order_clause(sort)
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(binds), RawCountryRow::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCountryRow::into_country).collect()
  }

  async fn get_country(&self, name: &str) -> Result<Option<Country>> {
    let name = name.to_owned();

    let raw: Option<RawCountryRow> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COUNTRY_COLUMNS} FROM countries WHERE name = ?1"),
              rusqlite::params![name],
              RawCountryRow::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawCountryRow::into_country).transpose()
  }

  async fn count_countries(&self) -> Result<u64> {
    let count: i64 = self
      .conn
      .call(|conn| {
        let n = conn.query_row("SELECT COUNT(*) FROM countries", [], |row| row.get(0))?;
        Ok(n)
      })
      .await?;

    Ok(count.max(0) as u64)
  }

  async fn top_countries_by_gdp(&self, limit: u32) -> Result<Vec<Country>> {
    let raws: Vec<RawCountryRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {COUNTRY_COLUMNS} FROM countries
           WHERE estimated_gdp IS NOT NULL
           ORDER BY estimated_gdp DESC
           LIMIT ?1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit], RawCountryRow::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCountryRow::into_country).collect()
  }

  // ── Refresh metadata ──────────────────────────────────────────────────────

  async fn last_refreshed_at(&self) -> Result<Option<DateTime<Utc>>> {
    let value: Option<String> = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              "SELECT value FROM metadata WHERE key_name = 'last_refreshed_at'",
              [],
              |row| row.get::<_, Option<String>>(0),
            )
            .optional()?
            .flatten(),
        )
      })
      .await?;

    value.as_deref().map(crate::encode::decode_dt).transpose()
  }

  async fn set_last_refreshed_at(&self, at: DateTime<Utc>) -> Result<()> {
    let at_str = encode_dt(at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO metadata (key_name, value, updated_at)
           VALUES ('last_refreshed_at', ?1, ?1)
           ON CONFLICT(key_name) DO UPDATE SET
             value      = excluded.value,
             updated_at = excluded.updated_at",
          rusqlite::params![at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }
}
