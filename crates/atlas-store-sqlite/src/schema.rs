//! SQL schema for the Atlas SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Rows are created and updated only by the refresh pipeline, deleted only by
-- explicit delete-by-name. Name matching is case-insensitive.
CREATE TABLE IF NOT EXISTS countries (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    name              TEXT NOT NULL UNIQUE COLLATE NOCASE,
    capital           TEXT,
    region            TEXT,
    population        INTEGER NOT NULL,
    currency_code     TEXT,
    exchange_rate     REAL,
    estimated_gdp     REAL,
    flag_url          TEXT,
    last_refreshed_at TEXT NOT NULL    -- RFC 3339 UTC; store-assigned
);

CREATE INDEX IF NOT EXISTS countries_name_idx     ON countries(name);
CREATE INDEX IF NOT EXISTS countries_region_idx   ON countries(region);
CREATE INDEX IF NOT EXISTS countries_currency_idx ON countries(currency_code);

-- One row per key; currently only 'last_refreshed_at'.
CREATE TABLE IF NOT EXISTS metadata (
    key_name   TEXT PRIMARY KEY,
    value      TEXT,
    updated_at TEXT NOT NULL
);

PRAGMA user_version = 1;
";
