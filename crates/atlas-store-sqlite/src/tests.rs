//! Integration tests for `SqliteStore` against an in-memory database.

use atlas_core::{
  country::NewCountry,
  store::{CountryQuery, CountryStore, SortKey},
};
use chrono::Utc;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn country(name: &str, population: u64, gdp: Option<f64>) -> NewCountry {
  NewCountry {
    name:          name.to_string(),
    capital:       None,
    region:        None,
    population,
    currency_code: None,
    exchange_rate: None,
    estimated_gdp: gdp,
    flag_url:      None,
  }
}

// ─── Upsert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_inserts_and_returns_row() {
  let s = store().await;

  let before = Utc::now();
  let row = s
    .upsert_country(NewCountry {
      name:          "Japan".to_string(),
      capital:       Some("Tokyo".to_string()),
      region:        Some("Asia".to_string()),
      population:    125_000_000,
      currency_code: Some("JPY".to_string()),
      exchange_rate: Some(147.5),
      estimated_gdp: Some(1.2e12),
      flag_url:      Some("https://flagcdn.com/jp.svg".to_string()),
    })
    .await
    .unwrap();

  assert_eq!(row.name, "Japan");
  assert_eq!(row.capital.as_deref(), Some("Tokyo"));
  assert_eq!(row.population, 125_000_000);
  assert_eq!(row.exchange_rate, Some(147.5));
  assert!(row.last_refreshed_at >= before);
}

#[tokio::test]
async fn upsert_case_insensitive_updates_same_row() {
  let s = store().await;

  let first = s.upsert_country(country("Japan", 100, Some(1.0))).await.unwrap();
  let second = s.upsert_country(country("japan", 200, Some(2.0))).await.unwrap();

  // Same row updated, original casing kept, no duplicate created.
  assert_eq!(second.id, first.id);
  assert_eq!(second.name, "Japan");
  assert_eq!(second.population, 200);
  assert_eq!(s.count_countries().await.unwrap(), 1);
}

#[tokio::test]
async fn upsert_refreshes_timestamp() {
  let s = store().await;

  let first = s.upsert_country(country("Japan", 100, None)).await.unwrap();
  let second = s.upsert_country(country("Japan", 100, None)).await.unwrap();

  assert!(second.last_refreshed_at >= first.last_refreshed_at);
}

// ─── Get / delete ────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_country_matches_case_insensitively() {
  let s = store().await;
  s.upsert_country(country("Japan", 100, None)).await.unwrap();

  let found = s.get_country("JAPAN").await.unwrap();
  assert_eq!(found.unwrap().name, "Japan");

  assert!(s.get_country("Wakanda").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_country_reports_removal() {
  let s = store().await;
  s.upsert_country(country("Japan", 100, None)).await.unwrap();

  assert!(s.delete_country("japan").await.unwrap());
  assert!(!s.delete_country("japan").await.unwrap());
  assert_eq!(s.count_countries().await.unwrap(), 0);
}

// ─── List ────────────────────────────────────────────────────────────────────

async fn seed_three(s: &SqliteStore) {
  s.upsert_country(NewCountry {
    region: Some("Asia".to_string()),
    currency_code: Some("JPY".to_string()),
    ..country("Japan", 125, Some(500.0))
  })
  .await
  .unwrap();
  s.upsert_country(NewCountry {
    region: Some("Europe".to_string()),
    currency_code: Some("EUR".to_string()),
    ..country("France", 68, Some(900.0))
  })
  .await
  .unwrap();
  s.upsert_country(NewCountry {
    region: Some("Europe".to_string()),
    ..country("Vatican", 1, None)
  })
  .await
  .unwrap();
}

#[tokio::test]
async fn list_defaults_to_insertion_order() {
  let s = store().await;
  seed_three(&s).await;

  let all = s.list_countries(CountryQuery::default()).await.unwrap();
  let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["Japan", "France", "Vatican"]);
}

#[tokio::test]
async fn list_filters_region_case_insensitively() {
  let s = store().await;
  seed_three(&s).await;

  let europe = s
    .list_countries(CountryQuery {
      region: Some("EUROPE".to_string()),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(europe.len(), 2);
  assert!(europe.iter().all(|c| c.region.as_deref() == Some("Europe")));
}

#[tokio::test]
async fn list_filters_currency_case_insensitively() {
  let s = store().await;
  seed_three(&s).await;

  let eur = s
    .list_countries(CountryQuery {
      currency_code: Some("eur".to_string()),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(eur.len(), 1);
  assert_eq!(eur[0].name, "France");
}

#[tokio::test]
async fn list_combines_filters() {
  let s = store().await;
  seed_three(&s).await;

  let hits = s
    .list_countries(CountryQuery {
      region:        Some("europe".to_string()),
      currency_code: Some("EUR".to_string()),
      ..Default::default()
    })
    .await
    .unwrap();

  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].name, "France");
}

#[tokio::test]
async fn list_gdp_desc_orders_nulls_last() {
  let s = store().await;
  seed_three(&s).await;

  let sorted = s
    .list_countries(CountryQuery {
      sort: Some(SortKey::GdpDesc),
      ..Default::default()
    })
    .await
    .unwrap();

  let names: Vec<_> = sorted.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["France", "Japan", "Vatican"]);
  assert!(sorted.last().unwrap().estimated_gdp.is_none());
}

#[tokio::test]
async fn list_gdp_asc_orders_nulls_first() {
  let s = store().await;
  seed_three(&s).await;

  let sorted = s
    .list_countries(CountryQuery {
      sort: Some(SortKey::GdpAsc),
      ..Default::default()
    })
    .await
    .unwrap();

  let names: Vec<_> = sorted.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["Vatican", "Japan", "France"]);
}

#[tokio::test]
async fn list_sorts_by_population_and_name() {
  let s = store().await;
  seed_three(&s).await;

  let by_pop = s
    .list_countries(CountryQuery {
      sort: Some(SortKey::PopulationDesc),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(by_pop[0].name, "Japan");
  assert_eq!(by_pop.last().unwrap().name, "Vatican");

  let by_name = s
    .list_countries(CountryQuery {
      sort: Some(SortKey::NameAsc),
      ..Default::default()
    })
    .await
    .unwrap();
  let names: Vec<_> = by_name.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["France", "Japan", "Vatican"]);
}

// ─── Top by GDP ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn top_countries_by_gdp_excludes_nulls() {
  let s = store().await;
  seed_three(&s).await;

  let top = s.top_countries_by_gdp(5).await.unwrap();
  let names: Vec<_> = top.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["France", "Japan"]);

  let top_one = s.top_countries_by_gdp(1).await.unwrap();
  assert_eq!(top_one.len(), 1);
  assert_eq!(top_one[0].name, "France");
}

// ─── Refresh metadata ────────────────────────────────────────────────────────

#[tokio::test]
async fn last_refreshed_at_is_none_before_first_refresh() {
  let s = store().await;
  assert!(s.last_refreshed_at().await.unwrap().is_none());
}

#[tokio::test]
async fn set_last_refreshed_at_roundtrips_and_overwrites() {
  let s = store().await;

  let first = Utc::now();
  s.set_last_refreshed_at(first).await.unwrap();
  assert_eq!(s.last_refreshed_at().await.unwrap(), Some(first));

  let second = Utc::now();
  s.set_last_refreshed_at(second).await.unwrap();
  assert_eq!(s.last_refreshed_at().await.unwrap(), Some(second));
}
