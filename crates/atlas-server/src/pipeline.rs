//! The refresh pipeline: fetch both sources, merge, upsert, stamp, artifact.
//!
//! Linear and deliberately unguarded: no retry, no batch transaction, no
//! locking against a concurrent refresh. A fetch failure aborts before any
//! write; a store failure mid-batch leaves earlier rows refreshed and later
//! ones stale. The summary artifact is best-effort and can never fail the
//! refresh.

use atlas_artifact::SummaryArtifact;
use atlas_core::{
  Error,
  merge::merge_country,
  source::CountryDataSource,
  store::CountryStore,
};
use chrono::Utc;
use rand::{SeedableRng as _, rngs::StdRng};
use serde::Serialize;

pub const REFRESH_OK_MESSAGE: &str = "Countries data refreshed successfully";

/// How many countries the summary artifact ranks.
const TOP_GDP_LIMIT: u32 = 5;

/// Outcome of a successful refresh.
#[derive(Debug, Serialize)]
pub struct RefreshOutcome {
  pub message:         String,
  pub total_countries: u64,
}

pub async fn refresh_countries<S, F>(
  store: &S,
  fetcher: &F,
  artifact: &SummaryArtifact,
) -> Result<RefreshOutcome, Error>
where
  S: CountryStore,
  F: CountryDataSource,
{
  tracing::info!("starting country data refresh");

  // Both sources fetched concurrently; either failure aborts the refresh
  // before any write, with the DataSourceUnavailable kind intact.
  let (raw_countries, rates) =
    tokio::try_join!(fetcher.fetch_countries(), fetcher.fetch_exchange_rates())?;
  tracing::info!(count = raw_countries.len(), "fetched countries");

  // Sequential per-country upsert in fetch order; each row is its own
  // atomic unit.
  let mut rng = StdRng::from_entropy();
  for raw in &raw_countries {
    let record = merge_country(raw, &rates, &mut rng);
    store
      .upsert_country(record)
      .await
      .map_err(|e| Error::RefreshFailed(e.to_string()))?;
  }

  let stamped_at = Utc::now();
  store
    .set_last_refreshed_at(stamped_at)
    .await
    .map_err(|e| Error::RefreshFailed(e.to_string()))?;

  let total = store
    .count_countries()
    .await
    .map_err(|e| Error::RefreshFailed(e.to_string()))?;
  let top = store
    .top_countries_by_gdp(TOP_GDP_LIMIT)
    .await
    .map_err(|e| Error::RefreshFailed(e.to_string()))?;

  // Best-effort side artifact; log and move on.
  match artifact.generate(total, &top, stamped_at) {
    Ok(path) => tracing::info!(path = %path.display(), "summary artifact generated"),
    Err(e) => tracing::warn!(error = %e, "summary artifact generation failed"),
  }

  tracing::info!(total, "refresh complete");

  Ok(RefreshOutcome {
    message:         REFRESH_OK_MESSAGE.to_string(),
    total_countries: total,
  })
}
