use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use atlas_artifact::{Renderer, SummaryArtifact};
use atlas_fetch::HttpFetcher;
use atlas_server::{AppState, ServerConfig, router};
use atlas_store_sqlite::SqliteStore;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Country currency & exchange rate API server")]
struct Cli {
  /// Path to the TOML config file. Missing file means defaults plus
  /// `ATLAS_*` environment variables.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    )
    .init();

  let cli = Cli::parse();

  let config = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ATLAS"))
    .build()
    .context("failed to load configuration")?
    .try_deserialize::<ServerConfig>()
    .context("failed to parse configuration")?;

  let store = SqliteStore::open(&config.db_path)
    .await
    .with_context(|| format!("failed to open database at {:?}", config.db_path))?;

  let fetcher = HttpFetcher::new(&config.countries_url, &config.rates_url)
    .context("failed to build HTTP client")?;

  let renderer = if config.placeholder_artifact {
    Renderer::Placeholder
  } else {
    Renderer::detect()
  };
  let artifact = SummaryArtifact::with_renderer(&config.cache_dir, renderer);

  let state = AppState {
    store:    Arc::new(store),
    fetcher:  Arc::new(fetcher),
    artifact: Arc::new(artifact),
  };

  let address = format!("{}:{}", config.host, config.port);
  let listener = tokio::net::TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  tracing::info!("listening on http://{address}");
  axum::serve(listener, router(state))
    .await
    .context("server error")?;

  Ok(())
}
