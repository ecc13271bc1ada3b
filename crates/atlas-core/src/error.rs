//! Error types for `atlas-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// An external data source could not be reached, timed out, or returned a
  /// payload we could not decode. Maps to a distinct HTTP status (503) at the
  /// API boundary.
  #[error("could not fetch data from {source_name}: {message}")]
  DataSourceUnavailable {
    source_name: String,
    message:     String,
  },

  /// Any non-fetch failure inside the refresh pipeline.
  #[error("failed to refresh countries data: {0}")]
  RefreshFailed(String),
}

impl Error {
  pub fn unavailable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
    Error::DataSourceUnavailable {
      source_name: source_name.into(),
      message:     message.into(),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
