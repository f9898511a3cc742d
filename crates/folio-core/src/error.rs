//! Error types for `folio-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("content could not be parsed: {0}")]
  Content(#[from] serde_json::Error),

  #[error("duplicate case study id: {0}")]
  DuplicateCaseId(String),

  #[error("preference storage is unavailable")]
  StorageUnavailable,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
