//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("method not allowed")]
  MethodNotAllowed,
  #[error("render error: {0}")]
  Render(#[from] folio_html::Error),
  #[error("http error: {0}")]
  Http(#[from] axum::http::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::MethodNotAllowed => {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
      }
      Error::Render(e) => {
        tracing::error!(error = %e, "page failed to render");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
      Error::Http(e) => {
        tracing::error!(error = %e, "response failed to build");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}
