use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("markup error: {0}")]
  Markup(String),
  #[error("rendered markup is not UTF-8")]
  Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
