//! Embedded static assets.

use axum::{
  http::{HeaderMap, Method, StatusCode},
  response::Response,
};

use super::cached;
use crate::error::Result;

pub const STYLESHEET: &str = include_str!("../../assets/site.css");

pub async fn stylesheet(method: Method, headers: HeaderMap) -> Result<Response> {
  cached(
    &method,
    &headers,
    StatusCode::OK,
    "text/css; charset=utf-8",
    STYLESHEET.as_bytes().to_vec(),
  )
}
