//! POST handler for the theme toggle.

use axum::{
  Form,
  body::Body,
  extract::State,
  http::{HeaderMap, StatusCode, header},
  response::Response,
};
use folio_core::{
  telemetry::{self, properties},
  theme::{PreferenceStore as _, THEME_KEY},
};
use serde::Deserialize;

use super::{local_path, theme_controller};
use crate::{AppState, error::Result};

/// One year.
const COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 365;

#[derive(Debug, Default, Deserialize)]
pub struct ToggleForm {
  /// Page to go back to after toggling.
  #[serde(default)]
  pub return_to: String,
}

pub async fn toggle(
  State(state): State<AppState>,
  headers: HeaderMap,
  Form(form): Form<ToggleForm>,
) -> Result<Response> {
  let mut theme = theme_controller(&headers);
  let to = theme.toggle();
  state.telemetry.track(
    telemetry::THEME_CHANGED,
    &properties([("to_theme", to.as_ref())]),
  );

  let value = theme.store().load().unwrap_or_else(|| to.to_string());
  let cookie = format!(
    "{THEME_KEY}={value}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax"
  );

  Ok(
    Response::builder()
      .status(StatusCode::SEE_OTHER)
      .header(header::LOCATION, local_path(&form.return_to))
      .header(header::SET_COOKIE, cookie)
      .body(Body::empty())?,
  )
}
