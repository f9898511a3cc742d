pub mod assets;
pub mod contact;
pub mod page;
pub mod theme;

use axum::{
  body::Body,
  http::{HeaderMap, Method, StatusCode, header},
  response::Response,
};
use chrono::Datelike as _;
use folio_core::theme::{
  MemoryPreferences, THEME_KEY, Theme, ThemeController, parse_preference,
};
use folio_html::RenderContext;
use folio_pages::{
  meta::DocumentHead,
  view::{Page, PageStatus},
};

use crate::{
  AppState,
  error::Result,
  etag::{compute_etag, if_none_match},
};

/// Client hint carrying the OS color-scheme preference.
pub const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

pub(super) const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

// ─── Request helpers ─────────────────────────────────────────────────────────

/// The value of cookie `name`, if the request carries it.
pub(crate) fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
  headers
    .get_all(header::COOKIE)
    .iter()
    .filter_map(|v| v.to_str().ok())
    .flat_map(|v| v.split(';'))
    .filter_map(|pair| pair.trim().split_once('='))
    .find(|(key, _)| *key == name)
    .map(|(_, value)| value)
}

/// The OS preference from the client hint. Structured-header strings arrive
/// quoted, e.g. `"dark"`.
pub(crate) fn os_preference(headers: &HeaderMap) -> Option<Theme> {
  let raw = headers.get(PREFERS_COLOR_SCHEME)?.to_str().ok()?;
  parse_preference(Some(raw.trim().trim_matches('"')))
}

/// Theme state for one request: the cookie stands in for local storage.
pub(crate) fn theme_controller(
  headers: &HeaderMap,
) -> ThemeController<MemoryPreferences> {
  let prefs = match cookie(headers, THEME_KEY) {
    Some(value) => MemoryPreferences::with_value(value),
    None => MemoryPreferences::new(),
  };
  ThemeController::init(prefs, os_preference(headers))
}

/// `host[:port]` part of an absolute URL.
fn authority(url: &str) -> Option<&str> {
  let (_, rest) = url.split_once("://")?;
  Some(rest.split(['/', '?', '#']).next().unwrap_or(rest))
}

/// Path and query of the `Referer`, used as the location the client is
/// navigating from. A referer from another site is ignored; it must match
/// the request `Host` or the configured public base URL.
pub(crate) fn referer_path<'a>(
  headers: &'a HeaderMap,
  base_url: Option<&str>,
) -> Option<&'a str> {
  let raw = headers.get(header::REFERER)?.to_str().ok()?;
  let Some(from) = authority(raw) else {
    return raw.starts_with('/').then_some(raw);
  };
  let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
  let same_site = host
    .into_iter()
    .chain(base_url.and_then(authority))
    .any(|own| own.eq_ignore_ascii_case(from));
  if !same_site {
    return None;
  }
  let (_, rest) = raw.split_once("://")?;
  let path = &rest[from.len()..];
  Some(if path.starts_with('/') { path } else { "/" })
}

/// Only same-site paths are accepted as redirect targets.
pub(crate) fn local_path(candidate: &str) -> &str {
  let is_local = candidate.starts_with('/')
    && !candidate.starts_with("//")
    && !candidate.contains('\\')
    && !candidate.chars().any(char::is_control);
  if is_local { candidate } else { "/" }
}

// ─── Response helpers ────────────────────────────────────────────────────────

pub(crate) fn page_status(page: &Page) -> StatusCode {
  match page.status {
    PageStatus::Found => StatusCode::OK,
    PageStatus::NotFound => StatusCode::NOT_FOUND,
  }
}

/// Serialize `page` and wrap it in a response with caching and client-hint
/// headers. `return_to` is where a theme toggle on this page lands.
pub(crate) fn respond(
  state: &AppState,
  method: &Method,
  headers: &HeaderMap,
  page: &Page,
  return_to: &str,
  scroll_to_top: bool,
  status: StatusCode,
) -> Result<Response> {
  let theme = theme_controller(headers);
  let mut head = DocumentHead::new();
  head.apply(&page.meta);
  let ctx = RenderContext {
    head: &head,
    chrome: &state.chrome,
    root: theme.root(),
    theme: theme.theme(),
    return_to,
    year: chrono::Utc::now().year(),
    scroll_to_top,
  };
  let html = folio_html::render(page, &ctx)?;
  cached(method, headers, status, CONTENT_TYPE_HTML, html.into_bytes())
}

/// Build a response carrying a strong ETag, answering 304 when the client
/// already has these bytes.
pub(crate) fn cached(
  method: &Method,
  headers: &HeaderMap,
  status: StatusCode,
  content_type: &str,
  body: Vec<u8>,
) -> Result<Response> {
  let etag = compute_etag(&body);
  let fresh = status == StatusCode::OK
    && headers
      .get(header::IF_NONE_MATCH)
      .and_then(|v| v.to_str().ok())
      .is_some_and(|v| if_none_match(v, &etag));

  let builder = Response::builder()
    .header(header::ETAG, &etag)
    .header("accept-ch", PREFERS_COLOR_SCHEME)
    .header(header::VARY, format!("{PREFERS_COLOR_SCHEME}, Cookie"));

  let response = if fresh {
    builder.status(StatusCode::NOT_MODIFIED).body(Body::empty())?
  } else {
    let builder = builder
      .status(status)
      .header(header::CONTENT_TYPE, content_type)
      .header(header::CONTENT_LENGTH, body.len());
    if *method == Method::HEAD {
      builder.body(Body::empty())?
    } else {
      builder.body(Body::from(body))?
    }
  };
  Ok(response)
}

#[cfg(test)]
mod tests {
  use axum::http::{HeaderName, HeaderValue};

  use super::*;

  fn headers(pairs: &[(HeaderName, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
      map.append(name.clone(), HeaderValue::from_static(*value));
    }
    map
  }

  #[test]
  fn cookie_is_found_among_others() {
    let h = headers(&[(header::COOKIE, "a=1; theme=dark; b=2")]);
    assert_eq!(cookie(&h, "theme"), Some("dark"));
    assert_eq!(cookie(&h, "missing"), None);
  }

  #[test]
  fn client_hint_is_unquoted() {
    let h = headers(&[(HeaderName::from_static(PREFERS_COLOR_SCHEME), "\"dark\"")]);
    assert_eq!(os_preference(&h), Some(Theme::Dark));
    let h = headers(&[(
      HeaderName::from_static(PREFERS_COLOR_SCHEME),
      "\"no-preference\"",
    )]);
    assert_eq!(os_preference(&h), None);
  }

  #[test]
  fn referer_reduces_to_path() {
    let h = headers(&[
      (header::HOST, "localhost:8080"),
      (header::REFERER, "http://localhost:8080/about?x=1"),
    ]);
    assert_eq!(referer_path(&h, None), Some("/about?x=1"));
    let h = headers(&[
      (header::HOST, "localhost:8080"),
      (header::REFERER, "http://localhost:8080"),
    ]);
    assert_eq!(referer_path(&h, None), Some("/"));
  }

  #[test]
  fn foreign_referer_is_ignored() {
    let h = headers(&[
      (header::HOST, "localhost:8080"),
      (header::REFERER, "https://www.google.com/"),
    ]);
    assert_eq!(referer_path(&h, None), None);
    let h = headers(&[(header::REFERER, "https://www.google.com/about")]);
    assert_eq!(referer_path(&h, None), None);
  }

  #[test]
  fn base_url_vouches_for_proxied_referer() {
    let h = headers(&[
      (header::HOST, "127.0.0.1:8080"),
      (header::REFERER, "https://folio.example/contact"),
    ]);
    assert_eq!(referer_path(&h, Some("https://folio.example")), Some("/contact"));
    assert_eq!(referer_path(&h, Some("https://other.example/")), None);
  }

  #[test]
  fn only_local_redirects() {
    assert_eq!(local_path("/case-studies/x"), "/case-studies/x");
    assert_eq!(local_path("//evil.example"), "/");
    assert_eq!(local_path("https://evil.example"), "/");
    assert_eq!(local_path(""), "/");
  }
}
