//! HTTP surface for the folio site.
//!
//! Exposes an axum [`Router`] that resolves request paths to pages, renders
//! them to HTML and handles the two form posts: the theme toggle and the
//! contact form.

pub mod error;
pub mod etag;
pub mod handlers;

pub use error::{Error, Result};

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use folio_core::{ContentStore, telemetry::TelemetrySink};
use folio_html::{CONTACT_FORM_PATH, STYLESHEET_PATH, THEME_TOGGLE_PATH};
use folio_pages::chrome::Chrome;
use serde::Deserialize;

use handlers::{assets, contact, page, theme};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FOLIO_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:         String,
  #[serde(default = "default_port")]
  pub port:         u16,
  /// Public origin the site is served from. Referers from this origin count
  /// as same-site even when a proxy rewrites `Host`.
  #[serde(default)]
  pub base_url:     Option<String>,
  /// Alternate content JSON. The embedded content is used when unset.
  #[serde(default)]
  pub content_path: Option<PathBuf>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:         default_host(),
      port:         default_port(),
      base_url:     None,
      content_path: None,
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn public_url(&self) -> String {
    self
      .base_url
      .clone()
      .unwrap_or_else(|| format!("http://{}", self.address()))
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub content:   Arc<ContentStore>,
  pub chrome:    Arc<Chrome>,
  pub telemetry: Arc<dyn TelemetrySink>,
  pub config:    Arc<ServerConfig>,
}

impl AppState {
  pub fn new(
    content: ContentStore,
    telemetry: Arc<dyn TelemetrySink>,
    config: ServerConfig,
  ) -> Self {
    let chrome = Chrome::from_store(&content);
    Self {
      content: Arc::new(content),
      chrome: Arc::new(chrome),
      telemetry,
      config: Arc::new(config),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the site.
///
/// Every path not claimed by an asset or form route is a page; unknown paths
/// render the home page.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route(STYLESHEET_PATH,   get(assets::stylesheet))
    .route(THEME_TOGGLE_PATH, get(page::handler).post(theme::toggle))
    .route(CONTACT_FORM_PATH, get(page::handler).post(contact::submit))
    .fallback(page::handler)
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use folio_core::telemetry::{self, RecordingSink};
  use tower::ServiceExt as _;

  use crate::handlers::PREFERS_COLOR_SCHEME;

  fn make_state() -> (AppState, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let content = ContentStore::embedded().unwrap();
    let state = AppState::new(content, sink.clone(), ServerConfig::default());
    (state, sink)
  }

  async fn oneshot_raw(
    state:   AppState,
    method:  &str,
    uri:     &str,
    headers: Vec<(&str, &str)>,
    body:    &str,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    for (k, v) in headers {
      builder = builder.header(k, v);
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  const FORM: &str = "application/x-www-form-urlencoded";

  // ── Pages ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn home_renders_with_cache_and_hint_headers() {
    let (state, _) = make_state();
    let tagline = state.content.site.tagline.clone();
    let resp = oneshot_raw(state, "GET", "/", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert!(headers.get(header::ETAG).is_some());
    assert_eq!(headers.get("accept-ch").unwrap(), PREFERS_COLOR_SCHEME);
    assert!(
      headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html")
    );
    let html = body_text(resp).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(&tagline));
  }

  #[tokio::test]
  async fn matching_if_none_match_returns_304() {
    let (state, _) = make_state();
    let first = oneshot_raw(state.clone(), "GET", "/about", vec![], "").await;
    let etag = first.headers().get(header::ETAG).unwrap().to_str().unwrap().to_string();

    let second = oneshot_raw(
      state,
      "GET",
      "/about",
      vec![("if-none-match", etag.as_str())],
      "",
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    assert!(body_text(second).await.is_empty());
  }

  #[tokio::test]
  async fn unknown_path_renders_home() {
    let (state, _) = make_state();
    let tagline = state.content.site.tagline.clone();
    let resp = oneshot_raw(state, "GET", "/no/such/page", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(&tagline));
  }

  #[tokio::test]
  async fn missing_case_study_is_404_with_home_link() {
    let (state, sink) = make_state();
    let resp = oneshot_raw(state, "GET", "/case-studies/nope", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = body_text(resp).await;
    assert!(html.contains("Case Study Not Found"));
    assert!(html.contains("<a href=\"/\">"));
    assert!(sink.named(telemetry::CASE_STUDY_VIEW).is_empty());
  }

  #[tokio::test]
  async fn case_study_view_is_tracked() {
    let (state, sink) = make_state();
    let case = state.content.cases[0].clone();
    let uri = format!("/case-studies/{}", case.id);
    let resp = oneshot_raw(state, "GET", &uri, vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let views = sink.named(telemetry::CASE_STUDY_VIEW);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].properties["case_id"], case.id);
    assert_eq!(views[0].properties["case_title"], case.title);
  }

  #[tokio::test]
  async fn print_query_serves_printable_view() {
    let (state, sink) = make_state();
    let resp = oneshot_raw(
      state,
      "GET",
      "/case-studies/ai-code-reviewer?print=tracking-plan",
      vec![],
      "",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("<body class=\"printable\">"));
    assert!(html.contains("window.print()"));
    assert!(!html.contains("site-header"));

    let prints = sink.named(telemetry::ARTIFACT_PRINT);
    assert_eq!(prints.len(), 1);
    assert_eq!(prints[0].properties["artifact"], "tracking-plan");
    assert!(sink.named(telemetry::CASE_STUDY_VIEW).is_empty());
  }

  #[tokio::test]
  async fn return_from_print_is_not_a_second_case_view() {
    let (state, sink) = make_state();
    let resp = oneshot_raw(
      state,
      "GET",
      "/case-studies/ai-code-reviewer",
      vec![
        ("host", "localhost:8080"),
        (
          "referer",
          "http://localhost:8080/case-studies/ai-code-reviewer?print=requirements",
        ),
      ],
      "",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(sink.named(telemetry::CASE_STUDY_VIEW).is_empty());
    assert!(sink.named(telemetry::PAGE_VIEW).is_empty());
  }

  #[tokio::test]
  async fn unknown_print_kind_is_ignored() {
    let (state, _) = make_state();
    let resp = oneshot_raw(
      state,
      "GET",
      "/case-studies/ai-code-reviewer?print=poster",
      vec![],
      "",
    )
    .await;
    let html = body_text(resp).await;
    assert!(!html.contains("printable"));
    assert!(html.contains("site-header"));
  }

  #[tokio::test]
  async fn page_view_fires_only_on_path_change() {
    let (state, sink) = make_state();
    oneshot_raw(
      state.clone(),
      "GET",
      "/about",
      vec![("host", "localhost:8080"), ("referer", "http://localhost:8080/")],
      "",
    )
    .await;
    oneshot_raw(
      state,
      "GET",
      "/about",
      vec![("host", "localhost:8080"), ("referer", "http://localhost:8080/about")],
      "",
    )
    .await;

    let views = sink.named(telemetry::PAGE_VIEW);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].properties["path"], "/about");
  }

  #[tokio::test]
  async fn arrival_from_another_site_is_a_page_view() {
    let (state, sink) = make_state();
    let resp = oneshot_raw(
      state,
      "GET",
      "/",
      vec![("host", "localhost:8080"), ("referer", "https://www.google.com/")],
      "",
    )
    .await;
    assert!(body_text(resp).await.contains("window.scrollTo(0, 0);"));
    let views = sink.named(telemetry::PAGE_VIEW);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].properties["path"], "/");
  }

  #[tokio::test]
  async fn repeated_query_keys_do_not_fail_the_page() {
    let (state, _) = make_state();
    let resp = oneshot_raw(state, "GET", "/about?print=a&print=b", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("site-header"));
  }

  #[tokio::test]
  async fn stylesheet_is_served() {
    let (state, _) = make_state();
    let resp = oneshot_raw(state, "GET", STYLESHEET_PATH, vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
      resp.headers().get(header::CONTENT_TYPE).unwrap(),
      "text/css; charset=utf-8"
    );
    assert!(body_text(resp).await.contains(".dark"));
  }

  #[tokio::test]
  async fn other_methods_on_pages_are_rejected() {
    let (state, _) = make_state();
    let resp = oneshot_raw(state, "DELETE", "/about", vec![], "").await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
  }

  // ── Theme ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn os_hint_picks_initial_theme() {
    let (state, _) = make_state();
    let resp = oneshot_raw(
      state.clone(),
      "GET",
      "/",
      vec![(PREFERS_COLOR_SCHEME, "\"dark\"")],
      "",
    )
    .await;
    assert!(body_text(resp).await.contains("<html lang=\"en\" class=\"dark\">"));

    let resp = oneshot_raw(
      state,
      "GET",
      "/",
      vec![(PREFERS_COLOR_SCHEME, "\"dark\""), ("cookie", "theme=light")],
      "",
    )
    .await;
    assert!(body_text(resp).await.contains("<html lang=\"en\">"));
  }

  #[tokio::test]
  async fn invalid_cookie_falls_back_to_hint() {
    let (state, _) = make_state();
    let resp = oneshot_raw(
      state,
      "GET",
      "/",
      vec![(PREFERS_COLOR_SCHEME, "\"dark\""), ("cookie", "theme=sepia")],
      "",
    )
    .await;
    assert!(body_text(resp).await.contains("class=\"dark\""));
  }

  #[tokio::test]
  async fn toggle_sets_cookie_and_redirects_back() {
    let (state, sink) = make_state();
    let resp = oneshot_raw(
      state,
      "POST",
      THEME_TOGGLE_PATH,
      vec![("content-type", FORM), ("cookie", "theme=dark")],
      "return_to=%2Fcase-studies",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/case-studies");
    let cookie = resp.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("theme=light;"), "{cookie}");

    let changes = sink.named(telemetry::THEME_CHANGED);
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].properties["to_theme"], "light");
  }

  #[tokio::test]
  async fn double_toggle_returns_to_original() {
    let (state, _) = make_state();
    let first = oneshot_raw(
      state.clone(),
      "POST",
      THEME_TOGGLE_PATH,
      vec![("content-type", FORM)],
      "return_to=%2F",
    )
    .await;
    let cookie = first.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    let pair = cookie.split(';').next().unwrap().to_string();
    assert_eq!(pair, "theme=dark");

    let second = oneshot_raw(
      state,
      "POST",
      THEME_TOGGLE_PATH,
      vec![("content-type", FORM), ("cookie", pair.as_str())],
      "return_to=%2F",
    )
    .await;
    let cookie = second.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("theme=light;"));
  }

  #[tokio::test]
  async fn toggle_refuses_offsite_redirect() {
    let (state, _) = make_state();
    let resp = oneshot_raw(
      state,
      "POST",
      THEME_TOGGLE_PATH,
      vec![("content-type", FORM)],
      "return_to=https%3A%2F%2Fevil.example%2F",
    )
    .await;
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");
  }

  // ── Contact ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn valid_contact_post_thanks_and_tracks() {
    let (state, sink) = make_state();
    let resp = oneshot_raw(
      state,
      "POST",
      CONTACT_FORM_PATH,
      vec![("content-type", FORM)],
      "name=Ada&email=ada%40example.com&message=Hello",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Thank you!"));
    assert_eq!(sink.named(telemetry::CONTACT_FORM_SUBMIT).len(), 1);
  }

  #[tokio::test]
  async fn theme_toggle_keeps_thank_you_view() {
    let (state, sink) = make_state();
    let resp = oneshot_raw(
      state.clone(),
      "POST",
      CONTACT_FORM_PATH,
      vec![("content-type", FORM)],
      "name=Ada&email=ada%40example.com&message=Hello",
    )
    .await;
    let html = body_text(resp).await;
    assert!(html.contains("name=\"return_to\" value=\"/contact?sent=1\""));

    let resp = oneshot_raw(
      state,
      "GET",
      "/contact?sent=1",
      vec![("cookie", "theme=dark")],
      "",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Thank you!"));
    assert!(html.contains("class=\"dark\""));
    assert_eq!(sink.named(telemetry::CONTACT_FORM_SUBMIT).len(), 1);
  }

  #[tokio::test]
  async fn invalid_contact_post_flags_fields() {
    let (state, sink) = make_state();
    let resp = oneshot_raw(
      state,
      "POST",
      CONTACT_FORM_PATH,
      vec![("content-type", FORM)],
      "name=Ada&email=nope&message=",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains("aria-invalid=\"true\""));
    assert!(html.contains("value=\"Ada\""));
    assert!(sink.named(telemetry::CONTACT_FORM_SUBMIT).is_empty());
  }

  #[tokio::test]
  async fn contact_page_renders_form() {
    let (state, _) = make_state();
    let resp = oneshot_raw(state, "GET", CONTACT_FORM_PATH, vec![], "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("action=\"/contact\""));
  }
}
