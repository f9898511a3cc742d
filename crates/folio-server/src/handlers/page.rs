//! GET handler for every page path.

use axum::{
  extract::{Query, State, rejection::QueryRejection},
  http::{HeaderMap, Method, Uri},
  response::Response,
};
use folio_core::{
  route::{Navigator, Route},
  telemetry::{self, properties},
};
use folio_pages::{
  PageState, compose,
  contact::ContactForm,
  print::{PrintSession, ViewMode},
  view::PageStatus,
};
use serde::Deserialize;

use super::{page_status, referer_path, respond};
use crate::{
  AppState,
  error::{Error, Result},
};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
  /// Artifact to print, e.g. `requirements` or `tracking-plan`.
  pub print: Option<String>,
  /// Set on the contact page after a successful submission.
  pub sent:  Option<String>,
}

impl PageQuery {
  /// Query parameters of a path such as a referer. Anything unparseable is
  /// treated as absent.
  fn of(path: &str) -> Self {
    path
      .parse::<Uri>()
      .ok()
      .and_then(|uri| Query::<Self>::try_from_uri(&uri).ok())
      .map(|Query(query)| query)
      .unwrap_or_default()
  }

  fn print_session(&self) -> PrintSession {
    PrintSession::from_param(self.print.as_deref())
  }
}

/// The request comes back from the printable view of the same case, so the
/// case itself was already counted.
fn returning_from_print(referer: Option<&str>, path: &str) -> bool {
  let Some(referer) = referer else {
    return false;
  };
  let referer_path = referer.split(['?', '#']).next().unwrap_or_default();
  referer_path.trim_end_matches('/') == path.trim_end_matches('/')
    && matches!(PageQuery::of(referer).print_session().mode(), ViewMode::Printable(_))
}

pub async fn handler(
  State(state): State<AppState>,
  method: Method,
  uri: Uri,
  headers: HeaderMap,
  query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response> {
  if method != Method::GET && method != Method::HEAD {
    return Err(Error::MethodNotAllowed);
  }
  let query = match query {
    Ok(Query(query)) => query,
    Err(rejection) => {
      tracing::debug!(%rejection, "ignoring malformed query");
      PageQuery::default()
    }
  };

  let sink = state.telemetry.as_ref();
  let referer = referer_path(&headers, state.config.base_url.as_deref());
  let mut navigator = Navigator::resume(sink, referer);
  let navigation = navigator.navigate(uri.path());

  let contact = if navigation.route == Route::Contact && query.sent.is_some() {
    ContactForm::completed()
  } else {
    ContactForm::new()
  };
  let page_state = PageState {
    print: query.print_session(),
    contact,
  };
  let page = compose(&state.content, &navigation.route, &page_state);

  if let Route::CaseStudy { id } = &navigation.route
    && page.status == PageStatus::Found
  {
    match page_state.print.mode() {
      ViewMode::Interactive if returning_from_print(referer, uri.path()) => {
        tracing::debug!(case_id = %id, "back from print, view already counted");
      }
      ViewMode::Interactive => {
        let title = page.heading();
        sink.track(
          telemetry::CASE_STUDY_VIEW,
          &properties([("case_id", id.as_str()), ("case_title", title)]),
        );
      }
      ViewMode::Printable(kind) => sink.track(
        telemetry::ARTIFACT_PRINT,
        &properties([("case_id", id.as_str()), ("artifact", kind.as_ref())]),
      ),
    }
  }

  let return_to = uri
    .path_and_query()
    .map_or_else(|| uri.path(), |pq| pq.as_str());
  respond(
    &state,
    &method,
    &headers,
    &page,
    return_to,
    navigation.scroll_to_top,
    page_status(&page),
  )
}
