//! Route resolution and navigation side effects.
//!
//! [`Route::resolve`] is total: every path maps to exactly one route, and a
//! path that matches nothing maps to [`Route::Home`].

use crate::telemetry::{self, TelemetrySink};

pub const CASE_STUDIES_SEGMENT: &str = "case-studies";

/// The fixed set of pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
  Home,
  CaseStudies,
  CaseStudy { id: String },
  Artifacts,
  About,
  Contact,
}

impl Route {
  /// Map a request path to a route. Query strings and fragments are ignored.
  pub fn resolve(path: &str) -> Self {
    let path = path
      .split(['?', '#'])
      .next()
      .unwrap_or_default();
    let segments: Vec<&str> =
      path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
      [] => Self::Home,
      [CASE_STUDIES_SEGMENT] => Self::CaseStudies,
      [CASE_STUDIES_SEGMENT, id] => Self::CaseStudy { id: (*id).to_owned() },
      ["artifacts"] => Self::Artifacts,
      ["about"] => Self::About,
      ["contact"] => Self::Contact,
      _ => Self::Home,
    }
  }

  pub fn case_study(id: impl Into<String>) -> Self {
    Self::CaseStudy { id: id.into() }
  }

  /// Canonical path for this route.
  pub fn path(&self) -> String {
    match self {
      Self::Home => "/".to_owned(),
      Self::CaseStudies => format!("/{CASE_STUDIES_SEGMENT}"),
      Self::CaseStudy { id } => format!("/{CASE_STUDIES_SEGMENT}/{id}"),
      Self::Artifacts => "/artifacts".to_owned(),
      Self::About => "/about".to_owned(),
      Self::Contact => "/contact".to_owned(),
    }
  }
}

// ─── Navigation ──────────────────────────────────────────────────────────────

/// What the host must do after a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
  pub route:         Route,
  /// Set when the path changed; the viewport returns to the top.
  pub scroll_to_top: bool,
}

/// Tracks the current path and fires a page view whenever it changes.
///
/// Re-rendering the same path (a theme toggle, a form post back to the same
/// page) is not a navigation.
pub struct Navigator<'a> {
  current: Option<String>,
  sink:    &'a dyn TelemetrySink,
}

impl<'a> Navigator<'a> {
  pub fn new(sink: &'a dyn TelemetrySink) -> Self {
    Self { current: None, sink }
  }

  /// Start from a known path, e.g. the page a request came from.
  pub fn resume(sink: &'a dyn TelemetrySink, path: Option<&str>) -> Self {
    Self {
      current: path.map(normalize),
      sink,
    }
  }

  pub fn navigate(&mut self, path: &str) -> Navigation {
    let path = normalize(path);
    let route = Route::resolve(&path);
    let changed = self.current.as_deref() != Some(path.as_str());
    if changed {
      self
        .sink
        .track(telemetry::PAGE_VIEW, &telemetry::properties([("path", path.as_str())]));
      self.current = Some(path);
    }
    Navigation {
      route,
      scroll_to_top: changed,
    }
  }
}

/// Strip query, fragment and trailing slashes so `/about/` and `/about` are
/// the same location.
fn normalize(path: &str) -> String {
  let path = path.split(['?', '#']).next().unwrap_or_default();
  let trimmed = path.trim_end_matches('/');
  if trimmed.is_empty() {
    "/".to_owned()
  } else if trimmed.starts_with('/') {
    trimmed.to_owned()
  } else {
    format!("/{trimmed}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::telemetry::RecordingSink;

  #[test]
  fn fixed_routes_resolve() {
    assert_eq!(Route::resolve("/"), Route::Home);
    assert_eq!(Route::resolve(""), Route::Home);
    assert_eq!(Route::resolve("/case-studies"), Route::CaseStudies);
    assert_eq!(Route::resolve("/case-studies/"), Route::CaseStudies);
    assert_eq!(
      Route::resolve("/case-studies/ai-code-reviewer"),
      Route::case_study("ai-code-reviewer")
    );
    assert_eq!(Route::resolve("/artifacts"), Route::Artifacts);
    assert_eq!(Route::resolve("/about"), Route::About);
    assert_eq!(Route::resolve("/contact/"), Route::Contact);
  }

  #[test]
  fn unmatched_paths_fall_back_to_home() {
    assert_eq!(Route::resolve("/nope"), Route::Home);
    assert_eq!(Route::resolve("/case-studies/a/b"), Route::Home);
    assert_eq!(Route::resolve("/about/team"), Route::Home);
  }

  #[test]
  fn query_string_is_not_part_of_matching() {
    assert_eq!(
      Route::resolve("/case-studies/foodprint?print=tracking-plan"),
      Route::case_study("foodprint")
    );
    assert_eq!(Route::resolve("/about#bio"), Route::About);
  }

  #[test]
  fn paths_resolve_back_to_their_route() {
    for route in [
      Route::Home,
      Route::CaseStudies,
      Route::case_study("foodprint"),
      Route::Artifacts,
      Route::About,
      Route::Contact,
    ] {
      assert_eq!(Route::resolve(&route.path()), route);
    }
  }

  #[test]
  fn navigation_fires_page_view_on_change_only() {
    let sink = RecordingSink::new();
    let mut nav = Navigator::new(&sink);

    let first = nav.navigate("/");
    assert!(first.scroll_to_top);
    let second = nav.navigate("/case-studies/ai-code-reviewer");
    assert!(second.scroll_to_top);
    assert_eq!(second.route, Route::case_study("ai-code-reviewer"));
    let again = nav.navigate("/case-studies/ai-code-reviewer/");
    assert!(!again.scroll_to_top);

    let views = sink.named(telemetry::PAGE_VIEW);
    assert_eq!(views.len(), 2);
    assert_eq!(views[1].properties["path"], "/case-studies/ai-code-reviewer");
  }

  #[test]
  fn resumed_navigator_skips_same_page() {
    let sink = RecordingSink::new();
    let mut nav = Navigator::resume(&sink, Some("/about"));
    assert!(!nav.navigate("/about").scroll_to_top);
    assert!(sink.events().is_empty());
  }
}
