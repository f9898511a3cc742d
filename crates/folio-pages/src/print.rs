//! Printable artifact view.
//!
//! A case-study page is in one of two modes. Activating print switches it to
//! [`ViewMode::Printable`]; the host's print-finished callback (printed or
//! cancelled) calls [`PrintSession::complete`], which always lands back on
//! [`ViewMode::Interactive`]. No other state is touched, so repeated print
//! runs behave the same.

use std::{str::FromStr, time::Duration};

use folio_core::{
  artifact::{ArtifactKind, RequirementsDoc, TrackingPlan},
  content::CaseStudy,
};

/// Delay before the print dialog opens so the printable view has painted.
pub const PRINT_DELAY: Duration = Duration::from_millis(150);

/// Query parameter carrying the artifact to print on a case-study page.
pub const PRINT_PARAM: &str = "print";

// ─── View mode ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
  #[default]
  Interactive,
  Printable(ArtifactKind),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintSession {
  mode: ViewMode,
}

impl PrintSession {
  pub fn new() -> Self { Self::default() }

  /// Build a session from the `print` query value. Unknown values are
  /// ignored.
  pub fn from_param(value: Option<&str>) -> Self {
    let mut session = Self::new();
    if let Some(kind) = value.and_then(|v| ArtifactKind::from_str(v).ok()) {
      session.activate(kind);
    }
    session
  }

  pub fn mode(&self) -> ViewMode { self.mode }

  /// Switch to the printable view. The caller opens the print dialog after
  /// [`PRINT_DELAY`].
  pub fn activate(&mut self, kind: ArtifactKind) -> Duration {
    self.mode = ViewMode::Printable(kind);
    PRINT_DELAY
  }

  /// The print flow ended, whatever its outcome.
  pub fn complete(&mut self) { self.mode = ViewMode::Interactive; }
}

/// Path that opens the printable `kind` of `case_id`.
pub fn print_path(case_id: &str, kind: ArtifactKind) -> String {
  format!(
    "{}?{PRINT_PARAM}={}",
    folio_core::route::Route::case_study(case_id).path(),
    kind.as_ref()
  )
}

// ─── Printable document ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintBlock {
  Text(String),
  List(Vec<String>),
  /// A labelled sub-list, e.g. a persona and their insights.
  Group { label: String, items: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSection {
  pub number:  usize,
  pub title:   String,
  pub content: Vec<PrintBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDocument {
  pub title:    String,
  pub subtitle: String,
  pub sections: Vec<PrintSection>,
}

impl PrintDocument {
  fn new(title: String, subtitle: String) -> Self {
    Self {
      title,
      subtitle,
      sections: Vec::new(),
    }
  }

  fn section(&mut self, title: &str, content: Vec<PrintBlock>) {
    let number = self.sections.len() + 1;
    self.sections.push(PrintSection {
      number,
      title: title.to_owned(),
      content,
    });
  }
}

pub fn printable(case: &CaseStudy, kind: ArtifactKind) -> PrintDocument {
  let mut doc = PrintDocument::new(
    format!("{}: {}", kind.title(), case.title),
    case.summary.clone(),
  );
  match kind {
    ArtifactKind::Requirements => {
      requirements(&mut doc, &case.artifacts.requirements)
    }
    ArtifactKind::TrackingPlan => {
      tracking_plan(&mut doc, &case.artifacts.tracking_plan)
    }
  }
  doc
}

fn requirements(doc: &mut PrintDocument, prd: &RequirementsDoc) {
  doc.section("Context", vec![PrintBlock::Text(prd.context.clone())]);
  doc.section("Goals", vec![
    PrintBlock::Text(format!("Primary metric: {}", prd.goals.primary_metric)),
    PrintBlock::List(prd.goals.items.clone()),
  ]);
  doc.section("Non-Goals", vec![PrintBlock::List(prd.non_goals.clone())]);
  doc.section(
    "Users & Insights",
    prd
      .users
      .iter()
      .map(|u| PrintBlock::Group {
        label: u.persona.clone(),
        items: u.insights.clone(),
      })
      .collect(),
  );
  doc.section("Solution Overview", vec![PrintBlock::Text(
    prd.solution_overview.clone(),
  )]);
  doc.section("Scope", vec![PrintBlock::List(prd.scope.clone())]);

  let mut metrics = vec![PrintBlock::Text(prd.metrics.kpi_narrative.clone())];
  metrics.extend(prd.metrics.events.iter().map(|e| PrintBlock::Group {
    label: e.name.clone(),
    items: e.properties.clone(),
  }));
  doc.section("Metrics", metrics);

  doc.section("Risks", vec![PrintBlock::List(prd.risks.clone())]);
  doc.section(
    "Launch Plan",
    prd
      .launch_plan
      .labelled()
      .into_iter()
      .map(|(label, items)| PrintBlock::Group {
        label: label.to_owned(),
        items: items.to_vec(),
      })
      .collect(),
  );
}

fn tracking_plan(doc: &mut PrintDocument, plan: &TrackingPlan) {
  doc.section("Primary Metric", vec![PrintBlock::Text(
    plan.primary_metric.clone(),
  )]);
  doc.section(
    "Events",
    plan
      .events
      .iter()
      .map(|e| PrintBlock::Group {
        label: format!("{}: {}", e.name, e.description),
        items: e.properties.clone(),
      })
      .collect(),
  );
  doc.section("Dashboards", vec![PrintBlock::List(plan.dashboards.clone())]);
}
