//! Content records: the hand-authored data behind every page.
//!
//! All records are immutable once loaded. Cross references between them are
//! plain string identifiers resolved on read by [`ContentStore`](crate::store::ContentStore).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{artifact::Artifacts, icon::Icon};

// ─── Site-wide records ───────────────────────────────────────────────────────

/// Who the site belongs to and how they describe themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteProfile {
  pub owner:       String,
  /// Used verbatim as the home page `<title>`.
  pub title:       String,
  pub tagline:     String,
  pub positioning: String,
}

/// Outbound contact details. Every link is an opaque pass-through string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
  pub email:     String,
  pub portfolio: String,
  pub linkedin:  String,
  pub github:    String,
  pub location:  String,
  pub hire_link: String,
  /// Link to the résumé document.
  pub resume:    String,
}

impl ContactInfo {
  pub fn mailto(&self) -> String { format!("mailto:{}", self.email) }
}

/// A headline statistic shown on the home page. Display order is the
/// authored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
  pub label: String,
  pub value: String,
  pub icon:  Icon,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
  pub degree:   String,
  pub school:   String,
  pub period:   String,
  pub location: String,
  pub details:  Vec<String>,
}

/// One line of experience on the résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeBullet {
  pub id:            String,
  pub content:       String,
  /// Weak reference to a [`CaseStudy::id`]. A dangling value is not an
  /// error; the bullet simply renders without a link.
  #[serde(default)]
  pub case_study_id: Option<String>,
}

// ─── Case studies ────────────────────────────────────────────────────────────

/// The metric a case study is judged by, and the outcome if one was measured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseMetric {
  pub primary: String,
  #[serde(default)]
  pub result:  Option<String>,
}

/// The fixed set of narrative sections a case study may carry.
///
/// Storage order is irrelevant; pages render in [`SectionKey::ORDER`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
  Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
  Introduction,
  TheProblem,
  UserInsights,
  GoalsAndMetrics,
  HypothesisAndAssumptions,
  SolutionExploration,
  SolutionWalkthrough,
  MvpAndPrioritization,
  ResultsAndImpact,
  RisksAndMitigation,
  LearningsAndNextSteps,
}

impl SectionKey {
  pub const ORDER: [SectionKey; 11] = [
    SectionKey::Introduction,
    SectionKey::TheProblem,
    SectionKey::UserInsights,
    SectionKey::GoalsAndMetrics,
    SectionKey::HypothesisAndAssumptions,
    SectionKey::SolutionExploration,
    SectionKey::SolutionWalkthrough,
    SectionKey::MvpAndPrioritization,
    SectionKey::ResultsAndImpact,
    SectionKey::RisksAndMitigation,
    SectionKey::LearningsAndNextSteps,
  ];

  pub fn title(self) -> &'static str {
    match self {
      Self::Introduction => "Introduction",
      Self::TheProblem => "The Problem",
      Self::UserInsights => "User Insights",
      Self::GoalsAndMetrics => "Goals & Metrics",
      Self::HypothesisAndAssumptions => "Hypothesis & Assumptions",
      Self::SolutionExploration => "Solution Exploration",
      Self::SolutionWalkthrough => "Solution Walkthrough",
      Self::MvpAndPrioritization => "MVP & Prioritization",
      Self::ResultsAndImpact => "Results & Impact",
      Self::RisksAndMitigation => "Risks & Mitigation",
      Self::LearningsAndNextSteps => "Learnings & Next Steps",
    }
  }
}

/// Section content is authored either as one string or as a list of
/// paragraphs. Both shapes render as paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionBody {
  Text(String),
  Paragraphs(Vec<String>),
}

impl SectionBody {
  pub fn paragraphs(&self) -> Vec<&str> {
    match self {
      Self::Text(text) => vec![text.as_str()],
      Self::Paragraphs(paragraphs) => {
        paragraphs.iter().map(String::as_str).collect()
      }
    }
  }
}

/// A single project narrative, keyed by a URL-safe slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStudy {
  /// Unique key; joins routes and résumé bullets to this record.
  pub id:        String,
  pub title:     String,
  pub summary:   String,
  pub tags:      Vec<String>,
  pub metrics:   CaseMetric,
  #[serde(default)]
  pub sections:  BTreeMap<SectionKey, SectionBody>,
  pub artifacts: Artifacts,
}

impl CaseStudy {
  /// Sections present on this case, in render order.
  pub fn ordered_sections(
    &self,
  ) -> impl Iterator<Item = (SectionKey, &SectionBody)> + '_ {
    SectionKey::ORDER
      .into_iter()
      .filter_map(|key| self.sections.get(&key).map(|body| (key, body)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn section_body_accepts_both_shapes() {
    let text: SectionBody = serde_json::from_str(r#""one""#).unwrap();
    let list: SectionBody = serde_json::from_str(r#"["a", "b"]"#).unwrap();
    assert_eq!(text.paragraphs(), vec!["one"]);
    assert_eq!(list.paragraphs(), vec!["a", "b"]);
  }

  #[test]
  fn section_order_ignores_storage_order() {
    let json = r#"{
      "results_and_impact": ["r"],
      "introduction": "i",
      "the_problem": ["p"]
    }"#;
    let sections: BTreeMap<SectionKey, SectionBody> =
      serde_json::from_str(json).unwrap();
    let keys: Vec<_> = SectionKey::ORDER
      .into_iter()
      .filter(|k| sections.contains_key(k))
      .collect();
    assert_eq!(keys, vec![
      SectionKey::Introduction,
      SectionKey::TheProblem,
      SectionKey::ResultsAndImpact,
    ]);
  }

  #[test]
  fn missing_result_is_none() {
    let metric: CaseMetric =
      serde_json::from_str(r#"{ "primary": "p95 Latency" }"#).unwrap();
    assert!(metric.result.is_none());
  }
}
