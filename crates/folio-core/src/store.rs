//! The `ContentStore`: every piece of portfolio content, loaded once.
//!
//! The store is built at startup from JSON and shared read-only for the life
//! of the process. Lookups are by exact identifier equality and a miss is a
//! normal `None`, never an error.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  content::{
    CaseStudy, ContactInfo, Education, Highlight, ResumeBullet, SiteProfile,
  },
};

/// The content bundled into the binary.
pub const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStore {
  pub site:       SiteProfile,
  pub contact:    ContactInfo,
  pub highlights: Vec<Highlight>,
  pub skills:     Vec<String>,
  pub resume:     Vec<ResumeBullet>,
  pub education:  Education,
  /// Authored order is display order.
  pub cases:      Vec<CaseStudy>,
}

impl ContentStore {
  /// Parse and validate a content document.
  pub fn from_json(raw: &str) -> Result<Self> {
    let store: ContentStore = serde_json::from_str(raw)?;
    store.validate()?;
    Ok(store)
  }

  /// Load the content compiled into the crate.
  pub fn embedded() -> Result<Self> { Self::from_json(EMBEDDED_CONTENT) }

  fn validate(&self) -> Result<()> {
    let mut seen = HashSet::new();
    for case in &self.cases {
      if !seen.insert(case.id.as_str()) {
        return Err(Error::DuplicateCaseId(case.id.clone()));
      }
    }

    let dangling = self
      .resume
      .iter()
      .filter_map(|b| b.case_study_id.as_deref())
      .filter(|id| !seen.contains(id))
      .count();
    if dangling > 0 {
      tracing::debug!(dangling, "résumé bullets reference unknown case studies");
    }
    Ok(())
  }

  /// Find a case study by identifier.
  pub fn case_study(&self, id: &str) -> Option<&CaseStudy> {
    self.cases.iter().find(|c| c.id == id)
  }

  /// Resolve a résumé bullet's back-reference, if it points anywhere real.
  pub fn linked_case(&self, bullet: &ResumeBullet) -> Option<&CaseStudy> {
    bullet
      .case_study_id
      .as_deref()
      .and_then(|id| self.case_study(id))
  }
}
