//! Artifact sub-documents attached to every case study.
//!
//! Two of them ([`RequirementsDoc`] and [`TrackingPlan`]) have a printable
//! form selected by [`ArtifactKind`]. The [`Roadmap`] is only shown inline.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

// ─── Bundle ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifacts {
  pub requirements:  RequirementsDoc,
  pub tracking_plan: TrackingPlan,
  pub roadmap:       Roadmap,
}

/// Which artifact to render in printable form.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
  Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
  Requirements,
  TrackingPlan,
}

impl ArtifactKind {
  pub const ALL: [ArtifactKind; 2] =
    [ArtifactKind::Requirements, ArtifactKind::TrackingPlan];

  pub fn title(self) -> &'static str {
    match self {
      Self::Requirements => "Product Requirements Document",
      Self::TrackingPlan => "Tracking Plan",
    }
  }

  pub fn short_label(self) -> &'static str {
    match self {
      Self::Requirements => "PRD",
      Self::TrackingPlan => "Tracking Plan",
    }
  }
}

// ─── Requirements document ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementsDoc {
  pub context:           String,
  pub goals:             Goals,
  pub non_goals:         Vec<String>,
  pub users:             Vec<Persona>,
  pub solution_overview: String,
  pub scope:             Vec<String>,
  pub metrics:           MetricsPlan,
  pub risks:             Vec<String>,
  pub launch_plan:       Horizons,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goals {
  pub primary_metric: String,
  pub items:          Vec<String>,
}

/// A target user and what research surfaced about them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
  pub persona:  String,
  pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsPlan {
  /// Prose description of how metrics roll up to the north star.
  pub kpi_narrative: String,
  pub events:        Vec<EventSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSpec {
  pub name:       String,
  pub properties: Vec<String>,
}

/// A now / next / later plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Horizons {
  pub now:   Vec<String>,
  pub next:  Vec<String>,
  pub later: Vec<String>,
}

impl Horizons {
  pub fn labelled(&self) -> [(&'static str, &[String]); 3] {
    [
      ("Now", self.now.as_slice()),
      ("Next", self.next.as_slice()),
      ("Later", self.later.as_slice()),
    ]
  }
}

pub type Roadmap = Horizons;

// ─── Tracking plan ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingPlan {
  pub primary_metric: String,
  pub events:         Vec<TrackedEvent>,
  pub dashboards:     Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedEvent {
  pub name:        String,
  pub properties:  Vec<String>,
  pub description: String,
}
