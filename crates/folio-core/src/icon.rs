//! Closed sets of icons and illustrative graphics.
//!
//! Content refers to icons by name. Unknown names resolve to
//! [`Icon::Generic`] so a typo in the content file degrades to a neutral glyph
//! instead of an empty slot.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

// ─── Icons ───────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize,
  Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum Icon {
  Bug,
  TrendingUp,
  ShieldCheck,
  Mail,
  UsersGroup,
  CheckCircle,
  ArrowRight,
  ExternalLink,
  GitHub,
  Linkedin,
  Logo,
  Moon,
  Sun,
  Printer,
  Document,
  /// Fallback for any name not listed above.
  Generic,
}

impl From<String> for Icon {
  fn from(name: String) -> Self {
    Icon::from_str(&name).unwrap_or(Icon::Generic)
  }
}

impl From<Icon> for String {
  fn from(icon: Icon) -> Self { icon.as_ref().to_owned() }
}

// ─── Case graphics ───────────────────────────────────────────────────────────

/// Illustration shown beside a case study. Every case gets one; cases
/// without a bespoke illustration get [`Graphic::Placeholder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Graphic {
  CodeReview,
  DocumentFlow,
  LiveChart,
  ComponentGrid,
  Pipeline,
  SupplyMap,
  Placeholder,
}

impl Graphic {
  pub fn for_case(case_id: &str) -> Self {
    match case_id {
      "ai-code-reviewer" => Self::CodeReview,
      "confluence-jira-assistant" => Self::DocumentFlow,
      "realtime-ops-dashboard" => Self::LiveChart,
      "design-system" => Self::ComponentGrid,
      "deploy-velocity" => Self::Pipeline,
      "relief-hack" => Self::SupplyMap,
      _ => Self::Placeholder,
    }
  }

  pub fn alt_text(self) -> &'static str {
    match self {
      Self::CodeReview => "Pull request annotated by an automated reviewer",
      Self::DocumentFlow => "A page of requirements turning into tickets",
      Self::LiveChart => "A live-updating line chart",
      Self::ComponentGrid => "A grid of reusable interface components",
      Self::Pipeline => "A deployment pipeline with sequential stages",
      Self::SupplyMap => "Map pins connected by delivery routes",
      Self::Placeholder => "Abstract illustration",
    }
  }
}
