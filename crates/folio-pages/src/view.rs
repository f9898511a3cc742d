//! The view tree every composer produces and the HTML layer consumes.
//!
//! Nodes carry only display data; links are already resolved to paths.

use std::time::Duration;

use folio_core::{
  icon::{Graphic, Icon},
  route::Route,
};

use crate::{contact::FormField, meta::PageMeta, print::PrintDocument};

// ─── Page ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
  Found,
  /// The route was valid but the record it named does not exist.
  NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
  pub route:  Route,
  pub meta:   PageMeta,
  pub status: PageStatus,
  pub view:   View,
}

impl Page {
  /// The visible top-level heading.
  pub fn heading(&self) -> &str {
    match &self.view {
      View::Interactive(layout) => &layout.heading,
      View::Printable(printout) => &printout.document.title,
    }
  }

  pub fn is_printable(&self) -> bool { matches!(self.view, View::Printable(_)) }
}

/// Either the normal page or the chrome-free printable document, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
  Interactive(Layout),
  Printable(Printout),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
  pub heading:  String,
  pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Printout {
  pub document:  PrintDocument,
  /// Wait this long before opening the print dialog so the document paints.
  pub delay:     Duration,
  /// Where the host returns once printing finishes or is cancelled.
  pub return_to: String,
}

// ─── Sections and blocks ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
  #[default]
  Plain,
  Muted,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
  pub title:  Option<String>,
  pub tone:   Tone,
  pub blocks: Vec<Block>,
}

impl Section {
  pub fn titled(title: impl Into<String>) -> Self {
    Self {
      title: Some(title.into()),
      ..Self::default()
    }
  }

  pub fn untitled() -> Self { Self::default() }

  pub fn muted(mut self) -> Self {
    self.tone = Tone::Muted;
    self
  }

  pub fn with(mut self, block: Block) -> Self {
    self.blocks.push(block);
    self
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
  Subheading(String),
  Paragraph(RichText),
  List(Vec<RichText>),
  Tags(Vec<String>),
  Actions(Vec<Link>),
  Highlights(Vec<HighlightCard>),
  CaseCards(Vec<CaseCard>),
  Resume(Vec<ResumeItem>),
  Metric {
    primary: String,
    result:  String,
  },
  Graphic(Graphic),
  Card(Card),
  ContactForm(FormView),
  Notice {
    heading: String,
    body:    Option<String>,
    link:    Option<Link>,
  },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
  Internal,
  External,
  Mail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
  pub href:  String,
  pub label: String,
  pub kind:  LinkKind,
  pub icon:  Option<Icon>,
}

impl Link {
  pub fn internal(href: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      href:  href.into(),
      label: label.into(),
      kind:  LinkKind::Internal,
      icon:  None,
    }
  }

  pub fn external(href: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      kind: LinkKind::External,
      ..Self::internal(href, label)
    }
  }

  pub fn mail(address: &str, label: impl Into<String>) -> Self {
    Self {
      kind: LinkKind::Mail,
      ..Self::internal(format!("mailto:{address}"), label)
    }
  }

  pub fn with_icon(mut self, icon: Icon) -> Self {
    self.icon = Some(icon);
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightCard {
  pub icon:  Icon,
  pub value: String,
  pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseCard {
  pub href:    String,
  pub title:   String,
  pub summary: String,
  pub tags:    Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeItem {
  pub content: String,
  /// Present only when the bullet's case study exists.
  pub link:    Option<Link>,
}

/// A bordered panel: a title, an optional accent line, right-aligned facts,
/// a bullet list and trailing links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
  pub title:    String,
  pub subtitle: Option<String>,
  pub aside:    Vec<String>,
  pub items:    Vec<String>,
  pub links:    Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
  pub name:    String,
  pub email:   String,
  pub message: String,
  pub invalid: Vec<FormField>,
}

// ─── Rich text ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
  Text(String),
  Strong(String),
}

/// A run of text with `**strong**` spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText(pub Vec<Inline>);

impl RichText {
  pub fn plain(text: impl Into<String>) -> Self {
    Self(vec![Inline::Text(text.into())])
  }

  /// Split on `**` pairs. An unpaired `**` is kept as literal text.
  pub fn parse(source: &str) -> Self {
    let mut out = Vec::new();
    let mut rest = source;
    while let Some(open) = rest.find("**") {
      let after = &rest[open + 2..];
      let Some(close) = after.find("**") else { break };
      if open > 0 {
        out.push(Inline::Text(rest[..open].to_owned()));
      }
      out.push(Inline::Strong(after[..close].to_owned()));
      rest = &after[close + 2..];
    }
    if !rest.is_empty() {
      out.push(Inline::Text(rest.to_owned()));
    }
    Self(out)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strong_spans_are_split_out() {
    let text = RichText::parse("* **Slow Velocity:** Developers waited.");
    assert_eq!(text.0, vec![
      Inline::Text("* ".into()),
      Inline::Strong("Slow Velocity:".into()),
      Inline::Text(" Developers waited.".into()),
    ]);
  }

  #[test]
  fn unpaired_marker_stays_literal() {
    let text = RichText::parse("a **b");
    assert_eq!(text.0, vec![Inline::Text("a **b".into())]);
  }
}
