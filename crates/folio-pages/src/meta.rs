//! Document `<head>` metadata.
//!
//! Each page declares a [`PageMeta`]. The [`DocumentHead`] applies it by
//! replacement, so applying the same meta twice yields the same tags and a
//! page without structured data clears whatever the previous page set.

use serde_json::{Value, json};

use folio_core::{
  ContentStore,
  content::CaseStudy,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
  pub title:           String,
  pub description:     String,
  /// JSON-LD block, if the page has one.
  pub structured_data: Option<Value>,
}

impl PageMeta {
  pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      title:           title.into(),
      description:     description.into(),
      structured_data: None,
    }
  }

  pub fn with_structured_data(mut self, data: Value) -> Self {
    self.structured_data = Some(data);
    self
  }
}

/// Title suffixed with the owner's name, e.g. `About | Ada Lovelace`.
pub fn page_title(store: &ContentStore, title: &str) -> String {
  format!("{title} | {}", store.site.owner)
}

pub fn person_schema(store: &ContentStore) -> Value {
  json!({
    "@context": "https://schema.org",
    "@type": "Person",
    "name": store.site.owner,
    "description": store.site.positioning,
    "email": store.contact.mailto(),
    "address": store.contact.location,
    "url": store.contact.portfolio,
    "sameAs": [store.contact.linkedin, store.contact.github],
  })
}

pub fn article_schema(store: &ContentStore, case: &CaseStudy) -> Value {
  json!({
    "@context": "https://schema.org",
    "@type": "Article",
    "headline": case.title,
    "description": case.summary,
    "keywords": case.tags.join(", "),
    "author": { "@type": "Person", "name": store.site.owner },
  })
}

// ─── Head ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HeadTag {
  Title(String),
  Meta { name: &'static str, content: String },
  /// Serialized JSON-LD, ready to embed.
  StructuredData(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentHead {
  title:           String,
  description:     Option<String>,
  structured_data: Option<Value>,
}

impl DocumentHead {
  pub fn new() -> Self { Self::default() }

  pub fn apply(&mut self, meta: &PageMeta) {
    self.title = meta.title.clone();
    self.description = Some(meta.description.clone());
    self.structured_data = meta.structured_data.clone();
  }

  pub fn title(&self) -> &str { &self.title }

  pub fn structured_data(&self) -> Option<&Value> {
    self.structured_data.as_ref()
  }

  pub fn tags(&self) -> Vec<HeadTag> {
    let mut tags = vec![HeadTag::Title(self.title.clone())];
    if let Some(description) = &self.description {
      tags.push(HeadTag::Meta {
        name:    "description",
        content: description.clone(),
      });
    }
    if let Some(data) = &self.structured_data {
      tags.push(HeadTag::StructuredData(data.to_string()));
    }
    tags
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn applying_twice_does_not_duplicate() {
    let meta = PageMeta::new("Home", "desc")
      .with_structured_data(json!({ "@type": "Person" }));
    let mut head = DocumentHead::new();
    head.apply(&meta);
    let once = head.tags();
    head.apply(&meta);
    assert_eq!(head.tags(), once);
    assert_eq!(once.len(), 3);
  }

  #[test]
  fn page_without_structured_data_clears_it() {
    let mut head = DocumentHead::new();
    head.apply(
      &PageMeta::new("Home", "d").with_structured_data(json!({ "a": 1 })),
    );
    head.apply(&PageMeta::new("About", "d"));
    assert!(head.structured_data().is_none());
    assert!(
      !head
        .tags()
        .iter()
        .any(|t| matches!(t, HeadTag::StructuredData(_)))
    );
    assert_eq!(head.title(), "About");
  }
}
