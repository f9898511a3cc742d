//! Write-only telemetry seam.
//!
//! Callers hand an event name and a flat property bag to a
//! [`TelemetrySink`] and move on; nothing is returned and nothing can fail
//! from the caller's point of view.

use std::{collections::BTreeMap, sync::Mutex};

pub type Properties = BTreeMap<String, String>;

/// Build a property bag from `(key, value)` pairs.
pub fn properties<K, V, I>(pairs: I) -> Properties
where
  K: Into<String>,
  V: Into<String>,
  I: IntoIterator<Item = (K, V)>,
{
  pairs
    .into_iter()
    .map(|(k, v)| (k.into(), v.into()))
    .collect()
}

// ─── Event names ─────────────────────────────────────────────────────────────

pub const PAGE_VIEW: &str = "page_view";
pub const THEME_CHANGED: &str = "theme_changed";
pub const CASE_STUDY_VIEW: &str = "case_study_view";
pub const ARTIFACT_PRINT: &str = "artifact_print";
pub const CONTACT_FORM_SUBMIT: &str = "contact_form_submit";

// ─── Sinks ───────────────────────────────────────────────────────────────────

pub trait TelemetrySink: Send + Sync {
  fn track(&self, event: &str, properties: &Properties);
}

/// Logs every event at INFO under the `folio::telemetry` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TelemetrySink for TracingSink {
  fn track(&self, event: &str, properties: &Properties) {
    tracing::info!(target: "folio::telemetry", event, ?properties, "telemetry");
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryEvent {
  pub name:       String,
  pub properties: Properties,
}

/// Keeps every event in memory. Useful in tests and for local inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
  events: Mutex<Vec<TelemetryEvent>>,
}

impl RecordingSink {
  pub fn new() -> Self { Self::default() }

  pub fn events(&self) -> Vec<TelemetryEvent> {
    self
      .events
      .lock()
      .map(|events| events.clone())
      .unwrap_or_default()
  }

  pub fn named(&self, name: &str) -> Vec<TelemetryEvent> {
    self.events().into_iter().filter(|e| e.name == name).collect()
  }
}

impl TelemetrySink for RecordingSink {
  fn track(&self, event: &str, properties: &Properties) {
    // A poisoned lock drops the event; telemetry never surfaces failures.
    if let Ok(mut events) = self.events.lock() {
      events.push(TelemetryEvent {
        name:       event.to_owned(),
        properties: properties.clone(),
      });
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn recording_sink_keeps_events_in_order() {
    let sink = RecordingSink::new();
    sink.track(PAGE_VIEW, &properties([("path", "/")]));
    sink.track(THEME_CHANGED, &properties([("to_theme", "dark")]));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, PAGE_VIEW);
    assert_eq!(events[0].properties["path"], "/");
    assert_eq!(sink.named(THEME_CHANGED).len(), 1);
  }
}
