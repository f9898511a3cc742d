//! Light/dark theme preference.
//!
//! The flow is explicit: load the stored value, compute the initial theme
//! (stored value, then OS signal, then light), apply it to the document root,
//! and on every toggle apply and persist again. A failed write is logged and
//! ignored; the in-memory value stays authoritative for the session.

use std::{collections::BTreeSet, str::FromStr, sync::Mutex};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{Error, Result};

/// The key the preference is persisted under.
pub const THEME_KEY: &str = "theme";

/// Root class present while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString,
  AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

impl Theme {
  pub fn toggled(self) -> Self {
    match self {
      Self::Light => Self::Dark,
      Self::Dark => Self::Light,
    }
  }
}

/// Interpret a stored value. Only the exact strings `light` and `dark` count;
/// anything else is treated as unset.
pub fn parse_preference(raw: Option<&str>) -> Option<Theme> {
  raw.and_then(|value| Theme::from_str(value).ok())
}

/// Pick the theme for a fresh session.
pub fn initial_theme(stored: Option<&str>, os: Option<Theme>) -> Theme {
  parse_preference(stored).or(os).unwrap_or_default()
}

// ─── Document root ───────────────────────────────────────────────────────────

/// The set of classes on the document root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
  classes: BTreeSet<String>,
}

impl DocumentRoot {
  pub fn apply(&mut self, theme: Theme) {
    match theme {
      Theme::Dark => {
        self.classes.insert(DARK_CLASS.to_owned());
      }
      Theme::Light => {
        self.classes.remove(DARK_CLASS);
      }
    }
  }

  pub fn has_class(&self, class: &str) -> bool { self.classes.contains(class) }

  /// Space-separated class list, or `None` when empty.
  pub fn class_attr(&self) -> Option<String> {
    if self.classes.is_empty() {
      None
    } else {
      Some(
        self
          .classes
          .iter()
          .map(String::as_str)
          .collect::<Vec<_>>()
          .join(" "),
      )
    }
  }
}

// ─── Persistence ─────────────────────────────────────────────────────────────

/// Client-local key-value storage for the single theme preference.
pub trait PreferenceStore {
  fn load(&self) -> Option<String>;
  fn save(&self, value: &str) -> Result<()>;
}

/// In-memory preference slot. Can be built read-only to model storage that
/// refuses writes.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
  slot:     Mutex<Option<String>>,
  readonly: bool,
}

impl MemoryPreferences {
  pub fn new() -> Self { Self::default() }

  pub fn with_value(value: impl Into<String>) -> Self {
    Self {
      slot:     Mutex::new(Some(value.into())),
      readonly: false,
    }
  }

  pub fn readonly(value: Option<String>) -> Self {
    Self {
      slot:     Mutex::new(value),
      readonly: true,
    }
  }
}

impl PreferenceStore for MemoryPreferences {
  fn load(&self) -> Option<String> {
    self.slot.lock().ok().and_then(|slot| slot.clone())
  }

  fn save(&self, value: &str) -> Result<()> {
    if self.readonly {
      return Err(Error::StorageUnavailable);
    }
    let mut slot = self.slot.lock().map_err(|_| Error::StorageUnavailable)?;
    *slot = Some(value.to_owned());
    Ok(())
  }
}

// ─── Controller ──────────────────────────────────────────────────────────────

/// Owns the current theme, the root marker, and the store it persists to.
///
/// Passed explicitly to whatever renders the page; there is no global.
#[derive(Debug)]
pub struct ThemeController<P: PreferenceStore> {
  theme: Theme,
  root:  DocumentRoot,
  store: P,
}

impl<P: PreferenceStore> ThemeController<P> {
  /// Initialise from the store, falling back to the OS color-scheme signal.
  pub fn init(store: P, os: Option<Theme>) -> Self {
    let stored = store.load();
    let theme = initial_theme(stored.as_deref(), os);
    let mut root = DocumentRoot::default();
    root.apply(theme);
    Self { theme, root, store }
  }

  pub fn theme(&self) -> Theme { self.theme }

  pub fn root(&self) -> &DocumentRoot { &self.root }

  pub fn store(&self) -> &P { &self.store }

  /// Flip light and dark, update the root marker and persist. Never fails.
  pub fn toggle(&mut self) -> Theme {
    self.theme = self.theme.toggled();
    self.root.apply(self.theme);
    if let Err(e) = self.store.save(self.theme.as_ref()) {
      tracing::debug!(error = %e, "theme preference not persisted");
    }
    self.theme
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stored_value_wins_over_os() {
    assert_eq!(initial_theme(Some("light"), Some(Theme::Dark)), Theme::Light);
    assert_eq!(initial_theme(Some("dark"), None), Theme::Dark);
  }

  #[test]
  fn os_signal_used_when_unset() {
    assert_eq!(initial_theme(None, Some(Theme::Dark)), Theme::Dark);
    assert_eq!(initial_theme(None, Some(Theme::Light)), Theme::Light);
    assert_eq!(initial_theme(None, None), Theme::Light);
  }

  #[test]
  fn invalid_stored_value_is_unset() {
    assert_eq!(initial_theme(Some("Dark"), None), Theme::Light);
    assert_eq!(initial_theme(Some("blue"), Some(Theme::Dark)), Theme::Dark);
    assert_eq!(initial_theme(Some(""), None), Theme::Light);
  }

  #[test]
  fn dark_os_marks_root_on_init() {
    let controller = ThemeController::init(MemoryPreferences::new(), Some(Theme::Dark));
    assert_eq!(controller.theme(), Theme::Dark);
    assert!(controller.root().has_class(DARK_CLASS));
    // Initialisation alone does not persist anything.
    assert_eq!(controller.store().load(), None);
  }

  #[test]
  fn toggle_persists_and_marks_root() {
    let mut controller = ThemeController::init(MemoryPreferences::new(), None);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.store().load().as_deref(), Some("dark"));
    assert_eq!(controller.root().class_attr().as_deref(), Some("dark"));
  }

  #[test]
  fn double_toggle_restores_state() {
    let mut controller =
      ThemeController::init(MemoryPreferences::with_value("light"), None);
    let root_before = controller.root().clone();
    controller.toggle();
    controller.toggle();
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.root(), &root_before);
    assert_eq!(controller.store().load().as_deref(), Some("light"));
  }

  #[test]
  fn storage_failure_keeps_in_memory_value() {
    let mut controller =
      ThemeController::init(MemoryPreferences::readonly(None), None);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.theme(), Theme::Dark);
    assert!(controller.root().has_class(DARK_CLASS));
    assert_eq!(controller.store().load(), None);
  }
}
