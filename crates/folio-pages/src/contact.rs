//! Contact form state.
//!
//! Submission never leaves the process: a valid form fires one telemetry
//! event and flips the page into its thank-you state.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use folio_core::telemetry::{self, TelemetrySink};

use crate::view::FormView;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
  #[serde(default)]
  pub name:    String,
  #[serde(default)]
  pub email:   String,
  #[serde(default)]
  pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FormField {
  Name,
  Email,
  Message,
}

impl FormField {
  pub fn label(self) -> &'static str {
    match self {
      Self::Name => "Name",
      Self::Email => "Email",
      Self::Message => "Message",
    }
  }
}

impl ContactSubmission {
  /// Every field is required; the email must at least contain `@`.
  pub fn validate(&self) -> Result<(), Vec<FormField>> {
    let mut invalid = Vec::new();
    if self.name.trim().is_empty() {
      invalid.push(FormField::Name);
    }
    let email = self.email.trim();
    if email.is_empty() || !email.contains('@') {
      invalid.push(FormField::Email);
    }
    if self.message.trim().is_empty() {
      invalid.push(FormField::Message);
    }
    if invalid.is_empty() { Ok(()) } else { Err(invalid) }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
  submitted: bool,
  draft:     ContactSubmission,
  invalid:   Vec<FormField>,
}

impl ContactForm {
  pub fn new() -> Self { Self::default() }

  /// A form that was already sent, shown again after a reload.
  pub fn completed() -> Self {
    Self {
      submitted: true,
      ..Self::default()
    }
  }

  pub fn submitted(&self) -> bool { self.submitted }

  pub fn invalid(&self) -> &[FormField] { &self.invalid }

  /// Validate and "send". Returns whether the form is now submitted.
  pub fn submit(
    &mut self,
    submission: ContactSubmission,
    sink: &dyn TelemetrySink,
  ) -> bool {
    match submission.validate() {
      Ok(()) => {
        sink.track(telemetry::CONTACT_FORM_SUBMIT, &telemetry::Properties::new());
        self.submitted = true;
        self.draft = ContactSubmission::default();
        self.invalid.clear();
      }
      Err(invalid) => {
        tracing::debug!(?invalid, "contact form rejected");
        self.draft = submission;
        self.invalid = invalid;
      }
    }
    self.submitted
  }

  pub fn view(&self) -> FormView {
    FormView {
      name:    self.draft.name.clone(),
      email:   self.draft.email.clone(),
      message: self.draft.message.clone(),
      invalid: self.invalid.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use folio_core::telemetry::RecordingSink;

  use super::*;

  fn filled() -> ContactSubmission {
    ContactSubmission {
      name:    "Grace".into(),
      email:   "grace@example.com".into(),
      message: "Hello".into(),
    }
  }

  #[test]
  fn valid_submission_flips_state_and_tracks() {
    let sink = RecordingSink::new();
    let mut form = ContactForm::new();
    assert!(form.submit(filled(), &sink));
    assert!(form.submitted());
    assert_eq!(sink.named(telemetry::CONTACT_FORM_SUBMIT).len(), 1);
  }

  #[test]
  fn completed_form_shows_thank_you() {
    let form = ContactForm::completed();
    assert!(form.submitted());
    assert!(form.invalid().is_empty());
  }

  #[test]
  fn missing_fields_are_reported_and_kept() {
    let sink = RecordingSink::new();
    let mut form = ContactForm::new();
    let partial = ContactSubmission {
      email: "not-an-email".into(),
      ..filled()
    };
    assert!(!form.submit(partial, &sink));
    assert_eq!(form.invalid(), &[FormField::Email]);
    assert_eq!(form.view().name, "Grace");
    assert!(sink.events().is_empty());
  }

  #[test]
  fn blank_fields_do_not_count() {
    let blank = ContactSubmission {
      name:    "  ".into(),
      email:   String::new(),
      message: "\n".into(),
    };
    assert_eq!(blank.validate(), Err(vec![
      FormField::Name,
      FormField::Email,
      FormField::Message,
    ]));
  }
}
