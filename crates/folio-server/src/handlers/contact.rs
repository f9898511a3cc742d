//! POST handler for the contact form.
//!
//! Nothing is sent anywhere. A valid submission renders the thank-you view;
//! an invalid one re-renders the form with the failing fields flagged. The
//! thank-you view stays reachable at `/contact?sent=1` so a theme toggle on
//! it lands back on the same state.

use axum::{
  Form,
  extract::State,
  http::{HeaderMap, Method, StatusCode},
  response::Response,
};
use folio_core::route::Route;
use folio_html::CONTACT_FORM_PATH;
use folio_pages::{
  PageState, compose,
  contact::{ContactForm, ContactSubmission},
};

use super::respond;
use crate::{AppState, error::Result};

pub async fn submit(
  State(state): State<AppState>,
  method: Method,
  headers: HeaderMap,
  Form(submission): Form<ContactSubmission>,
) -> Result<Response> {
  let mut contact = ContactForm::new();
  let sent = contact.submit(submission, state.telemetry.as_ref());

  let page_state = PageState {
    contact,
    ..PageState::default()
  };
  let page = compose(&state.content, &Route::Contact, &page_state);
  let (status, return_to) = if sent {
    (StatusCode::OK, format!("{CONTACT_FORM_PATH}?sent=1"))
  } else {
    (StatusCode::UNPROCESSABLE_ENTITY, CONTACT_FORM_PATH.to_owned())
  };

  respond(&state, &method, &headers, &page, &return_to, false, status)
}
