//! Route → page dispatch and the building blocks shared between pages.

pub mod about;
pub mod artifacts;
pub mod case_study;
pub mod case_study_index;
pub mod contact;
pub mod home;

use folio_core::{
  ContentStore,
  content::{CaseStudy, Education, Highlight},
  route::Route,
};

use crate::{
  contact::ContactForm,
  print::PrintSession,
  view::{Card, CaseCard, HighlightCard, Link, Page, ResumeItem},
};

/// Page-local state that outlives a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
  pub print:   PrintSession,
  pub contact: ContactForm,
}

/// Build the page for `route`. Total: every route yields a page.
pub fn compose(store: &ContentStore, route: &Route, state: &PageState) -> Page {
  match route {
    Route::Home => home::compose(store),
    Route::CaseStudies => case_study_index::compose(store),
    Route::CaseStudy { id } => case_study::compose(store, id, &state.print),
    Route::Artifacts => artifacts::compose(store),
    Route::About => about::compose(store),
    Route::Contact => contact::compose(store, &state.contact),
  }
}

// ─── Shared pieces ───────────────────────────────────────────────────────────

pub(crate) fn highlight_card(highlight: &Highlight) -> HighlightCard {
  HighlightCard {
    icon:  highlight.icon,
    value: highlight.value.clone(),
    label: highlight.label.clone(),
  }
}

pub(crate) fn case_card(case: &CaseStudy) -> CaseCard {
  CaseCard {
    href:    Route::case_study(&case.id).path(),
    title:   case.title.clone(),
    summary: case.summary.clone(),
    tags:    case.tags.clone(),
  }
}

/// Résumé bullets with "read more" links for the ones whose case exists.
pub(crate) fn resume_items(store: &ContentStore) -> Vec<ResumeItem> {
  store
    .resume
    .iter()
    .map(|bullet| ResumeItem {
      content: bullet.content.clone(),
      link:    store.linked_case(bullet).map(|case| {
        Link::internal(Route::case_study(&case.id).path(), "Read more")
      }),
    })
    .collect()
}

pub(crate) fn education_card(education: &Education) -> Card {
  Card {
    title:    education.degree.clone(),
    subtitle: Some(education.school.clone()),
    aside:    vec![education.period.clone(), education.location.clone()],
    items:    education.details.clone(),
    links:    Vec::new(),
  }
}
