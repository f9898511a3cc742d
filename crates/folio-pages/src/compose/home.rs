//! Home page: introduction, highlights, a slice of case studies, skills,
//! résumé and education.

use folio_core::{ContentStore, route::Route};

use super::{case_card, education_card, highlight_card, resume_items};
use crate::{
  meta::{PageMeta, person_schema},
  view::{Block, Layout, Link, Page, PageStatus, RichText, Section, View},
};

pub const HOME_HIGHLIGHTS: usize = 6;
pub const HOME_CASES: usize = 6;

pub fn compose(store: &ContentStore) -> Page {
  let site = &store.site;
  let contact = &store.contact;

  let intro = Section::titled("Introduction")
    .with(Block::Paragraph(RichText::plain(&site.positioning)))
    .with(Block::Actions(vec![
      Link::mail(&contact.email, "Get in Touch"),
      Link::external(&contact.resume, "View Resume"),
    ]));

  let highlights = Section::titled("Key Highlights").muted().with(
    Block::Highlights(
      store
        .highlights
        .iter()
        .take(HOME_HIGHLIGHTS)
        .map(highlight_card)
        .collect(),
    ),
  );

  let mut cases = Section::titled("Case Studies").with(Block::CaseCards(
    store.cases.iter().take(HOME_CASES).map(case_card).collect(),
  ));
  if store.cases.len() > HOME_CASES {
    cases = cases.with(Block::Actions(vec![Link::internal(
      Route::CaseStudies.path(),
      format!("View all {} case studies", store.cases.len()),
    )]));
  }

  let skills = Section::titled("Skills & Resume")
    .muted()
    .with(Block::Subheading("Core Competencies".into()))
    .with(Block::Tags(store.skills.clone()))
    .with(Block::Subheading("Experience Highlights".into()))
    .with(Block::Resume(resume_items(store)));

  let education = Section::titled("Education")
    .with(Block::Card(education_card(&store.education)));

  Page {
    route:  Route::Home,
    meta:   PageMeta::new(&site.title, &site.tagline)
      .with_structured_data(person_schema(store)),
    status: PageStatus::Found,
    view:   View::Interactive(Layout {
      heading:  site.tagline.clone(),
      sections: vec![intro, highlights, cases, skills, education],
    }),
  }
}
