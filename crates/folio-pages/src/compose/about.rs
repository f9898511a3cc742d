//! About page: profile, contact details, skills, résumé and education.

use folio_core::{ContentStore, icon::Icon, route::Route};

use super::{education_card, resume_items};
use crate::{
  meta::{PageMeta, page_title},
  view::{Block, Layout, Link, Page, PageStatus, RichText, Section, View},
};

pub fn compose(store: &ContentStore) -> Page {
  let site = &store.site;
  let contact = &store.contact;

  let profile = Section::untitled()
    .with(Block::Paragraph(RichText::plain(&site.tagline)))
    .with(Block::Paragraph(RichText::plain(&site.positioning)));

  let reach = Section::titled("Contact")
    .muted()
    .with(Block::Paragraph(RichText::plain(&contact.location)))
    .with(Block::Actions(vec![
      Link::mail(&contact.email, &contact.email).with_icon(Icon::Mail),
      Link::external(&contact.linkedin, "LinkedIn").with_icon(Icon::Linkedin),
      Link::external(&contact.github, "GitHub").with_icon(Icon::GitHub),
      Link::external(&contact.portfolio, "Portfolio")
        .with_icon(Icon::ExternalLink),
      Link::external(&contact.resume, "Resume").with_icon(Icon::Document),
    ]));

  let skills =
    Section::titled("Skills").with(Block::Tags(store.skills.clone()));
  let experience =
    Section::titled("Experience").with(Block::Resume(resume_items(store)));
  let education = Section::titled("Education")
    .with(Block::Card(education_card(&store.education)));

  Page {
    route:  Route::About,
    meta:   PageMeta::new(page_title(store, "About"), &site.positioning),
    status: PageStatus::Found,
    view:   View::Interactive(Layout {
      heading:  format!("About {}", site.owner),
      sections: vec![profile, reach, skills, experience, education],
    }),
  }
}
