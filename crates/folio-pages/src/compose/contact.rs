//! Contact page: the form, or the thank-you view once it was submitted.

use folio_core::{ContentStore, route::Route};

use crate::{
  contact::ContactForm,
  meta::{PageMeta, page_title},
  view::{Block, Layout, Link, Page, PageStatus, RichText, Section, View},
};

pub const THANK_YOU_HEADING: &str = "Thank you!";

pub fn compose(store: &ContentStore, form: &ContactForm) -> Page {
  let contact = &store.contact;

  let body = if form.submitted() {
    Section::untitled().with(Block::Notice {
      heading: THANK_YOU_HEADING.into(),
      body:    Some(
        "Your message is on its way. I usually reply within two business \
         days."
          .into(),
      ),
      link:    Some(Link::internal(Route::Home.path(), "← Back to Home")),
    })
  } else {
    Section::untitled()
      .with(Block::Paragraph(RichText::plain(format!(
        "Hiring, collaborating, or just curious? Leave a note below or write \
         to {} directly.",
        contact.email
      ))))
      .with(Block::ContactForm(form.view()))
      .with(Block::Actions(vec![
        Link::mail(&contact.email, "Email"),
        Link::external(&contact.linkedin, "LinkedIn"),
      ]))
  };

  Page {
    route:  Route::Contact,
    meta:   PageMeta::new(
      page_title(store, "Contact"),
      format!("Get in touch with {}.", store.site.owner),
    ),
    status: PageStatus::Found,
    view:   View::Interactive(Layout {
      heading:  "Get in Touch".into(),
      sections: vec![body],
    }),
  }
}
