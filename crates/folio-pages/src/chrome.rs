//! Header and footer content shared by every interactive page.

use folio_core::{ContentStore, icon::Icon, route::Route};

use crate::view::Link;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
  pub owner:       String,
  pub positioning: String,
  pub email:       String,
  pub location:    String,
  /// Site navigation, in display order.
  pub nav:         Vec<Link>,
  /// Outbound profile links for the footer.
  pub social:      Vec<Link>,
}

impl Chrome {
  pub fn from_store(store: &ContentStore) -> Self {
    let contact = &store.contact;
    Self {
      owner:       store.site.owner.clone(),
      positioning: store.site.positioning.clone(),
      email:       contact.email.clone(),
      location:    contact.location.clone(),
      nav:         vec![
        Link::internal(Route::CaseStudies.path(), "Case Studies"),
        Link::internal(Route::Artifacts.path(), "Artifacts"),
        Link::internal(Route::About.path(), "About"),
        Link::internal(Route::Contact.path(), "Contact"),
        Link::external(&contact.resume, "Resume"),
      ],
      social:      vec![
        Link::external(&contact.linkedin, "LinkedIn").with_icon(Icon::Linkedin),
        Link::external(&contact.github, "GitHub").with_icon(Icon::GitHub),
        Link::external(&contact.portfolio, "Portfolio")
          .with_icon(Icon::ExternalLink),
      ],
    }
  }
}
