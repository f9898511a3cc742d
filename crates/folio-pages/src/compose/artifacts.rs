//! Artifacts index: every case study's printable documents in one place.

use folio_core::{ContentStore, route::Route};

use super::case_study::artifact_links;
use crate::{
  meta::{PageMeta, page_title},
  view::{Block, Card, Layout, Link, Page, PageStatus, RichText, Section, View},
};

pub fn compose(store: &ContentStore) -> Page {
  let intro = Section::untitled().with(Block::Paragraph(RichText::plain(
    "Requirements documents and tracking plans behind each case study. Open \
     one to print it or save it as a PDF.",
  )));

  let mut list = Section::untitled();
  for case in &store.cases {
    let mut links = artifact_links(&case.id);
    links.push(Link::internal(
      Route::case_study(&case.id).path(),
      "Read the case study",
    ));
    list = list.with(Block::Card(Card {
      title: case.title.clone(),
      subtitle: Some(format!("Primary metric: {}", case.metrics.primary)),
      aside: Vec::new(),
      items: Vec::new(),
      links,
    }));
  }

  Page {
    route:  Route::Artifacts,
    meta:   PageMeta::new(
      page_title(store, "Artifacts"),
      "Printable PRDs and tracking plans for every case study.",
    ),
    status: PageStatus::Found,
    view:   View::Interactive(Layout {
      heading:  "Artifacts".into(),
      sections: vec![intro, list],
    }),
  }
}
