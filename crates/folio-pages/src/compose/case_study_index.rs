//! Every case study, unfiltered, in content order.

use folio_core::{ContentStore, route::Route};

use super::case_card;
use crate::{
  meta::{PageMeta, page_title},
  view::{Block, Layout, Page, PageStatus, RichText, Section, View},
};

pub fn compose(store: &ContentStore) -> Page {
  let intro = Section::untitled().with(Block::Paragraph(RichText::plain(
    "Product work from discovery through launch, each with the metric it \
     moved.",
  )));
  let cards = Section::untitled()
    .with(Block::CaseCards(store.cases.iter().map(case_card).collect()));

  Page {
    route:  Route::CaseStudies,
    meta:   PageMeta::new(
      page_title(store, "Case Studies"),
      format!("{} case studies by {}.", store.cases.len(), store.site.owner),
    ),
    status: PageStatus::Found,
    view:   View::Interactive(Layout {
      heading:  "Case Studies".into(),
      sections: vec![intro, cards],
    }),
  }
}
