//! Case-study detail page, its printable artifact mode, and the not-found
//! fallback.

use folio_core::{
  ContentStore,
  artifact::ArtifactKind,
  content::CaseStudy,
  icon::{Graphic, Icon},
  route::Route,
};

use crate::{
  meta::{PageMeta, article_schema, page_title},
  print::{self, PRINT_DELAY, PrintSession, ViewMode, print_path},
  view::{
    Block, Layout, Link, Page, PageStatus, Printout, RichText, Section, View,
  },
};

pub const NOT_FOUND_HEADING: &str = "Case Study Not Found";

pub fn compose(store: &ContentStore, id: &str, session: &PrintSession) -> Page {
  let Some(case) = store.case_study(id) else {
    return not_found(store, id);
  };
  match session.mode() {
    ViewMode::Interactive => detail(store, case),
    ViewMode::Printable(kind) => printable(store, case, kind),
  }
}

fn detail(store: &ContentStore, case: &CaseStudy) -> Page {
  let mut header = Section::untitled()
    .with(Block::Actions(vec![
      Link::internal(Route::CaseStudies.path(), "Back to all case studies")
        .with_icon(Icon::ArrowRight),
    ]))
    .with(Block::Tags(case.tags.clone()))
    .with(Block::Paragraph(RichText::plain(&case.summary)));
  if let Some(result) = &case.metrics.result {
    header = header.with(Block::Metric {
      primary: case.metrics.primary.clone(),
      result:  result.clone(),
    });
  }
  header = header.with(Block::Graphic(Graphic::for_case(&case.id)));

  let mut sections = vec![header];
  sections.extend(case.ordered_sections().map(|(key, body)| {
    let mut section = Section::titled(key.title());
    for paragraph in body.paragraphs() {
      section = section.with(Block::Paragraph(RichText::parse(paragraph)));
    }
    section
  }));

  let mut roadmap = Section::titled("Roadmap");
  for (label, items) in case.artifacts.roadmap.labelled() {
    if items.is_empty() {
      continue;
    }
    roadmap = roadmap
      .with(Block::Subheading(label.to_owned()))
      .with(Block::List(items.iter().map(RichText::plain).collect()));
  }
  if !roadmap.blocks.is_empty() {
    sections.push(roadmap);
  }

  sections.push(
    Section::titled("Artifacts")
      .muted()
      .with(Block::Actions(artifact_links(&case.id))),
  );

  Page {
    route: Route::case_study(&case.id),
    meta: PageMeta::new(page_title(store, &case.title), &case.summary)
      .with_structured_data(article_schema(store, case)),
    status: PageStatus::Found,
    view: View::Interactive(Layout {
      heading: case.title.clone(),
      sections,
    }),
  }
}

fn printable(store: &ContentStore, case: &CaseStudy, kind: ArtifactKind) -> Page {
  let document = print::printable(case, kind);
  Page {
    route:  Route::case_study(&case.id),
    meta:   PageMeta::new(page_title(store, &document.title), &case.summary),
    status: PageStatus::Found,
    view:   View::Printable(Printout {
      document,
      delay: PRINT_DELAY,
      return_to: Route::case_study(&case.id).path(),
    }),
  }
}

fn not_found(store: &ContentStore, id: &str) -> Page {
  tracing::debug!(id, "case study not found");
  let notice = Block::Notice {
    heading: NOT_FOUND_HEADING.into(),
    body:    Some(format!("There is no case study called \u{201c}{id}\u{201d}.")),
    link:    Some(Link::internal(Route::Home.path(), "← Back to Home")),
  };
  Page {
    route:  Route::case_study(id),
    meta:   PageMeta::new(
      page_title(store, "Not Found"),
      "The requested case study does not exist.",
    ),
    status: PageStatus::NotFound,
    view:   View::Interactive(Layout {
      heading:  NOT_FOUND_HEADING.into(),
      sections: vec![Section::untitled().with(notice)],
    }),
  }
}

/// Links that open each printable artifact for `case_id`.
pub fn artifact_links(case_id: &str) -> Vec<Link> {
  ArtifactKind::ALL
    .into_iter()
    .map(|kind| {
      Link::internal(
        print_path(case_id, kind),
        format!("Download {} (PDF)", kind.short_label()),
      )
      .with_icon(Icon::Printer)
    })
    .collect()
}
