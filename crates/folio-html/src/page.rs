//! Interactive page: site chrome plus the section/block tree.

use folio_core::{icon::Icon, theme::Theme};
use folio_pages::view::{
  Block, Card, CaseCard, FormView, HighlightCard, Inline, Layout, Link,
  LinkKind, ResumeItem, RichText, Section, Tone,
};

use crate::{
  CONTACT_FORM_PATH, RenderContext, THEME_TOGGLE_PATH,
  error::Result,
  icon::{graphic, icon},
  writer::HtmlWriter,
};

// ─── Chrome ──────────────────────────────────────────────────────────────────

pub(crate) fn header(w: &mut HtmlWriter, ctx: &RenderContext<'_>) -> Result<()> {
  w.open("header", &[("class", "site-header")])?;
  w.open("div", &[("class", "container site-header__bar")])?;

  w.open("a", &[("class", "site-header__brand"), ("href", "/")])?;
  icon(w, Icon::Logo, "icon icon--lg")?;
  w.element("span", &[], &ctx.chrome.owner)?;
  w.close("a")?;

  w.open("nav", &[("class", "site-nav"), ("aria-label", "Main")])?;
  for item in &ctx.chrome.nav {
    link(w, item, "site-nav__link")?;
  }
  w.close("nav")?;

  theme_toggle(w, ctx.theme, ctx.return_to)?;

  w.close("div")?;
  w.close("header")
}

fn theme_toggle(w: &mut HtmlWriter, theme: Theme, return_to: &str) -> Result<()> {
  let target = theme.toggled();
  let label = format!("Switch to {target} mode");
  w.open("form", &[
    ("class", "theme-toggle"),
    ("method", "post"),
    ("action", THEME_TOGGLE_PATH),
  ])?;
  w.void("input", &[
    ("type", "hidden"),
    ("name", "return_to"),
    ("value", return_to),
  ])?;
  w.open("button", &[
    ("type", "submit"),
    ("class", "theme-toggle__button"),
    ("aria-label", label.as_str()),
  ])?;
  let glyph = match theme {
    Theme::Light => Icon::Moon,
    Theme::Dark => Icon::Sun,
  };
  icon(w, glyph, "icon")?;
  w.close("button")?;
  w.close("form")
}

pub(crate) fn footer(w: &mut HtmlWriter, ctx: &RenderContext<'_>) -> Result<()> {
  let chrome = ctx.chrome;
  w.open("footer", &[("class", "site-footer")])?;
  w.open("div", &[("class", "container site-footer__grid")])?;

  w.open("div", &[])?;
  w.element("h3", &[], &chrome.owner)?;
  w.element("p", &[("class", "muted")], &chrome.positioning)?;
  w.close("div")?;

  w.open("div", &[])?;
  w.element("h3", &[], "Contact")?;
  w.open("ul", &[("class", "plain-list")])?;
  w.open("li", &[])?;
  link(w, &Link::mail(&chrome.email, &chrome.email), "")?;
  w.close("li")?;
  w.element("li", &[("class", "muted")], &chrome.location)?;
  w.close("ul")?;
  w.close("div")?;

  w.open("div", &[])?;
  w.element("h3", &[], "Around the web")?;
  w.open("div", &[("class", "site-footer__social")])?;
  for item in &chrome.social {
    icon_link(w, item)?;
  }
  w.close("div")?;
  w.close("div")?;

  w.close("div")?;
  w.element(
    "p",
    &[("class", "container site-footer__legal")],
    &format!("© {} {}. All rights reserved.", ctx.year, chrome.owner),
  )?;
  w.close("footer")
}

// ─── Layout ──────────────────────────────────────────────────────────────────

pub(crate) fn layout(w: &mut HtmlWriter, layout: &Layout) -> Result<()> {
  w.open("div", &[("class", "container page-heading")])?;
  w.element("h1", &[], &layout.heading)?;
  w.close("div")?;
  for s in &layout.sections {
    section(w, s)?;
  }
  Ok(())
}

fn section(w: &mut HtmlWriter, section: &Section) -> Result<()> {
  let class = match section.tone {
    Tone::Plain => "section",
    Tone::Muted => "section section--muted",
  };
  w.open("section", &[("class", class)])?;
  w.open("div", &[("class", "container")])?;
  if let Some(title) = &section.title {
    w.element("h2", &[("class", "section__title")], title)?;
  }
  for b in &section.blocks {
    block(w, b)?;
  }
  w.close("div")?;
  w.close("section")
}

fn block(w: &mut HtmlWriter, block: &Block) -> Result<()> {
  match block {
    Block::Subheading(text) => w.element("h3", &[("class", "subheading")], text),
    Block::Paragraph(text) => {
      w.open("p", &[])?;
      rich_text(w, text)?;
      w.close("p")
    }
    Block::List(items) => {
      w.open("ul", &[("class", "bullets")])?;
      for item in items {
        w.open("li", &[])?;
        rich_text(w, item)?;
        w.close("li")?;
      }
      w.close("ul")
    }
    Block::Tags(tags) => {
      w.open("div", &[("class", "tags")])?;
      for tag in tags {
        w.element("span", &[("class", "tag")], tag)?;
      }
      w.close("div")
    }
    Block::Actions(links) => {
      w.open("div", &[("class", "actions")])?;
      for item in links {
        link(w, item, "button")?;
      }
      w.close("div")
    }
    Block::Highlights(cards) => {
      w.open("div", &[("class", "grid grid--highlights")])?;
      for card in cards {
        highlight(w, card)?;
      }
      w.close("div")
    }
    Block::CaseCards(cards) => {
      w.open("div", &[("class", "grid grid--cases")])?;
      for card in cards {
        case_card(w, card)?;
      }
      w.close("div")
    }
    Block::Resume(items) => {
      w.open("ul", &[("class", "resume")])?;
      for item in items {
        resume_item(w, item)?;
      }
      w.close("ul")
    }
    Block::Metric { primary, result } => {
      w.open("div", &[("class", "metric")])?;
      w.element(
        "p",
        &[("class", "metric__label")],
        &format!("Primary metric: {primary}"),
      )?;
      w.element("p", &[("class", "metric__value")], result)?;
      w.close("div")
    }
    Block::Graphic(g) => graphic(w, *g),
    Block::Card(c) => card(w, c),
    Block::ContactForm(form) => contact_form(w, form),
    Block::Notice {
      heading,
      body,
      link: action,
    } => {
      w.open("div", &[("class", "notice")])?;
      w.element("h2", &[], heading)?;
      if let Some(body) = body {
        w.element("p", &[], body)?;
      }
      if let Some(action) = action {
        link(w, action, "")?;
      }
      w.close("div")
    }
  }
}

fn rich_text(w: &mut HtmlWriter, text: &RichText) -> Result<()> {
  for inline in &text.0 {
    match inline {
      Inline::Text(t) => w.text(t)?,
      Inline::Strong(t) => w.element("strong", &[], t)?,
    }
  }
  Ok(())
}

// ─── Pieces ──────────────────────────────────────────────────────────────────

fn link_attrs<'a>(item: &'a Link, class: &'a str) -> Vec<(&'a str, &'a str)> {
  let mut attrs = vec![("href", item.href.as_str())];
  if !class.is_empty() {
    attrs.push(("class", class));
  }
  if item.kind == LinkKind::External {
    attrs.push(("target", "_blank"));
    attrs.push(("rel", "noopener noreferrer"));
  }
  attrs
}

fn link(w: &mut HtmlWriter, item: &Link, class: &str) -> Result<()> {
  w.open("a", &link_attrs(item, class))?;
  if let Some(glyph) = item.icon {
    icon(w, glyph, "icon")?;
  }
  w.text(&item.label)?;
  w.close("a")
}

fn icon_link(w: &mut HtmlWriter, item: &Link) -> Result<()> {
  let mut attrs = link_attrs(item, "icon-link");
  attrs.push(("aria-label", item.label.as_str()));
  w.open("a", &attrs)?;
  icon(w, item.icon.unwrap_or(Icon::ExternalLink), "icon")?;
  w.close("a")
}

fn highlight(w: &mut HtmlWriter, card: &HighlightCard) -> Result<()> {
  w.open("div", &[("class", "highlight")])?;
  icon(w, card.icon, "icon icon--lg highlight__icon")?;
  w.open("div", &[])?;
  w.element("p", &[("class", "highlight__value")], &card.value)?;
  w.element("p", &[("class", "highlight__label")], &card.label)?;
  w.close("div")?;
  w.close("div")
}

fn case_card(w: &mut HtmlWriter, card: &CaseCard) -> Result<()> {
  w.open("a", &[("class", "card card--link"), ("href", card.href.as_str())])?;
  w.element("h3", &[], &card.title)?;
  w.element("p", &[("class", "muted")], &card.summary)?;
  w.open("div", &[("class", "tags")])?;
  for tag in &card.tags {
    w.element("span", &[("class", "tag")], tag)?;
  }
  w.close("div")?;
  w.close("a")
}

fn resume_item(w: &mut HtmlWriter, item: &ResumeItem) -> Result<()> {
  w.open("li", &[])?;
  icon(w, Icon::CheckCircle, "icon resume__check")?;
  w.open("span", &[])?;
  w.text(&item.content)?;
  if let Some(more) = &item.link {
    w.text(" ")?;
    link(w, more, "resume__more")?;
  }
  w.close("span")?;
  w.close("li")
}

fn card(w: &mut HtmlWriter, card: &Card) -> Result<()> {
  w.open("div", &[("class", "card")])?;
  w.open("div", &[("class", "card__header")])?;
  w.open("div", &[])?;
  w.element("h3", &[], &card.title)?;
  if let Some(subtitle) = &card.subtitle {
    w.element("p", &[("class", "card__subtitle")], subtitle)?;
  }
  w.close("div")?;
  if !card.aside.is_empty() {
    w.open("div", &[("class", "card__aside")])?;
    for line in &card.aside {
      w.element("p", &[], line)?;
    }
    w.close("div")?;
  }
  w.close("div")?;
  if !card.items.is_empty() {
    w.open("ul", &[("class", "bullets")])?;
    for item in &card.items {
      w.element("li", &[], item)?;
    }
    w.close("ul")?;
  }
  if !card.links.is_empty() {
    w.open("div", &[("class", "actions")])?;
    for item in &card.links {
      link(w, item, "button button--small")?;
    }
    w.close("div")?;
  }
  w.close("div")
}

fn contact_form(w: &mut HtmlWriter, form: &FormView) -> Result<()> {
  use folio_pages::contact::FormField;

  w.open("form", &[
    ("class", "contact-form"),
    ("method", "post"),
    ("action", CONTACT_FORM_PATH),
  ])?;

  if !form.invalid.is_empty() {
    let fields: Vec<_> = form.invalid.iter().map(|f| f.label()).collect();
    w.element(
      "p",
      &[("class", "form-error"), ("role", "alert")],
      &format!("Please check: {}.", fields.join(", ")),
    )?;
  }

  for (field, value) in [(FormField::Name, &form.name), (FormField::Email, &form.email)] {
    let invalid = if form.invalid.contains(&field) { "true" } else { "false" };
    let input_type = if field == FormField::Email { "email" } else { "text" };
    w.open("label", &[])?;
    w.element("span", &[], field.label())?;
    w.void("input", &[
      ("type", input_type),
      ("name", field.as_ref()),
      ("value", value.as_str()),
      ("required", "required"),
      ("aria-invalid", invalid),
    ])?;
    w.close("label")?;
  }

  let invalid = if form.invalid.contains(&FormField::Message) {
    "true"
  } else {
    "false"
  };
  w.open("label", &[])?;
  w.element("span", &[], FormField::Message.label())?;
  w.element(
    "textarea",
    &[
      ("name", FormField::Message.as_ref()),
      ("rows", "5"),
      ("required", "required"),
      ("aria-invalid", invalid),
    ],
    &form.message,
  )?;
  w.close("label")?;

  w.element("button", &[("type", "submit"), ("class", "button")], "Send message")?;
  w.close("form")
}
