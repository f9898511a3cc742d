//! Chrome-free printable artifact.

use folio_pages::{
  print::{PrintBlock, PrintSection},
  view::Printout,
};

use crate::{
  error::Result,
  writer::{HtmlWriter, script_json},
};

pub(crate) fn document(w: &mut HtmlWriter, printout: &Printout) -> Result<()> {
  let doc = &printout.document;
  w.open("article", &[("class", "printout")])?;
  w.open("header", &[("class", "printout__header")])?;
  w.element("h1", &[], &doc.title)?;
  w.element("p", &[("class", "printout__subtitle")], &doc.subtitle)?;
  w.close("header")?;
  for s in &doc.sections {
    section(w, s)?;
  }
  w.close("article")?;

  w.open("script", &[])?;
  w.raw(&print_script(printout))?;
  w.close("script")
}

fn section(w: &mut HtmlWriter, section: &PrintSection) -> Result<()> {
  w.open("section", &[("class", "printout__section")])?;
  w.element("h2", &[], &format!("{}. {}", section.number, section.title))?;
  for block in &section.content {
    match block {
      PrintBlock::Text(text) => w.element("p", &[], text)?,
      PrintBlock::List(items) => list(w, items)?,
      PrintBlock::Group { label, items } => {
        w.element("h3", &[], label)?;
        list(w, items)?;
      }
    }
  }
  w.close("section")
}

fn list(w: &mut HtmlWriter, items: &[String]) -> Result<()> {
  w.open("ul", &[])?;
  for item in items {
    w.element("li", &[], item)?;
  }
  w.close("ul")
}

/// Opens the print dialog after the delay and goes back to the interactive
/// page once the dialog closes, whether or not anything printed.
fn print_script(printout: &Printout) -> String {
  // A JSON string literal is a valid JS string literal.
  let target = script_json(
    &serde_json::Value::String(printout.return_to.clone()).to_string(),
  );
  format!(
    "window.addEventListener(\"afterprint\", () => window.location.replace({target}));\
     window.setTimeout(() => window.print(), {});",
    printout.delay.as_millis()
  )
}
