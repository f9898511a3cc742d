//! Thin HTML layer over `quick-xml`'s event writer.
//!
//! Text and attribute values are escaped by `quick-xml`. Only [`HtmlWriter::raw`]
//! bypasses escaping, and it is reserved for inline script bodies.

use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};

use crate::error::{Error, Result};

pub(crate) type Attrs<'a> = &'a [(&'a str, &'a str)];

pub(crate) struct HtmlWriter {
  writer: Writer<Vec<u8>>,
}

impl HtmlWriter {
  pub fn new() -> Self {
    Self {
      writer: Writer::new(Vec::new()),
    }
  }

  fn event(&mut self, event: Event<'_>) -> Result<()> {
    self
      .writer
      .write_event(event)
      .map_err(|e| Error::Markup(e.to_string()))
  }

  pub fn doctype(&mut self) -> Result<()> {
    self.event(Event::DocType(BytesText::from_escaped("html")))
  }

  pub fn open(&mut self, tag: &str, attrs: Attrs<'_>) -> Result<()> {
    let mut start = BytesStart::new(tag);
    for attr in attrs {
      start.push_attribute(*attr);
    }
    self.event(Event::Start(start))
  }

  pub fn close(&mut self, tag: &str) -> Result<()> {
    self.event(Event::End(BytesEnd::new(tag)))
  }

  /// A void element such as `<meta>` or `<input>`, or a childless SVG node.
  pub fn void(&mut self, tag: &str, attrs: Attrs<'_>) -> Result<()> {
    let mut start = BytesStart::new(tag);
    for attr in attrs {
      start.push_attribute(*attr);
    }
    self.event(Event::Empty(start))
  }

  pub fn text(&mut self, text: &str) -> Result<()> {
    self.event(Event::Text(BytesText::new(text)))
  }

  /// Unescaped content. `</` is split so the payload cannot close the
  /// enclosing `<script>`.
  pub fn raw(&mut self, markup: &str) -> Result<()> {
    let safe = markup.replace("</", "<\\/");
    self.event(Event::Text(BytesText::from_escaped(safe)))
  }

  /// `<tag attrs>text</tag>`
  pub fn element(&mut self, tag: &str, attrs: Attrs<'_>, text: &str) -> Result<()> {
    self.open(tag, attrs)?;
    self.text(text)?;
    self.close(tag)
  }

  pub fn finish(self) -> Result<String> {
    Ok(String::from_utf8(self.writer.into_inner())?)
  }
}

/// JSON text for embedding in a `<script>` body. `<` is written as a unicode
/// escape, which JSON and JavaScript both read back unchanged.
pub(crate) fn script_json(json: &str) -> String { json.replace('<', "\\u003c") }

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_and_attributes_are_escaped() {
    let mut w = HtmlWriter::new();
    w.element("p", &[("title", "a\"b")], "<b>&").unwrap();
    let html = w.finish().unwrap();
    assert_eq!(html, "<p title=\"a&quot;b\">&lt;b&gt;&amp;</p>");
  }

  #[test]
  fn raw_cannot_close_script() {
    let mut w = HtmlWriter::new();
    w.open("script", &[]).unwrap();
    w.raw("var s = \"</script>\";").unwrap();
    w.close("script").unwrap();
    let html = w.finish().unwrap();
    assert_eq!(html.matches("</script>").count(), 1);
  }

  #[test]
  fn script_json_hides_tags() {
    assert_eq!(script_json(r#""</b>""#), r#""\u003c/b>""#);
  }

  #[test]
  fn doctype_is_html5() {
    let mut w = HtmlWriter::new();
    w.doctype().unwrap();
    assert_eq!(w.finish().unwrap(), "<!DOCTYPE html>");
  }
}
