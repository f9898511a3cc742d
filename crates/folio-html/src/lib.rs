//! HTML serializer for folio pages.
//!
//! [`render`] turns a composed [`Page`] into a complete HTML document. The
//! interactive view is wrapped in the site chrome; the printable view is
//! emitted bare, with a script that opens the print dialog and returns to the
//! interactive page afterwards.

pub mod error;
mod icon;
mod page;
mod print;
mod writer;

pub use error::{Error, Result};

use folio_core::theme::{DocumentRoot, Theme};
use folio_pages::{
  chrome::Chrome,
  meta::{DocumentHead, HeadTag},
  view::{Page, View},
};

use writer::HtmlWriter;

/// Path of the stylesheet every page links.
pub const STYLESHEET_PATH: &str = "/assets/site.css";
/// Form target for the theme toggle.
pub const THEME_TOGGLE_PATH: &str = "/theme";
/// Form target for the contact form.
pub const CONTACT_FORM_PATH: &str = "/contact";

/// Everything outside the page body that affects the output.
pub struct RenderContext<'a> {
  pub head:          &'a DocumentHead,
  pub chrome:        &'a Chrome,
  pub root:          &'a DocumentRoot,
  pub theme:         Theme,
  /// Location the theme toggle sends the browser back to.
  pub return_to:     &'a str,
  /// Copyright year for the footer.
  pub year:          i32,
  pub scroll_to_top: bool,
}

pub fn render(page: &Page, ctx: &RenderContext<'_>) -> Result<String> {
  let mut w = HtmlWriter::new();
  w.doctype()?;

  let class = ctx.root.class_attr();
  let mut html_attrs = vec![("lang", "en")];
  if let Some(class) = class.as_deref() {
    html_attrs.push(("class", class));
  }
  w.open("html", &html_attrs)?;

  head(&mut w, ctx)?;

  match &page.view {
    View::Interactive(layout) => {
      w.open("body", &[])?;
      page::header(&mut w, ctx)?;
      w.open("main", &[])?;
      page::layout(&mut w, layout)?;
      w.close("main")?;
      page::footer(&mut w, ctx)?;
      if ctx.scroll_to_top {
        w.open("script", &[])?;
        w.raw("window.scrollTo(0, 0);")?;
        w.close("script")?;
      }
      w.close("body")?;
    }
    View::Printable(printout) => {
      w.open("body", &[("class", "printable")])?;
      print::document(&mut w, printout)?;
      w.close("body")?;
    }
  }

  w.close("html")?;
  w.finish()
}

fn head(w: &mut HtmlWriter, ctx: &RenderContext<'_>) -> Result<()> {
  w.open("head", &[])?;
  w.void("meta", &[("charset", "utf-8")])?;
  w.void("meta", &[
    ("name", "viewport"),
    ("content", "width=device-width, initial-scale=1"),
  ])?;
  w.void("meta", &[("name", "color-scheme"), ("content", "light dark")])?;
  for tag in ctx.head.tags() {
    match tag {
      HeadTag::Title(title) => w.element("title", &[], &title)?,
      HeadTag::Meta { name, content } => {
        w.void("meta", &[("name", name), ("content", content.as_str())])?
      }
      HeadTag::StructuredData(json) => {
        w.open("script", &[("type", "application/ld+json")])?;
        w.raw(&writer::script_json(&json))?;
        w.close("script")?;
      }
    }
  }
  w.void("link", &[("rel", "stylesheet"), ("href", STYLESHEET_PATH)])?;
  w.close("head")
}
