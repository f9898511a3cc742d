//! Inline SVG for icons and case graphics.

use folio_core::icon::{Graphic, Icon};

use crate::{error::Result, writer::HtmlWriter};

fn icon_paths(icon: Icon) -> &'static [&'static str] {
  match icon {
    Icon::Bug => &[
      "M8 8a4 4 0 1 1 8 0v6a4 4 0 1 1-8 0z",
      "M12 10v8M4 13h4M16 13h4M5 7l3 2M19 7l-3 2M5 19l3-2M19 19l-3-2",
    ],
    Icon::TrendingUp => &["M3 17l6-6 4 4 8-8", "M14 7h7v7"],
    Icon::ShieldCheck => &[
      "M12 3l8 3v6c0 5-3.5 8-8 9-4.5-1-8-4-8-9V6z",
      "M9 12l2 2 4-4",
    ],
    Icon::Mail => &["M3 6h18v12H3z", "M3 7l9 6 9-6"],
    Icon::UsersGroup => &[
      "M9 11a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
      "M17 11a2.5 2.5 0 1 0 0-5",
      "M3 20c0-3.3 2.7-6 6-6s6 2.7 6 6M16 14c2.8 0 5 2.2 5 5",
    ],
    Icon::CheckCircle => &["M12 21a9 9 0 1 0 0-18 9 9 0 0 0 0 18z", "M8 12l3 3 5-6"],
    Icon::ArrowRight => &["M4 12h16", "M14 6l6 6-6 6"],
    Icon::ExternalLink => &["M14 4h6v6", "M20 4l-9 9", "M18 14v6H4V6h6"],
    Icon::GitHub => &[
      "M9 19c-4 1.5-4-2-6-2.5M15 21v-3.5c0-1 .1-1.4-.5-2 2.8-.3 5.5-1.4 5.5-6 0-1.2-.4-2.3-1.2-3.2.1-.3.5-1.5-.1-3.2 0 0-1-.3-3.3 1.2a11.5 11.5 0 0 0-6 0C6.1 2.8 5.1 3.1 5.1 3.1c-.6 1.7-.2 2.9-.1 3.2A4.6 4.6 0 0 0 3.8 9.5c0 4.6 2.7 5.7 5.5 6-.6.6-.6 1.2-.5 2V21",
    ],
    Icon::Linkedin => &[
      "M4 4h16v16H4z",
      "M8 10v6M8 7.5v.01M12 16v-6M12 12.5c0-1.5 1-2.5 2.3-2.5S16 11 16 12.5V16",
    ],
    Icon::Logo => &["M4 4h16v16H4z", "M8 16V8l4 5 4-5v8"],
    Icon::Moon => &["M20 14.5A8 8 0 0 1 9.5 4 8 8 0 1 0 20 14.5z"],
    Icon::Sun => &[
      "M12 16a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
      "M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4",
    ],
    Icon::Printer => &["M6 9V3h12v6", "M6 18H4v-7h16v7h-2", "M6 14h12v7H6z"],
    Icon::Document => &["M6 3h9l4 4v14H6z", "M14 3v5h5M9 13h6M9 17h6"],
    Icon::Generic => &["M12 16a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"],
  }
}

pub(crate) fn icon(w: &mut HtmlWriter, icon: Icon, class: &str) -> Result<()> {
  w.open("svg", &[
    ("class", class),
    ("viewBox", "0 0 24 24"),
    ("fill", "none"),
    ("stroke", "currentColor"),
    ("stroke-width", "1.75"),
    ("stroke-linecap", "round"),
    ("stroke-linejoin", "round"),
    ("aria-hidden", "true"),
  ])?;
  for d in icon_paths(icon) {
    w.void("path", &[("d", d)])?;
  }
  w.close("svg")
}

// ─── Graphics ────────────────────────────────────────────────────────────────

enum Shape {
  Rect(&'static str, &'static str, &'static str, &'static str),
  Circle(&'static str, &'static str, &'static str),
  Path(&'static str),
}

fn graphic_shapes(graphic: Graphic) -> &'static [Shape] {
  use Shape::*;
  match graphic {
    Graphic::CodeReview => &[
      Rect("20", "20", "160", "100"),
      Path("M36 44h60M36 60h90M36 76h40M36 92h70"),
      Circle("150", "76", "14"),
      Path("M143 76l5 5 9-10"),
    ],
    Graphic::DocumentFlow => &[
      Rect("20", "20", "60", "100"),
      Path("M32 40h36M32 56h36M32 72h24"),
      Path("M90 70h20M104 64l6 6-6 6"),
      Rect("120", "24", "60", "24"),
      Rect("120", "58", "60", "24"),
      Rect("120", "92", "60", "24"),
    ],
    Graphic::LiveChart => &[
      Rect("20", "20", "160", "100"),
      Path("M30 100l30-30 25 15 30-40 25 20 30-25"),
      Circle("170", "40", "4"),
    ],
    Graphic::ComponentGrid => &[
      Rect("20", "20", "45", "45"),
      Rect("77", "20", "45", "45"),
      Rect("134", "20", "45", "45"),
      Rect("20", "77", "45", "45"),
      Rect("77", "77", "45", "45"),
      Circle("156", "99", "22"),
    ],
    Graphic::Pipeline => &[
      Circle("35", "70", "15"),
      Circle("100", "70", "15"),
      Circle("165", "70", "15"),
      Path("M50 70h35M115 70h35"),
    ],
    Graphic::SupplyMap => &[
      Path("M40 40c0 12 12 24 12 24s12-12 12-24a12 12 0 0 0-24 0z"),
      Path("M136 70c0 12 12 24 12 24s12-12 12-24a12 12 0 0 0-24 0z"),
      Path("M60 72c30 30 50-20 80 10"),
    ],
    Graphic::Placeholder => &[
      Rect("20", "20", "160", "100"),
      Circle("70", "60", "14"),
      Path("M20 120l50-40 30 25 25-20 55 35"),
    ],
  }
}

pub(crate) fn graphic(w: &mut HtmlWriter, graphic: Graphic) -> Result<()> {
  let class = format!("graphic graphic--{}", graphic.as_ref());
  w.open("figure", &[("class", class.as_str())])?;
  w.open("svg", &[
    ("viewBox", "0 0 200 140"),
    ("fill", "none"),
    ("stroke", "currentColor"),
    ("stroke-width", "2"),
    ("role", "img"),
    ("aria-label", graphic.alt_text()),
  ])?;
  for shape in graphic_shapes(graphic) {
    match shape {
      Shape::Rect(x, y, width, height) => w.void("rect", &[
        ("x", x),
        ("y", y),
        ("width", width),
        ("height", height),
        ("rx", "6"),
      ])?,
      Shape::Circle(cx, cy, r) => {
        w.void("circle", &[("cx", cx), ("cy", cy), ("r", r)])?
      }
      Shape::Path(d) => w.void("path", &[("d", d)])?,
    }
  }
  w.close("svg")?;
  w.close("figure")
}
