//! Page composition for the folio site.
//!
//! Every page is a pure function of the [`ContentStore`](folio_core::ContentStore),
//! the resolved [`Route`](folio_core::route::Route) and a little per-page
//! state ([`PageState`]). The result is a [`view::Page`] tree that
//! `folio-html` serializes.

pub mod chrome;
pub mod compose;
pub mod contact;
pub mod meta;
pub mod print;
pub mod view;

pub use compose::{PageState, compose};
