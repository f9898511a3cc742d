//! Core types for the folio portfolio site.
//!
//! This crate holds the read-only content store, the theme controller, route
//! resolution and the telemetry seam. It knows nothing about HTTP or HTML;
//! `folio-pages` composes views from it and `folio-server` hosts them.

pub mod artifact;
pub mod content;
pub mod error;
pub mod icon;
pub mod route;
pub mod store;
pub mod telemetry;
pub mod theme;

pub use error::{Error, Result};
pub use store::ContentStore;
