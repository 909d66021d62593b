//! # Glean Render - search results as HTML
//!
//! Turns matched (and usually highlighted) records into the results list
//! shown under a search box:
//!
//! ```html
//! <ul id="static-search-results">
//!   <li class="result-item">...</li>
//!   <li id="static-search-logo">...</li>
//! </ul>
//! ```
//!
//! The per-record markup comes from a user supplied [minijinja] template.
//! When nothing matches, a single `no-results-found` item carries the
//! configured message.
//!
//! [minijinja]: https://docs.rs/minijinja

mod error;
mod renderer;

pub use error::RenderError;
pub use renderer::{
    ResultsRenderer, ResultsRendererBuilder, DEFAULT_ITEM_TEMPLATE, DEFAULT_NO_RESULTS_MESSAGE,
};
