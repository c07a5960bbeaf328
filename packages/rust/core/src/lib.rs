//! Core pipeline and domain logic for noc-index.
//!
//! Loads `[title, description]` records, derives each record's
//! `Ch<NN>/Eg<NN>.html` link, and renders the anchor list.

pub mod link;
pub mod loader;
pub mod pipeline;
pub mod render;

pub use link::derive_link;
pub use loader::{load_records, parse_records};
pub use pipeline::{IndexConfig, IndexSummary, write_index};
pub use render::{render, render_line};
