//! Shared types, error model, and configuration for noc-index.
//!
//! This crate is the foundation depended on by the other noc-index crates.
//! It provides:
//! - [`NocIndexError`], the unified error type
//! - Domain types ([`Record`], [`Link`], [`LinkNumber`])
//! - Runtime configuration ([`AppConfig`], [`LogConfig`])

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{AppConfig, DEFAULT_DATA_FILE, LogConfig};
pub use error::{NocIndexError, Result};
pub use types::{Link, LinkNumber, MIN_LINK_DIGITS, Record};
