//! Folio core library — page types, site configuration, errors.
//!
//! - [`types`] — [`PageIndex`], [`PageRange`], [`Page`]
//! - [`config`] — [`SiteConfig`] loading and validation
//! - [`error`] — [`ConfigError`]

pub mod config;
pub mod error;
pub mod types;

pub use config::{SiteConfig, DEFAULT_CONFIG_FILE};
pub use error::ConfigError;
pub use types::{Page, PageIndex, PageRange};
