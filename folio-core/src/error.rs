//! Error types for folio-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading or validating site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `first_page` is greater than `last_page`.
    #[error("invalid page range: first_page {first} is greater than last_page {last}")]
    InvalidRange { first: u32, last: u32 },

    /// The layout template shares its name with a page template.
    #[error("layout '{name}' collides with a page template of the same name")]
    LayoutIsPage { name: String },
}
