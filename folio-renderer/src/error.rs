//! Error types for folio-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested template does not exist in the template directory.
    #[error("template '{name}' not found in {dir}")]
    TemplateNotFound { name: String, dir: PathBuf },

    /// Tera failed to parse or render a template.
    #[error("failed to render template '{name}': {source}")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// JSON serialization error (building tera context or site functions).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading templates.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
