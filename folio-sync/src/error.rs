//! Error types for folio-sync.

use std::path::PathBuf;

use thiserror::Error;

use folio_renderer::RenderError;

/// All errors that can arise from generate, diff and status runs.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the rendering engine (missing template, bad syntax).
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The destination file could not be created or written.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error while reading existing output, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`SyncError::FileWrite`].
pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::FileWrite {
        path: path.into(),
        source,
    }
}
