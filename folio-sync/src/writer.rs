//! Page writer.
//!
//! Each page is written with create + truncate semantics through a handle
//! that lives only for the duration of that one write:
//!
//! 1. Open `<output_dir>/<name>` for writing (create if missing, truncate if present).
//! 2. Write the full rendered text.
//! 3. Flush and drop the handle before the next page.
//!
//! The output directory itself is never created; a missing or read-only
//! directory surfaces as [`SyncError::FileWrite`].

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{write_err, SyncError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual page write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created or overwritten.
    Written { path: PathBuf, bytes: usize },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf, bytes: usize },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } | WriteResult::WouldWrite { path, .. } => path,
        }
    }

    pub fn bytes(&self) -> usize {
        match self {
            WriteResult::Written { bytes, .. } | WriteResult::WouldWrite { bytes, .. } => *bytes,
        }
    }
}

// ---------------------------------------------------------------------------
// write_page
// ---------------------------------------------------------------------------

/// Write `content` to `path`, replacing whatever was there.
pub fn write_page(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, SyncError> {
    let bytes = content.len();
    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
            bytes,
        });
    }

    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| write_err(path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| write_err(path, e))?;
        file.flush().map_err(|e| write_err(path, e))?;
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
        bytes,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
