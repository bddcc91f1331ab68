//! Dry-run unified diff support for `folio diff`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use folio_core::SiteConfig;
use folio_renderer::Renderer;

use crate::{error::io_err, SyncError};

/// A single rendered page diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Diff result for a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    pub output_dir: PathBuf,
    pub diffs: Vec<FileDiff>,
}

/// Render what `generate` would write and compare it to current on-disk content.
///
/// No files are written. A page that has never been generated diffs against
/// an empty file. Render errors abort, as they would in a real run.
pub fn diff_site(config: &SiteConfig) -> Result<DiffResult, SyncError> {
    let mut renderer = Renderer::new(config)?;

    let mut diffs = Vec::new();
    for page in config.pages() {
        let rendered = normalize_line_endings(&renderer.render_page(&page)?);
        let path = config.output_path(&page.name);
        let existing = read_existing_or_empty(&path)?;
        if existing == rendered {
            continue;
        }

        let old_header = format!("a/{}", page.name);
        let new_header = format!("b/{}", page.name);
        let unified = TextDiff::from_lines(&existing, &rendered)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        diffs.push(FileDiff {
            path,
            unified_diff: unified,
        });
    }

    Ok(DiffResult {
        output_dir: config.output_dir.clone(),
        diffs,
    })
}

pub(crate) fn read_existing(path: &Path) -> Result<Option<String>, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(normalize_line_endings(&content))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

fn read_existing_or_empty(path: &Path) -> Result<String, SyncError> {
    Ok(read_existing(path)?.unwrap_or_default())
}

pub(crate) fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
