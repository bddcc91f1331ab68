//! Per-page staleness signals for `folio status`.
//!
//! Signal precedence for a page:
//! 1. `MissingTemplate` (no `NN.html` in the template directory)
//! 2. `RenderFailed` (template exists but tera rejects it)
//! 3. `NeverGenerated` (no output file yet)
//! 4. `Stale` (output differs from what would be rendered now)
//! 5. `Current`
//!
//! `Orphan` entries are appended for `*.html` files in the output directory
//! that no page in the range would produce.
//!
//! Unlike a generate run, a status check never aborts on a single page.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use folio_core::SiteConfig;
use folio_renderer::{RenderError, Renderer};

use crate::diff::{normalize_line_endings, read_existing};
use crate::{error::io_err, SyncError};

/// Staleness classification of a single output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StalenessSignal {
    MissingTemplate,
    RenderFailed { reason: String },
    NeverGenerated,
    Stale,
    Current,
    Orphan,
}

impl StalenessSignal {
    /// Short lowercase label used in tables and JSON.
    pub fn label(&self) -> &'static str {
        match self {
            StalenessSignal::MissingTemplate => "missing-template",
            StalenessSignal::RenderFailed { .. } => "render-failed",
            StalenessSignal::NeverGenerated => "never-generated",
            StalenessSignal::Stale => "stale",
            StalenessSignal::Current => "current",
            StalenessSignal::Orphan => "orphan",
        }
    }

    /// Whether a generate run would fail on this page.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            StalenessSignal::MissingTemplate | StalenessSignal::RenderFailed { .. }
        )
    }

    /// Whether a generate run would change the output for this page.
    pub fn needs_generate(&self) -> bool {
        matches!(self, StalenessSignal::NeverGenerated | StalenessSignal::Stale)
    }
}

/// Status of one file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStatus {
    pub name: String,
    pub title: Option<String>,
    pub signal: StalenessSignal,
}

/// Classify every page in the range, plus any orphaned outputs.
///
/// Fails only when the renderer itself cannot be built (broken helper
/// template, missing layout) or the output directory cannot be read.
pub fn check(config: &SiteConfig) -> Result<Vec<PageStatus>, SyncError> {
    let mut renderer = Renderer::new(config)?;
    let mut statuses = Vec::with_capacity(config.range().len());

    for page in config.pages() {
        let signal = match renderer.render_page(&page) {
            Err(RenderError::TemplateNotFound { .. }) => StalenessSignal::MissingTemplate,
            Err(err) => StalenessSignal::RenderFailed {
                reason: err.to_string(),
            },
            Ok(rendered) => {
                let path = config.output_path(&page.name);
                match read_existing(&path)? {
                    None => StalenessSignal::NeverGenerated,
                    Some(existing) if existing == normalize_line_endings(&rendered) => {
                        StalenessSignal::Current
                    }
                    Some(_) => StalenessSignal::Stale,
                }
            }
        };
        statuses.push(PageStatus {
            name: page.name,
            title: Some(page.title),
            signal,
        });
    }

    let expected: BTreeSet<String> = config.range().file_names().into_iter().collect();
    for name in orphan_outputs(&config.output_dir, &expected)? {
        tracing::warn!("orphan output: {}", config.output_path(&name).display());
        statuses.push(PageStatus {
            name,
            title: None,
            signal: StalenessSignal::Orphan,
        });
    }

    Ok(statuses)
}

/// Count statuses matching `predicate`.
pub fn count(statuses: &[PageStatus], predicate: impl Fn(&StalenessSignal) -> bool) -> usize {
    statuses.iter().filter(|s| predicate(&s.signal)).count()
}

fn orphan_outputs(dir: &Path, expected: &BTreeSet<String>) -> Result<Vec<String>, SyncError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(vec![]),
        Err(err) => return Err(io_err(dir, err)),
    };

    let mut orphans = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path: PathBuf = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !expected.contains(&name) {
            orphans.push(name);
        }
    }
    orphans.sort();
    Ok(orphans)
}
