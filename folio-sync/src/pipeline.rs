//! Generate pipeline: iterate → name → load → render → write, one page at a time.

use std::path::PathBuf;

use folio_core::SiteConfig;
use folio_renderer::Renderer;

use crate::writer::{write_page, WriteResult};
use crate::SyncError;

/// Outcome of a complete generate run.
#[derive(Debug)]
pub struct GenerateResult {
    pub output_dir: PathBuf,
    /// One entry per page, in ascending page order.
    pub writes: Vec<WriteResult>,
}

/// Render every page of `config` and write it to the output directory.
///
/// Pages are processed strictly in ascending order. The first error aborts
/// the run: pages already written stay on disk, later pages are not rendered.
/// With `dry_run`, every page is still rendered but nothing is written.
pub fn generate(config: &SiteConfig, dry_run: bool) -> Result<GenerateResult, SyncError> {
    let mut renderer = Renderer::new(config)?;
    let mut writes = Vec::with_capacity(config.range().len());

    for page in config.pages() {
        let html = renderer.render_page(&page)?;
        let path = config.output_path(&page.name);
        writes.push(write_page(&path, &html, dry_run)?);
    }

    tracing::debug!(
        "generated {} page(s) into {}",
        writes.len(),
        config.output_dir.display()
    );
    Ok(GenerateResult {
        output_dir: config.output_dir.clone(),
        writes,
    })
}
