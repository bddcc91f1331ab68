//! `folio diff` — show unified diffs for what build would write.

use anyhow::{Context, Result};
use clap::Args;

use folio_sync::diff_site;

use super::SiteArgs;

/// Arguments for `folio diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Only list the pages that would change.
    #[arg(long)]
    pub name_only: bool,
}

impl DiffArgs {
    pub fn run(self, site: &SiteArgs) -> Result<()> {
        let config = site.load()?;
        let result = diff_site(&config)
            .with_context(|| format!("diff failed for '{}'", config.output_dir.display()))?;

        if result.diffs.is_empty() {
            println!("No differences in '{}'.", result.output_dir.display());
            return Ok(());
        }

        for diff in result.diffs {
            if self.name_only {
                println!("{}", diff.path.display());
                continue;
            }
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }

        Ok(())
    }
}
