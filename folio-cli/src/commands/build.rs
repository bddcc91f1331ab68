//! `folio build` — render and write every page.

use anyhow::{Context, Result};
use clap::Args;
use folio_sync::{generate, WriteResult};

use super::SiteArgs;

/// Arguments for `folio build`.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    pub fn run(self, site: &SiteArgs) -> Result<()> {
        let config = site.load()?;
        let result = generate(&config, self.dry_run).with_context(|| {
            format!(
                "build failed ({} → {})",
                config.template_dir.display(),
                config.output_dir.display()
            )
        })?;

        print_results(&result.output_dir.display().to_string(), &result.writes, self.dry_run);
        Ok(())
    }
}

fn print_results(output_dir: &str, writes: &[WriteResult], dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    if writes.is_empty() {
        println!("{prefix}✓ '{output_dir}' — nothing to do");
        return;
    }

    let bytes: usize = writes.iter().map(WriteResult::bytes).sum();
    println!(
        "{prefix}✓ '{output_dir}' generated ({} page(s), {bytes} bytes)",
        writes.len()
    );

    for r in writes {
        match r {
            WriteResult::Written { path, .. } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path, .. } => println!("  ~  {}", path.display()),
        }
    }
}
