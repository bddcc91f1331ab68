pub mod build;
pub mod diff;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use folio_core::SiteConfig;

/// Options shared by every command for locating the site.
#[derive(Args, Debug, Default)]
pub struct SiteArgs {
    /// Config file (default: `folio.yaml` in the current directory, if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Template directory, overriding the config.
    #[arg(long, global = true, value_name = "DIR")]
    pub src: Option<PathBuf>,

    /// Output directory, overriding the config. Must already exist.
    #[arg(long, global = true, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

impl SiteArgs {
    /// Resolve the effective [`SiteConfig`] for this invocation.
    pub fn load(&self) -> Result<SiteConfig> {
        let cwd = std::env::current_dir().context("could not determine current directory")?;
        let mut config = SiteConfig::discover_at(&cwd, self.config.as_deref())
            .context("failed to load site configuration")?;
        if let Some(src) = &self.src {
            config.template_dir = src.clone();
        }
        if let Some(out) = &self.out {
            config.output_dir = out.clone();
        }
        Ok(config)
    }
}
