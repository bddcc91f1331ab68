//! Folio — numbered-page documentation generator.
//!
//! # Usage
//!
//! ```text
//! folio                       # same as `folio build`
//! folio build [--dry-run]
//! folio diff [--name-only]
//! folio status [--json]
//!
//! global: [-v...] [--config <path>] [--src <dir>] [--out <dir>]
//! ```

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::{build::BuildArgs, diff::DiffArgs, status::StatusArgs, SiteArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Render numbered page templates into a documentation directory",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    site: SiteArgs,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every page and write it to the output directory (default).
    Build(BuildArgs),

    /// Show unified diff of what build would write.
    Diff(DiffArgs),

    /// Show per-page status of templates and generated output.
    Status(StatusArgs),
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Build(BuildArgs::default()));
    match command {
        Commands::Build(args) => args.run(&cli.site),
        Commands::Diff(args) => args.run(&cli.site),
        Commands::Status(args) => args.run(&cli.site),
    }
}
