//! `folio status` — per-page template and output visibility.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use folio_core::SiteConfig;
use folio_sync::{
    staleness::{check, count},
    PageStatus, StalenessSignal,
};

use super::SiteArgs;

/// Arguments for `folio status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl StatusArgs {
    pub fn run(self, site: &SiteArgs) -> Result<()> {
        let config = site.load()?;
        let statuses = check(&config)
            .with_context(|| format!("status check failed for '{}'", config.output_dir.display()))?;

        if self.json {
            return print_json(&config, statuses);
        }
        print_table(&config, statuses);
        Ok(())
    }
}

#[derive(Serialize)]
struct StatusReportJson {
    summary: StatusSummaryJson,
    pages: Vec<PageStatusJson>,
}

#[derive(Serialize)]
struct StatusSummaryJson {
    template_dir: String,
    output_dir: String,
    pages: usize,
    current: usize,
    needs_build: usize,
    errors: usize,
    orphans: usize,
}

#[derive(Serialize)]
struct PageStatusJson {
    name: String,
    title: Option<String>,
    status: String,
    detail: String,
}

#[derive(Tabled)]
struct StatusTableRow {
    #[tabled(rename = "page")]
    page: String,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "detail")]
    detail: String,
}

fn summarize(config: &SiteConfig, statuses: &[PageStatus]) -> StatusSummaryJson {
    StatusSummaryJson {
        template_dir: config.template_dir.display().to_string(),
        output_dir: config.output_dir.display().to_string(),
        pages: config.range().len(),
        current: count(statuses, |s| *s == StalenessSignal::Current),
        needs_build: count(statuses, StalenessSignal::needs_generate),
        errors: count(statuses, StalenessSignal::is_error),
        orphans: count(statuses, |s| *s == StalenessSignal::Orphan),
    }
}

fn print_json(config: &SiteConfig, statuses: Vec<PageStatus>) -> Result<()> {
    let payload = StatusReportJson {
        summary: summarize(config, &statuses),
        pages: statuses
            .into_iter()
            .map(|row| PageStatusJson {
                detail: signal_detail(&row.signal),
                status: row.signal.label().to_string(),
                name: row.name,
                title: row.title,
            })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize status JSON")?
    );
    Ok(())
}

fn print_table(config: &SiteConfig, statuses: Vec<PageStatus>) {
    let summary = summarize(config, &statuses);
    println!(
        "Folio v{} | {} pages | {} current | {} to build | {} errors | {} orphans",
        env!("CARGO_PKG_VERSION"),
        summary.pages,
        summary.current,
        summary.needs_build,
        summary.errors,
        summary.orphans,
    );
    println!("{} → {}", summary.template_dir, summary.output_dir);

    let separator = "■".repeat(67).bright_black().to_string();
    println!("{separator}");
    println!(
        "Indicators: {} CURRENT  {} STALE  {} NEW  {} ERROR  {} ORPHAN",
        signal_indicator(&StalenessSignal::Current),
        signal_indicator(&StalenessSignal::Stale),
        signal_indicator(&StalenessSignal::NeverGenerated),
        signal_indicator(&StalenessSignal::MissingTemplate),
        signal_indicator(&StalenessSignal::Orphan),
    );
    println!("{separator}");

    let rows: Vec<StatusTableRow> = statuses
        .into_iter()
        .map(|row| StatusTableRow {
            status: format!("{} {}", signal_indicator(&row.signal), signal_label(&row.signal)),
            detail: signal_detail(&row.signal),
            title: row.title.unwrap_or_default(),
            page: row.name,
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if summary.errors > 0 {
        println!("Fix the template errors above; build stops at the first one.");
    } else if summary.needs_build > 0 {
        println!("Run 'folio build' to regenerate {} page(s).", summary.needs_build);
    }
}

fn signal_label(signal: &StalenessSignal) -> &'static str {
    match signal {
        StalenessSignal::MissingTemplate => "MISSING",
        StalenessSignal::RenderFailed { .. } => "BROKEN",
        StalenessSignal::NeverGenerated => "NEW",
        StalenessSignal::Stale => "STALE",
        StalenessSignal::Current => "CURRENT",
        StalenessSignal::Orphan => "ORPHAN",
    }
}

fn signal_indicator(signal: &StalenessSignal) -> String {
    match signal {
        StalenessSignal::NeverGenerated => "■".bright_black().bold().to_string(),
        StalenessSignal::Current => "■".green().bold().to_string(),
        StalenessSignal::Stale => "■".yellow().bold().to_string(),
        StalenessSignal::MissingTemplate | StalenessSignal::RenderFailed { .. } => {
            "■".red().bold().to_string()
        }
        StalenessSignal::Orphan => "■".magenta().bold().to_string(),
    }
}

fn signal_detail(signal: &StalenessSignal) -> String {
    match signal {
        StalenessSignal::MissingTemplate => "template not found".to_string(),
        StalenessSignal::RenderFailed { reason } => reason.clone(),
        StalenessSignal::NeverGenerated => "not generated yet".to_string(),
        StalenessSignal::Stale => "output differs from template".to_string(),
        StalenessSignal::Current => "up to date".to_string(),
        StalenessSignal::Orphan => "no template in page range".to_string(),
    }
}
