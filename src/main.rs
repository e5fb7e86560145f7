// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

use clap::Parser;
use std::path::PathBuf;

use har2doc::document::{BuildOptions, Document};
use har2doc::{config, export, har, markdown};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "har2doc")]
struct Args {
    /// Path to the HAR capture file
    har_file: PathBuf,

    /// CSV output path (default: HAR path with a .csv extension)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Markdown output path (default: HAR path with a .md extension)
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// Optional config TOML path (masking rules)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pass malformed declared-JSON bodies through instead of failing
    #[arg(long)]
    lenient_json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let cfg = if let Some(ref p) = args.config {
        config::Config::load_from_path(p).unwrap_or_else(|e| {
            warn!(path = %p.display(), %e, "failed to load config, using defaults");
            config::Config::default()
        })
    } else {
        config::Config::default()
    };

    let entries = har::load_entries(&args.har_file)?;
    info!(count = entries.len(), "loaded capture entries");

    let mut options = BuildOptions::with_local_timezone();
    options.lenient_json = args.lenient_json || cfg.general.lenient_json;

    // First malformed entry aborts the whole batch.
    let mut documents = Vec::with_capacity(entries.len());
    for entry in &entries {
        documents.push(Document::from_entry(entry, &cfg.masks, &options)?);
    }

    let csv_path = args
        .csv
        .unwrap_or_else(|| args.har_file.with_extension("csv"));
    export::write_csv(&documents, &csv_path, export::DOCUMENT_COLUMNS)?;
    info!(path = %csv_path.display(), rows = documents.len(), "wrote CSV export");

    let markdown_path = args
        .markdown
        .unwrap_or_else(|| args.har_file.with_extension("md"));
    let rendered = markdown::render_documents(&documents, markdown::DEFAULT_COMPONENTS);
    export::write_markdown(&rendered, &markdown_path)?;
    info!(path = %markdown_path.display(), "wrote Markdown export");

    Ok(())
}
