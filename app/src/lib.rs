//! tabnest - command line host
//!
//! Loads a document, binds a tab widget to it, replays an event script and
//! prints the result.

mod commands;
mod state;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tabnest_core::{Config, Dispatch};

use commands::tabs::{get_tab_sets, render_html, SetInfo};
use commands::{script, CommandResult};
use state::AppState;

/// Replay input against nested tab widgets.
#[derive(Debug, Parser)]
#[command(name = "tabnest", version, about)]
pub struct Cli {
    /// Document JSON file
    document: PathBuf,

    /// Configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Event script JSON file
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Final document as HTML
    Html,
    /// Event results and per-set selection as JSON
    Json,
}

#[derive(Debug, Serialize)]
struct Report {
    events: Vec<CommandResult<Dispatch>>,
    sets: CommandResult<Vec<SetInfo>>,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tabnest_core::init_logging();

    let output = execute(&cli)?;
    println!("{output}");
    Ok(())
}

fn execute(cli: &Cli) -> anyhow::Result<String> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let document = std::fs::read_to_string(&cli.document)
        .with_context(|| format!("Failed to read document {}", cli.document.display()))?;

    let state = AppState::new();
    state
        .initialize(&document, config)
        .context("Failed to initialize tab widget")?;

    let events = match &cli.script {
        Some(path) => script::load(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?,
        None => Vec::new(),
    };
    let results = script::replay(&state, &events);

    tracing::info!(
        events = results.len(),
        failed = results.iter().filter(|result| !result.success).count(),
        "Script replayed"
    );

    match cli.format {
        Format::Html => {
            let html = render_html(&state);
            match (html.data, html.error) {
                (Some(html), _) => Ok(html),
                (None, error) => anyhow::bail!(error.unwrap_or_default()),
            }
        }
        Format::Json => {
            let report = Report {
                events: results,
                sets: get_tab_sets(&state),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
