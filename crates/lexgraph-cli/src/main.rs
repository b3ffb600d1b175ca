//! LexGraph CLI - Command-line interface for the LexGraph case-analysis
//! visualization core.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexgraph_cli::commands;
use lexgraph_cli::{Cli, CliError, Command, Config, Formatter};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> lexgraph_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config: an explicit --config path must exist and parse; the
    // default location falls back to defaults when absent.
    let config = match &cli.config {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Config::load_from(path)?
        }
        None => Config::load().unwrap_or_else(|_| {
            let cfg = Config::default();
            cfg.save().ok();
            cfg
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Graph(args) => commands::execute_graph(args, &config, &formatter)?,
        Command::Timeline(args) => commands::execute_timeline(args, &formatter)?,
        Command::Contradictions(args) => commands::execute_contradictions(args, &formatter)?,
        Command::Context(args) => commands::execute_context(args, &formatter)?,
    }

    Ok(())
}
