use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sotu_cli::pipeline;
use sotu_cli::settings::Settings;
use sotu_core::config::Config;
use sotu_core::CategoryKind;

#[derive(Parser)]
#[command(name = "sotu", about = "State of the Union corpus analytics")]
struct Cli {
    /// Directory holding config.toml and friends.
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,
    /// Overrides data.documents_dir.
    #[arg(long)]
    documents: Option<PathBuf>,
    /// Overrides data.output_dir.
    #[arg(long)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Builds every figure input (default).
    Run,
    WordCloud,
    Sankey,
    TimeSeries {
        /// Category name, e.g. "num words".
        #[arg(long)]
        category: Option<CategoryKind>,
        /// Plots one series per group instead of splitting at a year.
        #[arg(long)]
        no_split_year: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load_in(&cli.config_dir)?;
    let mut settings = Settings::from_config(&config)?;
    if let Some(dir) = cli.documents {
        settings.documents_dir = dir;
    }
    if let Some(dir) = cli.output {
        settings.output_dir = dir;
    }
    let command = cli.command.unwrap_or(Command::Run);
    if let Command::TimeSeries { category, no_split_year } = command {
        settings.apply_time_series_args(category, no_split_year);
    }

    let pos_map = pipeline::load_pos_map(&settings)?;
    let mut store = pipeline::load_store(&settings)?;
    pipeline::prepare_store(&mut store, &settings, &pos_map)?;
    tracing::info!(groups = store.groups().count(), "corpus ready");

    let out = &settings.output_dir;
    if matches!(command, Command::Run | Command::WordCloud) {
        pipeline::write_json(out, "word_cloud.json", &pipeline::word_clouds(&store, &settings)?)?;
    }
    if matches!(command, Command::Run | Command::Sankey) {
        pipeline::write_json(out, "sankey.json", &pipeline::sankey(&store, &settings)?)?;
    }
    if matches!(command, Command::Run | Command::TimeSeries { .. }) {
        pipeline::write_json(out, "time_series.json", &pipeline::time_series(&store, &settings)?)?;
    }
    Ok(())
}
