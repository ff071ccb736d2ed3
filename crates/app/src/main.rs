use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use sankey_timeline_core::{build_summary, Dataset, SummaryConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> sankey_timeline_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            dataset,
            config,
            output,
            pretty,
        } => run_summarize(&dataset, config.as_deref(), output.as_deref(), pretty),
        Commands::Defaults { pretty } => write_json(&SummaryConfig::default(), None, pretty),
    }
}

fn run_summarize(
    dataset: &Path,
    config: Option<&Path>,
    output: Option<&Path>,
    pretty: bool,
) -> sankey_timeline_core::Result<()> {
    tracing::info!(?dataset, ?config, ?output, "building summary");

    let config = match config {
        Some(path) => SummaryConfig::load(path)?,
        None => SummaryConfig::default(),
    };
    let dataset = Dataset::load(dataset)?;
    let summary = build_summary(&dataset, &config)?;

    tracing::info!(
        periods = summary.totals.len(),
        max_stack_height = summary.max_stack_height(),
        "summary ready"
    );
    write_json(&summary, output, pretty)
}

fn write_json<T: Serialize>(
    value: &T,
    output: Option<&Path>,
    pretty: bool,
) -> sankey_timeline_core::Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Summary builder for the energy flow timeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the renderer summary from a JSON dataset.
    Summarize {
        /// Path to the JSON dataset of per-period flows.
        dataset: PathBuf,
        /// Optional JSON configuration overriding the source catalog and layout.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the summary here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Print the default configuration as JSON.
    Defaults {
        #[arg(long)]
        pretty: bool,
    },
}
