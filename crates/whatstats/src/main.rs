use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use whatstats_core::config::PipelineConfig;
use whatstats_core::pipeline;

#[derive(Parser, Debug)]
#[command(author, version, about = "Aggregate a WhatsApp chat export for the dashboard", long_about = None)]
struct Cli {
    /// Chat export CSV to read
    #[arg(short, long, default_value = "w.csv")]
    input: PathBuf,

    /// Where to write the aggregated JSON document
    #[arg(short, long, default_value = "data/whatsapp-aggregated.json")]
    output: PathBuf,

    /// TOML file overriding the pipeline defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?
            .unwrap_or_default(),
        None => PipelineConfig::default(),
    };

    let report = pipeline::run(&cli.input, &cli.output, &config)?;

    println!(
        "✅ Aggregated {} messages into '{}'",
        report.total_messages,
        report.output_path.display()
    );
    if report.dropped_rows > 0 {
        println!("   ⚠️  Dropped {} malformed rows", report.dropped_rows);
    }

    Ok(())
}
