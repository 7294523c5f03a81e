use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info};
use whatstats_parser::parse_export;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::report::{build_summary, Summary};

/// What a finished run looked like, for the caller to report. Everything
/// else lives in the written document.
#[derive(Debug)]
pub struct RunReport {
    pub total_messages: u64,
    pub dropped_rows: usize,
    pub output_path: PathBuf,
}

/// One full batch run: read the export, aggregate, write the summary.
pub fn run(input: &Path, output: &Path, config: &PipelineConfig) -> Result<RunReport> {
    if !input.exists() {
        return Err(PipelineError::MissingInput {
            path: input.to_path_buf(),
        });
    }

    let raw = fs::read_to_string(input)?;
    let parsed = parse_export(&raw)?;
    debug!(
        events = parsed.events.len(),
        dropped = parsed.dropped_rows,
        "Parsed export"
    );

    let summary = build_summary(&parsed.events, config, Utc::now());
    write_summary(&summary, output)?;
    info!(
        path = %output.display(),
        messages = summary.stats.total_messages,
        "Wrote aggregated summary"
    );

    Ok(RunReport {
        total_messages: summary.stats.total_messages,
        dropped_rows: parsed.dropped_rows,
        output_path: output.to_path_buf(),
    })
}

/// Serializes through a temp sibling and renames it into place, so an
/// interrupted run never leaves a torn document at the destination.
pub fn write_summary(summary: &Summary, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let body = serde_json::to_string_pretty(summary)?;
    let tmp = output.with_extension("tmp");
    fs::write(&tmp, body)?;
    fs::rename(&tmp, output)?;
    Ok(())
}
