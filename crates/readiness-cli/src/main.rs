mod loader;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use readiness_core::{Error as CoreError, SchemaHints};
use readiness_metrics::build_raw_report;
use readiness_report::{
    average_reports, compute_aggregate_score, final_report_filename, raw_report_filename,
    render_final_report, rescore_averaged_report, write_json_report, ReportError, ScoredReport,
    AVERAGE_FINAL_REPORT_FILENAME, AVERAGE_RAW_REPORT_FILENAME,
};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{0} dataset unit(s) failed")]
    UnitsFailed(usize),
}

#[derive(Parser, Debug)]
#[command(name = "readiness", version, about = "Dataset readiness scoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every dataset file in a directory and write the reports.
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Directory containing the dataset files.
    directory: PathBuf,
    /// Output directory for generated reports.
    #[arg(long, default_value = "outputReports")]
    out_dir: PathBuf,
    /// Column-role hints JSON (defaults to column_roles.json in the
    /// dataset directory, when present).
    #[arg(long)]
    hints: Option<PathBuf>,
    /// Fail with a non-zero exit when any unit is skipped.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Score(args) => run_score(args),
    }
}

fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let directory = &args.directory;
    if !directory.is_dir() {
        return Err(CliError::InvalidConfig(format!(
            "not a directory: {}",
            directory.display()
        )));
    }

    let batch_name = directory
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("batch");
    let out_dir = args.out_dir.join(batch_name);

    let hints = load_hints(directory, args.hints.as_deref())?;
    let files = collect_data_files(directory)?;
    if files.is_empty() {
        return Err(CliError::InvalidConfig(format!(
            "no CSV files found in {}",
            directory.display()
        )));
    }

    // Units are processed to completion one at a time; a failure skips
    // that unit, never the batch.
    let mut raw_report_paths = Vec::new();
    let mut skipped = Vec::new();
    for file in &files {
        match process_unit(file, &hints, &out_dir) {
            Ok(path) => raw_report_paths.push(path),
            Err(err) => {
                error!(file = %file.display(), %err, "skipping dataset unit");
                skipped.push(file.clone());
            }
        }
    }

    info!(
        scored = raw_report_paths.len(),
        skipped = skipped.len(),
        "batch complete"
    );
    for file in &skipped {
        warn!(file = %file.display(), "unit was skipped");
    }

    if raw_report_paths.len() > 1 {
        write_average_reports(&raw_report_paths, &out_dir)?;
    }

    if args.strict && !skipped.is_empty() {
        return Err(CliError::UnitsFailed(skipped.len()));
    }
    Ok(())
}

/// Run the full pipeline for one dataset file and return the path of the
/// persisted raw report.
fn process_unit(file: &Path, hints: &SchemaHints, out_dir: &Path) -> Result<PathBuf, CliError> {
    let frame = loader::load_csv_frame(file)?;
    let raw = build_raw_report(&frame, hints, file)?;
    let score = compute_aggregate_score(&raw);
    info!(
        unit = frame.name(),
        readiness = score.total_percentage,
        "scored dataset unit"
    );

    let dataset_id = decode_dataset_name(frame.name());
    let scored = ScoredReport { score, raw };
    let raw_path = write_json_report(out_dir, &raw_report_filename(&dataset_id), &scored)?;

    let final_report = render_final_report(&scored.raw, &scored.score);
    write_json_report(out_dir, &final_report_filename(&dataset_id), &final_report)?;
    Ok(raw_path)
}

/// Merge the persisted raw reports of the batch, re-score the merged
/// report through the single-file path, and persist both averaged
/// artifacts.
fn write_average_reports(raw_report_paths: &[PathBuf], out_dir: &Path) -> Result<(), CliError> {
    let mut reports = Vec::with_capacity(raw_report_paths.len());
    for path in raw_report_paths {
        let contents = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&contents)?;
        match value {
            serde_json::Value::Object(map) => reports.push(map),
            _ => {
                return Err(CliError::InvalidConfig(format!(
                    "raw report is not a JSON object: {}",
                    path.display()
                )));
            }
        }
    }

    let merged = average_reports(&reports)?;
    let rescored = rescore_averaged_report(&merged)?;
    write_json_report(out_dir, AVERAGE_RAW_REPORT_FILENAME, &rescored)?;

    let final_report = render_final_report(&rescored.raw, &rescored.score);
    write_json_report(out_dir, AVERAGE_FINAL_REPORT_FILENAME, &final_report)?;
    info!(
        readiness = rescored.score.total_percentage,
        "wrote averaged reports"
    );
    Ok(())
}

/// Hints come from an explicit `--hints` path or `column_roles.json`
/// beside the data. A malformed document degrades to defaults with a
/// warning; only an explicitly named missing file is an error.
fn load_hints(directory: &Path, explicit: Option<&Path>) -> Result<SchemaHints, CliError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::InvalidConfig(format!(
                    "hints file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let default = directory.join("column_roles.json");
            if !default.is_file() {
                return Ok(SchemaHints::default());
            }
            default
        }
    };

    let contents = std::fs::read_to_string(&path)?;
    match serde_json::from_str(&contents) {
        Ok(hints) => Ok(hints),
        Err(err) => {
            warn!(path = %path.display(), %err, "unusable hints document, using defaults");
            Ok(SchemaHints::default())
        }
    }
}

fn collect_data_files(directory: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Dataset names arrive percent-encoded from upstream storage; decode
/// them and normalise brackets for the report file names. Decoding works
/// on bytes so multibyte escape sequences reassemble into their UTF-8
/// characters.
fn decode_dataset_name(name: &str) -> String {
    let bytes = name.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            if let Some(value) = hex_pair(bytes.get(idx + 1).copied(), bytes.get(idx + 2).copied())
            {
                decoded.push(value);
                idx += 3;
                continue;
            }
        }
        decoded.push(bytes[idx]);
        idx += 1;
    }
    String::from_utf8_lossy(&decoded)
        .replace('[', "(")
        .replace(']', ")")
}

fn hex_pair(high: Option<u8>, low: Option<u8>) -> Option<u8> {
    let high = (high? as char).to_digit(16)?;
    let low = (low? as char).to_digit(16)?;
    Some((high * 16 + low) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(decode_dataset_name("health%20survey"), "health survey");
        assert_eq!(decode_dataset_name("census%282024%29"), "census(2024)");
        assert_eq!(decode_dataset_name("price%E2%82%AC"), "price€");
    }

    #[test]
    fn normalises_brackets() {
        assert_eq!(decode_dataset_name("survey[v2]"), "survey(v2)");
    }

    #[test]
    fn leaves_plain_names_untouched() {
        assert_eq!(decode_dataset_name("households"), "households");
        assert_eq!(decode_dataset_name("50%"), "50%");
        assert_eq!(decode_dataset_name("café"), "café");
    }
}
