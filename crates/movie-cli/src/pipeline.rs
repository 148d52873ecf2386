//! Catalogue cleaning run with explicit stages.
//!
//! The run follows these stages in order:
//! 1. **Ingest**: read the input CSV and check the required columns
//! 2. **Transform**: clean fields, build the genre vocabulary, encode records
//! 3. **Report**: print the duplicate-title diagnostic
//! 4. **Output**: write the cleaned CSV (and optionally the JSON run report)
//!
//! Output targets are checked before any file is replaced, so a failure
//! aborts the run without leaving a cleaned CSV behind.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use movie_ingest::{IngestError, read_movie_table};
use movie_model::{ErrorKind, ModelError};
use movie_output::{OutputError, ensure_parent_dir, write_atomic, write_clean_csv};
use movie_transform::{TransformOptions, TransformOutput, TransformReport, transform_table};

/// Input used when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "scripts/datasets/movies.csv";

/// Output used when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "scripts/datasets/cleaned_movies.csv";

/// Options of a single run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub transform: TransformOptions,
    /// Skip writing the cleaned CSV.
    pub dry_run: bool,
    /// Where to write the JSON run report, if anywhere.
    pub report_path: Option<PathBuf>,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct RunOutcome {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// False for dry runs.
    pub written: bool,
    pub output: TransformOutput,
}

impl RunOutcome {
    pub fn report(&self) -> &TransformReport {
        &self.output.report
    }
}

/// Clean `input_path` into `output_path` with default options.
pub fn transform(input_path: &Path, output_path: &Path) -> Result<RunOutcome> {
    run(input_path, output_path, &RunOptions::default())
}

/// Execute all stages of a run.
pub fn run(input_path: &Path, output_path: &Path, options: &RunOptions) -> Result<RunOutcome> {
    let run_span = info_span!("run", input = %input_path.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let raw = info_span!("ingest")
        .in_scope(|| read_movie_table(input_path))
        .with_context(|| format!("load catalogue {}", input_path.display()))?;

    // =========================================================================
    // Stage 2: Transform
    // =========================================================================
    let output = transform_table(raw, &options.transform)
        .with_context(|| format!("transform catalogue {}", input_path.display()))?;

    // =========================================================================
    // Stage 3: Report
    // =========================================================================
    if let Some(message) = duplicate_message(output.report.duplicate_titles) {
        println!("{message}");
    }

    // =========================================================================
    // Stage 4: Output
    // =========================================================================
    let outcome = RunOutcome {
        input_path: input_path.to_path_buf(),
        output_path: output_path.to_path_buf(),
        written: !options.dry_run,
        output,
    };

    // Every target is checked before the first file is replaced.
    let report = match &options.report_path {
        Some(report_path) => Some((
            report_path.as_path(),
            prepare_report(&outcome, report_path)
                .with_context(|| format!("write run report {}", report_path.display()))?,
        )),
        None => None,
    };

    if outcome.written {
        info_span!("output", path = %output_path.display())
            .in_scope(|| write_clean_csv(&outcome.output.table, output_path))
            .with_context(|| format!("write cleaned catalogue {}", output_path.display()))?;
    } else {
        info!(path = %output_path.display(), "dry run, output not written");
    }

    if let Some((report_path, payload)) = report {
        write_bytes(report_path, &payload)
            .with_context(|| format!("write run report {}", report_path.display()))?;
    }

    if outcome.written {
        println!("Cleaned data saved to: {}", output_path.display());
    }

    info!(
        rows = outcome.output.report.output_rows,
        written = outcome.written,
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );
    Ok(outcome)
}

/// Console line for the duplicate diagnostic; `None` when there are none.
pub fn duplicate_message(count: usize) -> Option<String> {
    (count > 0).then(|| format!("Found {count} potential duplicate movies"))
}

/// Classify a run failure by walking its error chain.
pub fn error_kind(error: &anyhow::Error) -> Option<ErrorKind> {
    error.chain().find_map(|cause| {
        if let Some(err) = cause.downcast_ref::<IngestError>() {
            Some(err.kind())
        } else if let Some(err) = cause.downcast_ref::<OutputError>() {
            Some(err.kind())
        } else {
            cause.downcast_ref::<ModelError>().map(ModelError::kind)
        }
    })
}

#[derive(Serialize)]
struct RunReportJson<'a> {
    input: String,
    output: String,
    written: bool,
    report: &'a TransformReport,
    genres: Vec<GenreCount<'a>>,
}

#[derive(Serialize)]
struct GenreCount<'a> {
    genre: &'a str,
    records: usize,
}

/// Render the run report as pretty-printed JSON.
pub fn render_report_json(outcome: &RunOutcome) -> Result<Vec<u8>> {
    let payload = RunReportJson {
        input: outcome.input_path.display().to_string(),
        output: outcome.output_path.display().to_string(),
        written: outcome.written,
        report: &outcome.output.report,
        genres: outcome
            .output
            .table
            .genre_frequencies()
            .into_iter()
            .map(|(genre, records)| GenreCount { genre, records })
            .collect(),
    };
    let mut json = serde_json::to_vec_pretty(&payload).context("serialize run report")?;
    json.push(b'\n');
    Ok(json)
}

/// Write the run report as pretty-printed JSON.
pub fn write_report_json(outcome: &RunOutcome, path: &Path) -> Result<()> {
    let payload = prepare_report(outcome, path)?;
    write_bytes(path, &payload)
}

fn prepare_report(outcome: &RunOutcome, path: &Path) -> Result<Vec<u8>> {
    ensure_parent_dir(path)?;
    render_report_json(outcome)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    write_atomic(path, |file| {
        file.write_all(bytes).map_err(|e| OutputError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    Ok(())
}
