//! CLI argument definitions for the movie catalogue cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use movie_cli::pipeline::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

#[derive(Parser)]
#[command(
    name = "movie-etl",
    version,
    about = "Clean a movie catalogue CSV and encode its genres",
    long_about = "Clean a movie catalogue CSV and encode its genres.\n\n\
                  Extracts the release year from each title, strips it from the title,\n\
                  splits the pipe-delimited genres and adds one 0/1 column per genre."
)]
pub struct Cli {
    /// Input catalogue CSV with `title` and `genres` columns.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Path of the cleaned CSV to write.
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Run every stage but skip writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print a summary table of the run and the genre counts.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Also write the run report as JSON to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_use_default_paths() {
        let cli = Cli::try_parse_from(["movie-etl"]).expect("parse");
        assert_eq!(cli.input, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(!cli.dry_run);
        assert!(cli.report.is_none());
    }

    #[test]
    fn paths_can_be_overridden() {
        let cli = Cli::try_parse_from(["movie-etl", "in.csv", "out.csv", "--summary"])
            .expect("parse");
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert!(cli.summary);
    }
}
