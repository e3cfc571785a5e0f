//! CLI argument definitions for the equipment matcher.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use svet_match::{DEFAULT_INCLUSION_THRESHOLD, MatchMode, SimilarityMetric};

#[derive(Parser)]
#[command(
    name = "symptovet",
    version,
    about = "SymptoVet equipment matcher - reconcile AI equipment names with a clinic catalog",
    long_about = "Reconcile free-text equipment names from the diagnosis service with a\n\
                  caller-supplied equipment catalog.\n\n\
                  Exact (case-insensitive) names win outright; otherwise candidates\n\
                  scoring above the inclusion threshold are ranked by similarity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow query names to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match a request body (aiEquipmentNames + dbEquipments) and print the response.
    Match(MatchArgs),

    /// Print the similarity between two equipment names.
    Score(ScoreArgs),
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Request body as JSON; reads stdin when omitted or "-".
    #[arg(value_name = "REQUEST")]
    pub request: Option<PathBuf>,

    /// Minimum similarity (exclusive) for fuzzy candidates.
    #[arg(long, default_value_t = DEFAULT_INCLUSION_THRESHOLD)]
    pub threshold: f64,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Report every candidate above the threshold, or only the best one.
    #[arg(long, value_enum, default_value = "ranked")]
    pub mode: ModeArg,

    /// Response rendering.
    #[arg(long, value_enum, default_value = "json")]
    pub output: OutputArg,

    /// Pretty-print the JSON response.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// First name.
    pub left: String,

    /// Second name.
    pub right: String,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Parser)]
pub struct ScoringArgs {
    /// Similarity measure for non-exact names.
    #[arg(long, value_enum, default_value = "dice")]
    pub metric: MetricArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Dice,
    JaroWinkler,
}

impl From<MetricArg> for SimilarityMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Dice => SimilarityMetric::Dice,
            MetricArg::JaroWinkler => SimilarityMetric::JaroWinkler,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Ranked,
    Best,
}

impl From<ModeArg> for MatchMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Ranked => MatchMode::Ranked,
            ModeArg::Best => MatchMode::BestOnly,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Json,
    Table,
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
    use super::*;

    #[test]
    fn match_defaults() {
        let cli = Cli::try_parse_from(["symptovet", "match"]).expect("parse");
        let Command::Match(args) = cli.command else {
            panic!("expected match command");
        };
        assert!(args.request.is_none());
        assert_eq!(args.threshold, DEFAULT_INCLUSION_THRESHOLD);
        assert_eq!(
            SimilarityMetric::from(args.scoring.metric),
            SimilarityMetric::Dice
        );
        assert_eq!(MatchMode::from(args.mode), MatchMode::Ranked);
        assert!(args.output == OutputArg::Json);
        assert!(!args.pretty);
    }

    #[test]
    fn match_options_parse() {
        let cli = Cli::try_parse_from([
            "symptovet",
            "match",
            "request.json",
            "--threshold",
            "0.55",
            "--metric",
            "jaro-winkler",
            "--mode",
            "best",
            "--output",
            "table",
            "--log-format",
            "json",
        ])
        .expect("parse");
        let Command::Match(args) = cli.command else {
            panic!("expected match command");
        };
        assert_eq!(args.request, Some(PathBuf::from("request.json")));
        assert_eq!(args.threshold, 0.55);
        assert_eq!(
            SimilarityMetric::from(args.scoring.metric),
            SimilarityMetric::JaroWinkler
        );
        assert_eq!(MatchMode::from(args.mode), MatchMode::BestOnly);
        assert!(args.output == OutputArg::Table);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }

    #[test]
    fn score_requires_two_names() {
        assert!(Cli::try_parse_from(["symptovet", "score", "ECG"]).is_err());
        let cli = Cli::try_parse_from(["symptovet", "score", "ECG", "ecg"]).expect("parse");
        assert!(matches!(cli.command, Command::Score(_)));
    }
}
