// src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

use crate::parsers::parse_finite_f64;

/// Maintainability snapshot and quality gate over analyzer output.
#[derive(Parser, Debug)]
#[command(name = "quality-probe", version = crate::VERSION, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a snapshot from a measurement document and apply the quality gate
    Scan(ScanArgs),
    /// Diff two stored snapshots
    Compare(CompareArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CompareFormat {
    #[default]
    Text,
    Json,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ScanArgs {
    /// Measurement document (JSON, or YAML by .yaml/.yml extension)
    pub measurements: PathBuf,

    /// Project root to report instead of the one in the document
    #[arg(long)]
    pub root: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also store the snapshot at this path (format by extension)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Length of each hotspot list
    #[arg(long)]
    pub top: Option<usize>,

    /// Fail when average MI is below this value [env: QUALITY_PROBE_FAIL_MI_BELOW]
    #[arg(long, value_parser = parse_finite_f64)]
    pub fail_mi_below: Option<f64>,

    /// Fail when typing coverage (%) is below this value [env: QUALITY_PROBE_FAIL_TYPING_BELOW]
    #[arg(long, value_parser = parse_finite_f64)]
    pub fail_typing_below: Option<f64>,

    /// MI below this counts as low and is labelled WATCH
    #[arg(long, value_parser = parse_finite_f64)]
    pub watch_floor: Option<f64>,

    /// Cognitive complexity above this is flagged OVER
    #[arg(long)]
    pub complexity_target: Option<usize>,

    /// Glob of files to leave out of the lowest-MI list (repeatable)
    #[arg(long = "hotspot-exclude", value_name = "GLOB")]
    pub hotspot_exclude: Vec<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CompareArgs {
    /// Earlier snapshot
    pub old: PathBuf,
    /// Later snapshot
    pub new: PathBuf,

    #[arg(long, value_enum, default_value_t = CompareFormat::Text)]
    pub format: CompareFormat,
}
