use crate::parser::schema::Metric;
use crate::utils::config::DEFAULT_TOP_N;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Raw XHProf runs to average and flatten
    pub inputs: Vec<PathBuf>,

    /// Output path for JSON profile
    pub output_json: PathBuf,

    /// Number of rows in the text summary
    pub top: usize,

    /// Column to sort by
    pub sort: Metric,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output_json: PathBuf::from("profile.json"),
            top: DEFAULT_TOP_N,
            sort: Metric::ExclWallTime,
            print_summary: false,
        }
    }
}

/// Arguments for the family command
#[derive(Debug, Clone)]
pub struct FamilyArgs {
    /// Raw XHProf runs to average
    pub inputs: Vec<PathBuf>,

    /// Function whose callers and callees are reported
    pub function: String,

    /// Optional JSON output path
    pub output_json: Option<PathBuf>,
}

/// Arguments for the average command
#[derive(Debug, Clone)]
pub struct AverageArgs {
    /// Raw XHProf runs to average
    pub inputs: Vec<PathBuf>,

    /// Output path for the averaged raw map
    pub output_json: PathBuf,
}
