//! XHProf Studio CLI
//!
//! Flattens raw XHProf runs into per-function inclusive/exclusive cost
//! reports, queries callers/callees of one function, and averages runs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use xhprof_studio::commands::{
    display_version, execute_average, execute_family, execute_report, AverageArgs, FamilyArgs,
    ReportArgs,
};
use xhprof_studio::parser::Metric;

/// XHProf Studio - call-graph cost reports for XHProf profiles
#[derive(Parser, Debug)]
#[command(name = "xhprof-studio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Average runs and write per-function inclusive/exclusive costs
    Report {
        /// Raw XHProf JSON files (one per run)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output path for JSON profile
        #[arg(short, long, default_value = "profile.json")]
        output: PathBuf,

        /// Number of functions in the text summary
        #[arg(long, default_value = "20", env = "XHPROF_STUDIO_TOP")]
        top: usize,

        /// Sort column (ct, wt, excl_wt, cpu, excl_cpu, mu, excl_mu, pmu, excl_pmu)
        #[arg(long, default_value = "excl_wt")]
        sort: Metric,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Show the immediate callers and callees of one function
    Family {
        /// Raw XHProf JSON files (one per run)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Function name, e.g. "main()"
        #[arg(short, long)]
        function: String,

        /// Optional output path for JSON result
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Average runs into a single raw XHProf JSON file
    Average {
        /// Raw XHProf JSON files (one per run)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output path for averaged raw profile
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            input,
            output,
            top,
            sort,
            summary,
        } => {
            execute_report(ReportArgs {
                inputs: input,
                output_json: output,
                top,
                sort,
                print_summary: summary,
            })?;
        }

        Commands::Family {
            input,
            function,
            output,
        } => {
            execute_family(FamilyArgs {
                inputs: input,
                function,
                output_json: output,
            })?;
        }

        Commands::Average { input, output } => {
            execute_average(AverageArgs {
                inputs: input,
                output_json: output,
            })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
