//! Report command implementation.
//!
//! The report command:
//! 1. Reads every raw run
//! 2. Averages the runs
//! 3. Flattens edges into per-function costs
//! 4. Writes the JSON profile

use super::models::ReportArgs;
use super::utils::load_averaged_runs;
use crate::output::{format_profile, validate_path, write_profile};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or malformed input files
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    validate_path(&args.output_json).context("Invalid output path")?;

    info!("Step 1/3: Loading {} run(s)...", args.inputs.len());
    let edges = load_averaged_runs(&args.inputs)?;

    info!("Step 2/3: Flattening {} edges...", edges.len());
    let mut profile = edges.flatten();
    profile.sort_by(args.sort);

    if let Some(main) = &profile.main {
        debug!(
            "main(): {} calls, {:.1} wall time",
            main.count, main.wall_time
        );
    }

    info!("Step 3/3: Writing output files...");
    write_profile(&profile, &args.output_json).context("Failed to write profile JSON")?;

    info!("✓ Profile written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("PROFILE SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Runs:      {}", args.inputs.len());
        println!("Edges:     {}", edges.len());
        println!("Functions: {}", profile.calls.len());
        println!("\n{}", format_profile(&profile, args.top, args.sort));
        println!("{}", "=".repeat(80));
    }

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
