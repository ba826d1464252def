//! Average command: combine repeated runs into one raw edge map.

use super::models::AverageArgs;
use super::utils::load_averaged_runs;
use crate::output::{validate_path, write_pair_call_map};
use anyhow::{Context, Result};
use log::info;

/// Execute the average command
pub fn execute_average(args: AverageArgs) -> Result<()> {
    validate_path(&args.output_json).context("Invalid output path")?;

    let edges = load_averaged_runs(&args.inputs)?;

    write_pair_call_map(&edges, &args.output_json).context("Failed to write averaged profile")?;

    info!(
        "✓ Averaged {} run(s) into {} edges: {}",
        args.inputs.len(),
        edges.len(),
        args.output_json.display()
    );

    Ok(())
}
