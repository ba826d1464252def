use crate::aggregator::{avg_pair_call_maps, PairCallMap};
use crate::parser::read_pair_call_map;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{bail, Context, Result};
use log::info;
use std::path::PathBuf;

/// Read every raw run and average them into one edge map
pub fn load_averaged_runs(inputs: &[PathBuf]) -> Result<PairCallMap> {
    if inputs.is_empty() {
        bail!("At least one input profile is required");
    }

    let runs = inputs
        .iter()
        .map(|path| {
            read_pair_call_map(path)
                .with_context(|| format!("Failed to read raw profile {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Averaging {} run(s)", runs.len());

    Ok(avg_pair_call_maps(&runs).into_owned())
}

/// Display version information
pub fn display_version() {
    println!("XHProf Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Profile Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Inclusive/exclusive cost reports for XHProf call-graph profiles.");
}
