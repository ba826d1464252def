//! Family command: immediate callers and callees of one function.

use super::models::FamilyArgs;
use super::utils::load_averaged_runs;
use crate::output::{format_family, write_family};
use anyhow::{Context, Result};
use log::{info, warn};

/// Execute the family command
pub fn execute_family(args: FamilyArgs) -> Result<()> {
    let edges = load_averaged_runs(&args.inputs)?;

    let family = edges.nearest_family(&args.function);

    if family.parents.is_empty() && family.children.is_empty() {
        warn!("No edges reference {}", args.function);
    }

    println!("{}", format_family(&args.function, &family));

    if let Some(path) = &args.output_json {
        write_family(&family, path).context("Failed to write family JSON")?;
        info!("✓ Family written to: {}", path.display());
    }

    Ok(())
}
