//! JSON output writer.
//!
//! Writes profiles, nearest family results and averaged edge maps to JSON
//! files with proper formatting.

use crate::aggregator::{NearestFamily, PairCallMap};
use crate::parser::schema::Profile;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a flattened profile to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let profile = run.flatten();
/// write_profile(&profile, "profile.json")?;
/// ```
pub fn write_profile(profile: &Profile, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    write_json(profile, output_path.as_ref())
}

/// Write a nearest family result to a JSON file
pub fn write_family(family: &NearestFamily, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    write_json(family, output_path.as_ref())
}

/// Write an edge map in raw XHProf layout
///
/// The file can be fed back into the raw parser.
pub fn write_pair_call_map(
    map: &PairCallMap,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    write_json(map, output_path.as_ref())
}

fn write_json<T: Serialize>(value: &T, output_path: &Path) -> Result<(), OutputError> {
    info!("Writing JSON to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(OutputError::SerializationFailed)?;

    info!(
        "Written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Validate that output path is writable
///
/// **Public** - also used by commands before doing any work
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a flattened profile from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_profile(input_path: impl AsRef<Path>) -> Result<Profile, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading profile from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let profile: Profile =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Profile loaded: version {}, {} calls",
        profile.version,
        profile.calls.len()
    );

    Ok(profile)
}
