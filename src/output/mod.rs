//! Output writers for aggregated profile data.
//!
//! This module handles writing data to disk:
//! - Flattened JSON profiles
//! - Nearest family results
//! - Averaged raw edge maps
//! - Text tables for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_profile, validate_path, write_family, write_pair_call_map, write_profile};
pub use text::{format_family, format_profile};
