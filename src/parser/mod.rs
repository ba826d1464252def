//! Raw profile parsing and report schema definitions.
//!
//! This module handles:
//! - Parsing raw XHProf JSON into edge maps
//! - Defining the flattened report schema (`Call`, `Profile`)

pub mod schema;
pub mod xhprof;

// Re-export main types
pub use schema::{Call, Metric, Profile};
pub use xhprof::{parse_pair_call_map, parse_pair_call_map_str, read_pair_call_map};
