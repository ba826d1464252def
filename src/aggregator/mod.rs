//! Aggregation of XHProf edge samples into per-function costs.
//!
//! This module transforms raw caller→callee edge costs into:
//! - Per-function inclusive/exclusive costs (flattening)
//! - Immediate callers/callees of one function (nearest family)
//! - Averages across repeated runs
//!
//! Everything here is in-memory and synchronous.

pub mod average;
pub mod edge_key;
pub mod family;
pub mod flatten;
pub mod pair_call;
pub mod pair_call_map;

// Re-export main types and functions
pub use average::avg_pair_call_maps;
pub use edge_key::{pair_name, parse_pair_name, EdgeKey};
pub use family::{compute_nearest_family, NearestFamily};
pub use flatten::{flatten_symbols, SymbolEntry, SymbolTable};
pub use pair_call::PairCall;
pub use pair_call_map::PairCallMap;
