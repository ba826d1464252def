//! XHProf Studio
//!
//! Turns XHProf call-graph samples (`parent==>child` edges with cost
//! metrics) into per-function inclusive and exclusive cost reports, and
//! averages repeated runs of the same program.
//!
//! ## Getting Started
//!
//! ```ignore
//! use xhprof_studio::aggregator::avg_pair_call_maps;
//! use xhprof_studio::parser::read_pair_call_map;
//!
//! let runs = vec![read_pair_call_map("run1.json")?, read_pair_call_map("run2.json")?];
//! let profile = avg_pair_call_maps(&runs).flatten();
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
