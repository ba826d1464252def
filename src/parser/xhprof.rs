//! Raw XHProf profile parser.
//!
//! XHProf writes one JSON object per profiled run:
//!
//! ```json
//! {
//!   "main()": {"ct": 1, "wt": 120, "cpu": 100, "mu": 2048, "pmu": 4096},
//!   "main()==>load_config": {"ct": 1, "wt": 30, "cpu": 25, "mu": 512, "pmu": 512}
//! }
//! ```
//!
//! Each key is an encoded edge, each value its accumulated cost.

use crate::aggregator::{PairCall, PairCallMap};
use crate::utils::error::ParseError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse one raw XHProf run into an edge map
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `raw` - Raw JSON document of one run
///
/// # Errors
/// * `ParseError::InvalidFormat` - Document is not an object, or an entry is
///   not a cost object
pub fn parse_pair_call_map(raw: &serde_json::Value) -> Result<PairCallMap, ParseError> {
    let obj = raw.as_object().ok_or_else(|| {
        ParseError::InvalidFormat(format!(
            "expected an object of edge costs, found {}",
            json_kind(raw)
        ))
    })?;

    let mut map = PairCallMap::new();

    for (name, value) in obj {
        if !value.is_object() {
            return Err(ParseError::InvalidFormat(format!(
                "edge {} has a non-object cost ({})",
                name,
                json_kind(value)
            )));
        }

        let sample: PairCall = serde_json::from_value(value.clone())?;
        map.get_or_create(name).add(&sample);
    }

    debug!("Parsed {} edges", map.len());

    Ok(map)
}

/// Parse a raw XHProf run from a JSON string
pub fn parse_pair_call_map_str(raw: &str) -> Result<PairCallMap, ParseError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    parse_pair_call_map(&value)
}

/// Read and parse a raw XHProf run from disk
pub fn read_pair_call_map(path: impl AsRef<Path>) -> Result<PairCallMap, ParseError> {
    let path = path.as_ref();

    info!("Reading raw profile: {}", path.display());

    let file = File::open(path)?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;

    parse_pair_call_map(&value)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
