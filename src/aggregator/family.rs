//! Nearest family query: immediate callers and callees of one function.

use super::edge_key::parse_pair_name;
use super::pair_call_map::PairCallMap;
use log::debug;
use serde::{Deserialize, Serialize};

/// Callers and callees one hop away from a function
///
/// Only `count` and `wall_time` are aggregated into the per-neighbor
/// entries; the other metrics stay zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NearestFamily {
    /// Callee name → aggregated cost
    pub children: PairCallMap,

    /// Caller name → aggregated cost
    pub parents: PairCallMap,

    /// Invocations summed across all children
    pub children_count: i64,

    /// Invocations summed across all parents
    pub parents_count: i64,
}

impl NearestFamily {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Compute the nearest family of `function` from an edge map
///
/// A self-recursive edge (`f ==> f`) counts both as a child and as a parent.
pub fn compute_nearest_family(map: &PairCallMap, function: &str) -> NearestFamily {
    let mut family = NearestFamily::new();

    for (name, info) in map {
        let (parent, child) = parse_pair_name(name);

        if parent == function {
            let c = family.children.get_or_create(child);
            c.wall_time += info.wall_time;
            c.count += info.count;
            family.children_count += info.count;
        }

        if child == function && !parent.is_empty() {
            let p = family.parents.get_or_create(parent);
            p.wall_time += info.wall_time;
            p.count += info.count;
            family.parents_count += info.count;
        }
    }

    debug!(
        "Nearest family of {}: {} children, {} parents",
        function,
        family.children.len(),
        family.parents.len()
    );

    family
}

impl PairCallMap {
    /// See [`compute_nearest_family`]
    pub fn nearest_family(&self, function: &str) -> NearestFamily {
        compute_nearest_family(self, function)
    }
}
