//! Edge-keyed cost map.
//!
//! One `PairCallMap` holds everything sampled during one profiled run:
//! encoded edge key → accumulated [`PairCall`]. It is the input to
//! flattening, nearest family queries and run averaging.
//!
//! Not synchronized. Accumulating into one map from several sources needs an
//! external lock; the intended pattern is one map per run, combined later with
//! [`avg_pair_call_maps`](super::average::avg_pair_call_maps).

use super::edge_key::pair_name;
use super::pair_call::PairCall;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{Iter, IterMut};
use std::collections::HashMap;

/// Mapping from encoded edge key to cost
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairCallMap {
    calls: HashMap<String, PairCall>,
}

impl PairCallMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the entry for `name`, inserting a zeroed one if absent
    pub fn get_or_create(&mut self, name: &str) -> &mut PairCall {
        self.calls.entry(name.to_string()).or_default()
    }

    /// Accumulate one sample of the `parent → child` edge
    ///
    /// Pass an empty `parent` for a root call.
    pub fn record(&mut self, parent: &str, child: &str, sample: &PairCall) -> &mut PairCall {
        let key = pair_name(parent, child);
        self.get_or_create(&key).add(sample)
    }

    /// Insert or replace the entry for `name`
    pub fn insert(&mut self, name: impl Into<String>, call: PairCall) -> Option<PairCall> {
        self.calls.insert(name.into(), call)
    }

    pub fn get(&self, name: &str) -> Option<&PairCall> {
        self.calls.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.calls.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Iterate over `(key, cost)` pairs in unspecified order
    pub fn iter(&self) -> Iter<'_, String, PairCall> {
        self.calls.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, String, PairCall> {
        self.calls.iter_mut()
    }
}

impl<'a> IntoIterator for &'a PairCallMap {
    type Item = (&'a String, &'a PairCall);
    type IntoIter = Iter<'a, String, PairCall>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.iter()
    }
}

impl FromIterator<(String, PairCall)> for PairCallMap {
    fn from_iter<I: IntoIterator<Item = (String, PairCall)>>(iter: I) -> Self {
        Self {
            calls: iter.into_iter().collect(),
        }
    }
}
