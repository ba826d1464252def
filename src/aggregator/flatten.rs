//! Flatten edge costs into per-function inclusive/exclusive costs.
//!
//! Every edge `parent → child` contributes its cost twice:
//! - as inclusive cost of `child`
//! - subtracted from the exclusive cost of `parent`
//!
//! A function's exclusive cost therefore ends up as its inclusive cost minus
//! the inclusive cost of everything it called, without a second pass over the
//! graph. Root edges (no caller) only contribute the first half.

use super::edge_key::parse_pair_name;
use super::pair_call::PairCall;
use super::pair_call_map::PairCallMap;
use crate::parser::schema::{Call, Profile};
use crate::utils::config::MAIN_SYMBOL;
use log::debug;
use std::collections::hash_map::Values;
use std::collections::HashMap;

/// Per-function record the flattener accumulates into
///
/// Implementors track inclusive and exclusive totals separately:
/// `add_inclusive` must raise both, `subtract_exclusive` only lowers the
/// exclusive total.
pub trait SymbolEntry {
    /// Create an empty record for function `name`
    fn new(name: &str) -> Self;

    /// Count `cost` as inclusive (and, until children are subtracted,
    /// exclusive) cost of this function
    fn add_inclusive(&mut self, cost: &PairCall);

    /// Remove a callee's cost from this function's exclusive cost
    fn subtract_exclusive(&mut self, cost: &PairCall);
}

/// Flattened records keyed by function name
#[derive(Debug, Clone)]
pub struct SymbolTable<E> {
    symbols: HashMap<String, E>,
}

impl<E: SymbolEntry> SymbolTable<E> {
    fn entry(&mut self, name: &str) -> &mut E {
        self.symbols
            .entry(name.to_string())
            .or_insert_with(|| E::new(name))
    }
}

impl<E> SymbolTable<E> {
    pub fn get(&self, name: &str) -> Option<&E> {
        self.symbols.get(name)
    }

    /// The program entry record (`main()`), if it was sampled
    pub fn main(&self) -> Option<&E> {
        self.symbols.get(MAIN_SYMBOL)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Records in unspecified order
    pub fn entries(&self) -> Values<'_, String, E> {
        self.symbols.values()
    }

    /// Consume the table, returning records in unspecified order
    pub fn into_entries(self) -> Vec<E> {
        self.symbols.into_values().collect()
    }
}

/// Derive per-function records from an edge map
///
/// **Public** - generic over the record type so callers can plug in their own
/// report shape; [`PairCallMap::flatten`] uses [`Call`].
pub fn flatten_symbols<E: SymbolEntry>(map: &PairCallMap) -> SymbolTable<E> {
    let mut table: SymbolTable<E> = SymbolTable {
        symbols: HashMap::new(),
    };

    for (name, cost) in map {
        let (parent, child) = parse_pair_name(name);

        table.entry(child).add_inclusive(cost);

        if parent.is_empty() {
            continue;
        }

        table.entry(parent).subtract_exclusive(cost);
    }

    debug!(
        "Flattened {} edges into {} symbols",
        map.len(),
        table.len()
    );

    table
}

impl PairCallMap {
    /// Flatten into a [`Profile`] of [`Call`] records
    ///
    /// Order of `calls` is unspecified; use [`Profile::sort_by`] for a
    /// deterministic report.
    pub fn flatten(&self) -> Profile {
        Profile::from_symbols(flatten_symbols::<Call>(self))
    }
}
