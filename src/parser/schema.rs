//! Output schema definitions for flattened profile data.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{PairCall, SymbolEntry, SymbolTable};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Top-level profile structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when profile was generated
    pub generated_at: String,

    /// Program entry record, when `main()` was sampled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<Call>,

    /// One record per function
    pub calls: Vec<Call>,
}

/// Inclusive and exclusive cost of one function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Call {
    /// Function name
    pub name: String,

    /// Number of invocations
    pub count: i64,

    pub wall_time: f64,
    pub excl_wall_time: f64,

    pub cpu_time: f64,
    pub excl_cpu_time: f64,

    pub memory: f64,
    pub excl_memory: f64,

    pub peak_memory: f64,
    pub excl_peak_memory: f64,
}

impl Call {
    /// Value of one report column
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Count => self.count as f64,
            Metric::WallTime => self.wall_time,
            Metric::ExclWallTime => self.excl_wall_time,
            Metric::CpuTime => self.cpu_time,
            Metric::ExclCpuTime => self.excl_cpu_time,
            Metric::Memory => self.memory,
            Metric::ExclMemory => self.excl_memory,
            Metric::PeakMemory => self.peak_memory,
            Metric::ExclPeakMemory => self.excl_peak_memory,
        }
    }
}

impl SymbolEntry for Call {
    fn new(name: &str) -> Self {
        Call {
            name: name.to_string(),
            ..Call::default()
        }
    }

    fn add_inclusive(&mut self, cost: &PairCall) {
        self.count += cost.count;

        self.wall_time += cost.wall_time;
        self.excl_wall_time += cost.wall_time;

        self.cpu_time += cost.cpu_time;
        self.excl_cpu_time += cost.cpu_time;

        self.memory += cost.memory;
        self.excl_memory += cost.memory;

        self.peak_memory += cost.peak_memory;
        self.excl_peak_memory += cost.peak_memory;
    }

    fn subtract_exclusive(&mut self, cost: &PairCall) {
        self.excl_wall_time -= cost.wall_time;
        self.excl_cpu_time -= cost.cpu_time;
        self.excl_memory -= cost.memory;
        self.excl_peak_memory -= cost.peak_memory;
    }
}

/// Sortable report column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Count,
    WallTime,
    ExclWallTime,
    CpuTime,
    ExclCpuTime,
    Memory,
    ExclMemory,
    PeakMemory,
    ExclPeakMemory,
}

impl Metric {
    /// Short column name, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Count => "ct",
            Metric::WallTime => "wt",
            Metric::ExclWallTime => "excl_wt",
            Metric::CpuTime => "cpu",
            Metric::ExclCpuTime => "excl_cpu",
            Metric::Memory => "mu",
            Metric::ExclMemory => "excl_mu",
            Metric::PeakMemory => "pmu",
            Metric::ExclPeakMemory => "excl_pmu",
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ct" | "count" => Ok(Metric::Count),
            "wt" | "wall_time" => Ok(Metric::WallTime),
            "excl_wt" => Ok(Metric::ExclWallTime),
            "cpu" | "cpu_time" => Ok(Metric::CpuTime),
            "excl_cpu" => Ok(Metric::ExclCpuTime),
            "mu" | "memory" => Ok(Metric::Memory),
            "excl_mu" => Ok(Metric::ExclMemory),
            "pmu" | "peak_memory" => Ok(Metric::PeakMemory),
            "excl_pmu" => Ok(Metric::ExclPeakMemory),
            other => Err(format!("unknown metric: {}", other)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Profile {
    /// Build a profile from flattened records, stamped with the current time
    pub fn from_symbols(table: SymbolTable<Call>) -> Self {
        let main = table.main().cloned();

        Profile {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            main,
            calls: table.into_entries(),
        }
    }

    /// Sort calls by `metric`, largest first; ties broken by name
    pub fn sort_by(&mut self, metric: Metric) {
        self.calls.sort_by(|a, b| compare_desc(a, b, metric));
    }

    /// The `n` most expensive calls by `metric`
    pub fn top(&self, n: usize, metric: Metric) -> Vec<&Call> {
        let mut calls: Vec<&Call> = self.calls.iter().collect();
        calls.sort_by(|a, b| compare_desc(a, b, metric));
        calls.truncate(n);
        calls
    }

    pub fn find(&self, name: &str) -> Option<&Call> {
        self.calls.iter().find(|c| c.name == name)
    }
}

/// Descending by `metric`, then ascending by name. NaN compares equal.
fn compare_desc(a: &Call, b: &Call, metric: Metric) -> Ordering {
    b.metric(metric)
        .partial_cmp(&a.metric(metric))
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::PairCallMap;

    fn call(name: &str, wall_time: f64, excl_wall_time: f64) -> Call {
        Call {
            name: name.to_string(),
            count: 1,
            wall_time,
            excl_wall_time,
            ..Call::default()
        }
    }

    fn create_test_profile() -> Profile {
        Profile {
            version: SCHEMA_VERSION.to_string(),
            generated_at: "2024-01-01T00:00:00Z".to_string(),
            main: None,
            calls: vec![
                call("b", 10.0, 1.0),
                call("a", 10.0, 8.0),
                call("c", 30.0, 2.0),
            ],
        }
    }

    #[test]
    fn test_call_tracks_inclusive_and_exclusive() {
        let mut c = <Call as SymbolEntry>::new("main()");
        c.add_inclusive(&PairCall {
            count: 1,
            wall_time: 10.0,
            cpu_time: 8.0,
            memory: 100.0,
            peak_memory: 200.0,
        });
        c.subtract_exclusive(&PairCall {
            count: 1,
            wall_time: 4.0,
            cpu_time: 3.0,
            memory: 40.0,
            peak_memory: 50.0,
        });

        assert_eq!(c.name, "main()");
        assert_eq!(c.count, 1);
        assert_eq!(c.wall_time, 10.0);
        assert_eq!(c.excl_wall_time, 6.0);
        assert_eq!(c.cpu_time, 8.0);
        assert_eq!(c.excl_cpu_time, 5.0);
        assert_eq!(c.excl_memory, 60.0);
        assert_eq!(c.excl_peak_memory, 150.0);
    }

    #[test]
    fn test_sort_by_metric() {
        let mut profile = create_test_profile();

        profile.sort_by(Metric::WallTime);
        let names: Vec<&str> = profile.calls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);

        profile.sort_by(Metric::ExclWallTime);
        assert_eq!(profile.calls[0].name, "a");
    }

    #[test]
    fn test_top() {
        let profile = create_test_profile();
        let top = profile.top(2, Metric::WallTime);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "c");
        assert_eq!(top[1].name, "a");
    }

    #[test]
    fn test_metric_from_str() {
        assert_eq!("wt".parse::<Metric>().unwrap(), Metric::WallTime);
        assert_eq!("EXCL_CPU".parse::<Metric>().unwrap(), Metric::ExclCpuTime);
        assert!("bogus".parse::<Metric>().is_err());
        assert_eq!(Metric::ExclPeakMemory.to_string(), "excl_pmu");
    }

    #[test]
    fn test_flatten_to_profile() {
        let mut map = PairCallMap::new();
        map.insert(
            "main()",
            PairCall {
                count: 1,
                wall_time: 10.0,
                ..PairCall::default()
            },
        );
        map.insert(
            "main()==>foo",
            PairCall {
                count: 1,
                wall_time: 4.0,
                ..PairCall::default()
            },
        );

        let profile = map.flatten();
        assert_eq!(profile.version, SCHEMA_VERSION);
        assert_eq!(profile.calls.len(), 2);

        let main = profile.main.as_ref().unwrap();
        assert_eq!(main.wall_time, 10.0);
        assert_eq!(main.excl_wall_time, 6.0);

        let foo = profile.find("foo").unwrap();
        assert_eq!(foo.wall_time, 4.0);
        assert_eq!(foo.excl_wall_time, 4.0);
    }
}
