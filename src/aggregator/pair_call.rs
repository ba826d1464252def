//! Cost metrics carried by one caller→callee edge.
//!
//! A `PairCall` is the unit of accumulation: trace ingestion adds samples
//! into it, averaging adds whole runs into it and then scales it down.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Aggregated cost of one edge
///
/// Field names on the wire follow the XHProf raw format
/// (`ct`, `wt`, `cpu`, `mu`, `pmu`). No field is validated: negative values
/// show up legitimately once exclusive costs are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PairCall {
    /// Number of invocations represented
    #[serde(rename = "ct", default)]
    pub count: i64,

    /// Wall clock time
    #[serde(rename = "wt", default)]
    pub wall_time: f64,

    /// CPU time
    #[serde(rename = "cpu", default)]
    pub cpu_time: f64,

    /// Memory usage delta
    #[serde(rename = "mu", default)]
    pub memory: f64,

    /// Peak memory usage delta
    #[serde(rename = "pmu", default)]
    pub peak_memory: f64,
}

impl PairCall {
    /// Create a zeroed cost vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every metric of `other` into `self`
    ///
    /// Returns `self` so calls can be chained:
    /// `total.add(&a).add(&b)`.
    pub fn add(&mut self, other: &PairCall) -> &mut Self {
        self.count += other.count;
        self.wall_time += other.wall_time;
        self.cpu_time += other.cpu_time;
        self.memory += other.memory;
        self.peak_memory += other.peak_memory;

        self
    }

    /// Divide every metric by `divisor`
    ///
    /// `count` uses truncating integer division, the cost fields use
    /// floating point division.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn divide(&mut self, divisor: u64) -> &mut Self {
        let d = divisor as f64;

        self.count /= divisor as i64;
        self.wall_time /= d;
        self.cpu_time /= d;
        self.memory /= d;
        self.peak_memory /= d;

        self
    }
}

impl AddAssign<&PairCall> for PairCall {
    fn add_assign(&mut self, other: &PairCall) {
        self.add(other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(count: i64, wall_time: f64) -> PairCall {
        PairCall {
            count,
            wall_time,
            cpu_time: wall_time / 2.0,
            memory: 128.0,
            peak_memory: 256.0,
        }
    }

    #[test]
    fn test_add_accumulates_all_fields() {
        let mut total = sample(1, 10.0);
        total.add(&sample(2, 4.0));

        assert_eq!(total.count, 3);
        assert_eq!(total.wall_time, 14.0);
        assert_eq!(total.cpu_time, 7.0);
        assert_eq!(total.memory, 256.0);
        assert_eq!(total.peak_memory, 512.0);
    }

    #[test]
    fn test_add_chains() {
        let mut total = PairCall::new();
        total.add(&sample(1, 1.0)).add(&sample(1, 2.0)).add(&sample(1, 3.0));

        assert_eq!(total.count, 3);
        assert_eq!(total.wall_time, 6.0);
    }

    #[test]
    fn test_divide_by_one_is_identity() {
        let mut total = sample(7, 3.5);
        total.add(&sample(5, 1.25));
        let before = total;

        total.divide(1);
        assert_eq!(total, before);
    }

    #[test]
    fn test_divide_truncates_count() {
        let mut pc = sample(5, 15.0);
        pc.divide(2);

        assert_eq!(pc.count, 2);
        assert_eq!(pc.wall_time, 7.5);
        assert_eq!(pc.memory, 64.0);
    }

    #[test]
    #[should_panic]
    fn test_divide_by_zero_panics() {
        sample(1, 1.0).divide(0);
    }

    #[test]
    fn test_add_assign() {
        let mut pc = sample(1, 2.0);
        pc += &sample(1, 2.0);
        assert_eq!(pc.count, 2);
        assert_eq!(pc.wall_time, 4.0);
    }

    #[test]
    fn test_deserialize_xhprof_fields() {
        let pc: PairCall =
            serde_json::from_str(r#"{"ct": 2, "wt": 40, "cpu": 30, "mu": 1024, "pmu": 0}"#).unwrap();
        assert_eq!(pc.count, 2);
        assert_eq!(pc.wall_time, 40.0);
        assert_eq!(pc.cpu_time, 30.0);
        assert_eq!(pc.memory, 1024.0);

        // Missing metrics default to zero
        let partial: PairCall = serde_json::from_str(r#"{"ct": 1, "wt": 5}"#).unwrap();
        assert_eq!(partial.cpu_time, 0.0);
        assert_eq!(partial.peak_memory, 0.0);
    }
}
