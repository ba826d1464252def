//! Average edge maps across repeated runs of the same program.

use super::pair_call_map::PairCallMap;
use log::debug;
use std::borrow::Cow;

/// Elementwise average of several edge maps
///
/// **Public** - main entry point for combining runs
///
/// # Arguments
/// * `maps` - One edge map per profiled run
///
/// # Returns
/// * A single input is returned borrowed, not copied. Call
///   `into_owned()` on the result to get an independent map.
/// * Otherwise a fresh map where every key holds the sum over all inputs
///   divided by `maps.len()`. A key missing from some runs counts as zero
///   for those runs.
/// * An empty slice yields an empty map.
pub fn avg_pair_call_maps(maps: &[PairCallMap]) -> Cow<'_, PairCallMap> {
    if let [only] = maps {
        return Cow::Borrowed(only);
    }

    let mut res = PairCallMap::new();

    for m in maps {
        for (name, info) in m {
            res.get_or_create(name).add(info);
        }
    }

    let runs = maps.len() as u64;
    for (_, info) in res.iter_mut() {
        info.divide(runs);
    }

    debug!("Averaged {} runs into {} edges", maps.len(), res.len());

    Cow::Owned(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::pair_call::PairCall;

    fn map_with(name: &str, count: i64, wall_time: f64) -> PairCallMap {
        let mut map = PairCallMap::new();
        map.insert(
            name,
            PairCall {
                count,
                wall_time,
                ..PairCall::default()
            },
        );
        map
    }

    #[test]
    fn test_average_two_runs() {
        let maps = vec![map_with("X", 2, 10.0), map_with("X", 4, 20.0)];

        let avg = avg_pair_call_maps(&maps);
        let x = avg.get("X").unwrap();
        assert_eq!(x.count, 3);
        assert_eq!(x.wall_time, 15.0);
    }

    #[test]
    fn test_average_truncates_count() {
        let maps = vec![map_with("X", 2, 1.0), map_with("X", 3, 2.0)];

        let avg = avg_pair_call_maps(&maps);
        assert_eq!(avg.get("X").unwrap().count, 2);
        assert_eq!(avg.get("X").unwrap().wall_time, 1.5);
    }

    #[test]
    fn test_missing_key_counts_as_zero() {
        let maps = vec![
            map_with("X", 4, 8.0),
            map_with("Y", 1, 1.0),
            map_with("Y", 1, 1.0),
            map_with("Y", 1, 1.0),
        ];

        let avg = avg_pair_call_maps(&maps);
        assert_eq!(avg.get("X").unwrap().count, 1);
        assert_eq!(avg.get("X").unwrap().wall_time, 2.0);
        assert_eq!(avg.get("Y").unwrap().wall_time, 0.75);
    }

    #[test]
    fn test_single_run_is_borrowed() {
        let maps = vec![map_with("X", 5, 5.0)];

        let avg = avg_pair_call_maps(&maps);
        assert!(matches!(avg, Cow::Borrowed(_)));
        assert!(std::ptr::eq(avg.as_ref(), &maps[0]));
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let maps = vec![map_with("X", 2, 10.0), map_with("X", 4, 20.0)];
        let before = maps.clone();

        let _ = avg_pair_call_maps(&maps);
        assert_eq!(maps, before);
    }

    #[test]
    fn test_empty_input() {
        let avg = avg_pair_call_maps(&[]);
        assert!(avg.is_empty());
    }
}
