use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;
use xhprof_studio::aggregator::{PairCall, PairCallMap};
use xhprof_studio::output::{read_profile, validate_path, write_profile};
use xhprof_studio::parser::Metric;

fn flattened() -> xhprof_studio::parser::Profile {
    let mut map = PairCallMap::new();
    map.insert(
        "main()",
        PairCall {
            count: 1,
            wall_time: 10.0,
            cpu_time: 9.0,
            ..PairCall::default()
        },
    );
    map.insert(
        "main()==>foo",
        PairCall {
            count: 1,
            wall_time: 4.0,
            cpu_time: 2.0,
            ..PairCall::default()
        },
    );
    let mut profile = map.flatten();
    profile.sort_by(Metric::WallTime);
    profile
}

#[test]
fn test_write_and_read_profile() {
    let profile = flattened();
    let temp_file = NamedTempFile::new().unwrap();

    write_profile(&profile, temp_file.path()).unwrap();
    let loaded = read_profile(temp_file.path()).unwrap();

    assert_eq!(loaded.calls, profile.calls);
    assert_eq!(loaded.main, profile.main);
    assert_eq!(loaded.generated_at, profile.generated_at);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_read_profile_missing_file() {
    assert!(read_profile("/nonexistent/profile.json").is_err());
}
