//! Configuration and constants for the CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Separator between caller and callee in an edge key ("parent==>child").
/// Function names must not contain it.
pub const PAIR_SEPARATOR: &str = "==>";

/// Symbol name of the program entry record
pub const MAIN_SYMBOL: &str = "main()";

/// Default number of rows shown in text reports
pub const DEFAULT_TOP_N: usize = 20;
