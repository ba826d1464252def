//! Edge key codec.
//!
//! XHProf identifies an edge by a single string: `"parent==>child"`, or the
//! bare child name for a root call (no known caller). Function names must
//! not contain the separator, otherwise decoding is ambiguous.

use crate::utils::config::PAIR_SEPARATOR;
use std::fmt;

/// Borrowed structural view of an edge key
///
/// An empty `parent` marks a root call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey<'a> {
    pub parent: &'a str,
    pub child: &'a str,
}

impl<'a> EdgeKey<'a> {
    pub fn new(parent: &'a str, child: &'a str) -> Self {
        Self { parent, child }
    }

    /// Decode an encoded key (see [`parse_pair_name`])
    pub fn parse(name: &'a str) -> Self {
        let (parent, child) = parse_pair_name(name);
        Self { parent, child }
    }

    /// True if the edge has no known caller
    pub fn is_root(&self) -> bool {
        self.parent.is_empty()
    }
}

impl fmt::Display for EdgeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parent.is_empty() {
            f.write_str(self.child)
        } else if self.child.is_empty() {
            f.write_str(self.parent)
        } else {
            write!(f, "{}{}{}", self.parent, PAIR_SEPARATOR, self.child)
        }
    }
}

/// Encode a `(parent, child)` pair into an edge key
///
/// Returns `child` if `parent` is empty, `parent` if `child` is empty,
/// otherwise `parent==>child`.
pub fn pair_name(parent: &str, child: &str) -> String {
    EdgeKey::new(parent, child).to_string()
}

/// Decode an edge key into `(parent, child)`
///
/// Splits on the first separator. A key without a separator is a root call
/// and decodes to `("", key)`.
pub fn parse_pair_name(name: &str) -> (&str, &str) {
    name.split_once(PAIR_SEPARATOR).unwrap_or(("", name))
}
