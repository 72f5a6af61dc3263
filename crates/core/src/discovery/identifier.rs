//! Splits node identifiers into family, name and version.
//!
//! Node definition files are named `<family>[_<variant>...][_<major>[_<minor>]]`:
//! the leading underscore-delimited token groups related variants into a
//! family, and up to two trailing purely-numeric tokens denote the version.
//! A numeric token anywhere else makes the identifier ambiguous, and the
//! whole identifier is rejected rather than misread as unversioned.

use crate::model::Version;

/// Outcome of splitting a well-formed node identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIdentifier {
    pub family: String,
    pub name: String,
    pub version: Version,
}

/// Parses a bare identifier (a base file name, no directory and no
/// extension) into family, name and version.
///
/// Returns `None` when the identifier does not follow the naming
/// convention: an empty identifier, an empty token (leading, trailing or
/// doubled underscore), or a purely numeric token outside the trailing
/// version position. Pure function; no filesystem access.
pub fn split_node_identifier(identifier: &str) -> Option<SplitIdentifier> {
    if identifier.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = identifier.split('_').collect();
    if tokens.iter().any(|t| t.is_empty()) {
        return None;
    }

    // Strip a trailing version suffix. One numeric token is the major
    // version; two numeric tokens are major and minor, with the two-token
    // reading superseding the one-token one. The family token never
    // participates in the suffix.
    let mut end = tokens.len();
    let mut version = Version::default();
    if end >= 2 {
        if let Some(last) = decimal_value(tokens[end - 1]) {
            let prev = if end >= 3 {
                decimal_value(tokens[end - 2])
            } else {
                None
            };
            if let Some(major) = prev {
                version = Version::new(major, last);
                end -= 2;
            } else {
                version = Version::new(last, 0);
                end -= 1;
            }
        }
    }

    // A stray numeric token outside the version position means a
    // malformed versioned name.
    if tokens[1..end].iter().any(|t| is_decimal(t)) {
        return None;
    }

    Some(SplitIdentifier {
        family: tokens[0].to_string(),
        name: tokens[..end].join("_"),
        version,
    })
}

/// Non-empty and every character `0`-`9`; no sign, no whitespace.
fn is_decimal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn decimal_value(token: &str) -> Option<u32> {
    if is_decimal(token) {
        token.parse().ok()
    } else {
        None
    }
}
