use super::version::Version;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file location reported by the path walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredUri {
    /// The path as encountered during traversal.
    pub uri: PathBuf,
    /// Canonical absolute path with symlinks resolved and relative
    /// segments normalized. Equals `uri` when resolution changes nothing
    /// or is not possible.
    pub resolved_uri: PathBuf,
}

/// One discovered node definition file, ready for registry indexing.
///
/// Records are built fresh on every discovery pass and handed wholesale
/// to the caller; the engine keeps no reference to them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    /// Raw base file name, before the extension and before any parsing.
    /// Unique within one directory, not across the whole sequence: the
    /// same identifier under two search paths yields two records.
    pub identifier: String,
    /// Identifier with any trailing version suffix removed.
    pub name: String,
    /// First underscore-delimited token of `name`, grouping related
    /// versioned variants.
    pub family: String,
    /// Parsed version, or the default when no suffix was present.
    pub version: Version,
    pub uri: PathBuf,
    pub resolved_uri: PathBuf,
}
