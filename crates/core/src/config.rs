use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Search configuration for one discovery pass, consumed read-only.
///
/// In the reference deployment these values come from the owning
/// registry's environment configuration; the engine only sees the
/// already-parsed form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directories to search, in priority order.
    pub search_paths: Vec<PathBuf>,
    /// Extensions (without the dot) that qualify a file for discovery.
    pub allowed_extensions: HashSet<String>,
    /// Whether to descend into symlinked directories.
    pub follow_symlinks: bool,
}

impl DiscoveryConfig {
    /// A leading dot on an extension is tolerated and stripped, so
    /// `".oso"` and `"oso"` configure the same engine. No case folding
    /// is applied; matching stays exact.
    pub fn new<P, E>(search_paths: P, allowed_extensions: E, follow_symlinks: bool) -> Self
    where
        P: IntoIterator<Item = PathBuf>,
        E: IntoIterator<Item = String>,
    {
        Self {
            search_paths: search_paths.into_iter().collect(),
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|ext| ext.strip_prefix('.').map(str::to_owned).unwrap_or(ext))
                .collect(),
            follow_symlinks,
        }
    }
}
