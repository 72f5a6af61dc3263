//! Discovery engine: walks the configured search paths and turns each
//! conforming node definition file into a [`DiscoveryResult`].

pub mod identifier;
pub mod walker;

use crate::config::DiscoveryConfig;
use crate::model::{DiscoveredUri, DiscoveryResult};
use identifier::split_node_identifier;
use tracing::debug;

/// Runs one full discovery pass over `config`'s search paths.
///
/// Every file reported by the walker whose base name parses under the
/// naming convention yields one record, in walker order. A file with a
/// non-conforming name is not an error; it is simply not a discoverable
/// node and is left out of the sequence. No deduplication happens across
/// directories: the same identifier under two search paths yields two
/// records.
///
/// One call performs one complete synchronous traversal and returns a
/// fully materialized sequence; no state is shared between calls, so
/// concurrent passes over the same directories are safe.
pub fn discover_nodes(config: &DiscoveryConfig) -> Vec<DiscoveryResult> {
    walker::discover_files(
        &config.search_paths,
        &config.allowed_extensions,
        config.follow_symlinks,
    )
    .into_iter()
    .filter_map(assemble)
    .collect()
}

fn assemble(location: DiscoveredUri) -> Option<DiscoveryResult> {
    let identifier = location.uri.file_stem().and_then(|s| s.to_str())?.to_string();

    let Some(split) = split_node_identifier(&identifier) else {
        debug!(
            uri = %location.uri.display(),
            "file name does not follow the node naming convention; skipping"
        );
        return None;
    };

    Some(DiscoveryResult {
        identifier,
        name: split.name,
        family: split.family,
        version: split.version,
        uri: location.uri,
        resolved_uri: location.resolved_uri,
    })
}
