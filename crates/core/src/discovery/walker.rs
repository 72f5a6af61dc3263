//! Deterministic recursive enumeration of candidate node files.

use crate::model::DiscoveredUri;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Walks `search_paths` in order and returns every file whose extension
/// is in `allowed_extensions`, as `(uri, resolved_uri)` pairs.
///
/// Traversal order is stable across calls with the same inputs: roots in
/// the given order, then lexicographic by file name among siblings at
/// each directory level. Unreadable directories are skipped per entry,
/// and a root that does not name a directory contributes zero results;
/// neither aborts the walk. With `follow_symlinks` set, symlinked
/// directories are descended and cycles are detected and skipped.
pub fn discover_files(
    search_paths: &[PathBuf],
    allowed_extensions: &HashSet<String>,
    follow_symlinks: bool,
) -> Vec<DiscoveredUri> {
    let mut discovered = Vec::new();

    for root in search_paths {
        if !root.is_dir() {
            debug!(root = %root.display(), "skipping search path: not a readable directory");
            continue;
        }

        let walk = WalkDir::new(root)
            .follow_links(follow_symlinks)
            .sort_by_file_name();

        for entry in walk {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // Permission errors, race-deleted directories and
                    // symlink loops all land here; none are fatal.
                    debug!(error = %err, "skipping unreadable walk entry");
                    continue;
                }
            };
            if !is_file(&entry) {
                continue;
            }
            if !has_allowed_extension(entry.path(), allowed_extensions) {
                continue;
            }

            let uri = entry.into_path();
            let resolved_uri = fs::canonicalize(&uri).unwrap_or_else(|_| uri.clone());
            discovered.push(DiscoveredUri { uri, resolved_uri });
        }
    }

    discovered
}

/// Symlinks to files count as files even when directory symlinks are not
/// being followed; `follow_links` only controls descent.
fn is_file(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink()
        && fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false)
}

/// The extension is the substring after the final `.` of the base name;
/// matching is exact, with no case folding.
fn has_allowed_extension(path: &Path, allowed: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| allowed.contains(ext))
}
