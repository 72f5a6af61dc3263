use nodescope_core::{discover_files, discover_nodes, DiscoveryConfig, Version};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    File::create(path).unwrap();
}

/// Builds the reference search tree: nodes at the top level, nodes in
/// nested directories, the same node name under two sibling directories,
/// a ladder of versioned Primvar variants, and `.osl` files that must be
/// ignored because they are outside the allowed extension set.
fn reference_tree() -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();

    touch(&root.join("TestNodeARGS.args"));
    touch(&root.join("TestNodeOSL.oso"));
    touch(&root.join("TestNodeOSL.osl"));
    touch(&root.join("nested/deeper/NestedTestARGS.args"));
    touch(&root.join("nested/deeper/NestedTestOSL.oso"));
    touch(&root.join("nested/deeper/NestedTestOSL.osl"));
    touch(&root.join("alpha/TestNodeSameName.oso"));
    touch(&root.join("beta/TestNodeSameName.oso"));

    for name in [
        "Primvar",
        "Primvar_float",
        "Primvar_float_3",
        "Primvar_float_3_4",
        "Primvar_float2",
        "Primvar_float2_3",
        "Primvar_float2_3_4",
    ] {
        touch(&root.join(format!("primvars/{name}.oso")));
    }

    temp
}

fn reference_config(root: &Path) -> DiscoveryConfig {
    DiscoveryConfig::new(
        vec![root.to_path_buf()],
        vec!["oso".to_string(), "args".to_string()],
        true,
    )
}

#[test]
fn test_discovers_reference_tree() {
    let temp = reference_tree();
    let results = discover_nodes(&reference_config(temp.path()));

    assert_eq!(results.len(), 13);

    let discovered: Vec<(&str, &str, &str, Version)> = results
        .iter()
        .map(|r| {
            (
                r.identifier.as_str(),
                r.name.as_str(),
                r.family.as_str(),
                r.version,
            )
        })
        .collect();

    let expected = [
        ("TestNodeARGS", "TestNodeARGS", "TestNodeARGS", Version::default()),
        ("TestNodeOSL", "TestNodeOSL", "TestNodeOSL", Version::default()),
        ("NestedTestARGS", "NestedTestARGS", "NestedTestARGS", Version::default()),
        ("NestedTestOSL", "NestedTestOSL", "NestedTestOSL", Version::default()),
        ("TestNodeSameName", "TestNodeSameName", "TestNodeSameName", Version::default()),
        ("Primvar", "Primvar", "Primvar", Version::default()),
        ("Primvar_float", "Primvar_float", "Primvar", Version::default()),
        ("Primvar_float_3", "Primvar_float", "Primvar", Version::new(3, 0)),
        ("Primvar_float_3_4", "Primvar_float", "Primvar", Version::new(3, 4)),
        ("Primvar_float2", "Primvar_float2", "Primvar", Version::default()),
        ("Primvar_float2_3", "Primvar_float2", "Primvar", Version::new(3, 0)),
        ("Primvar_float2_3_4", "Primvar_float2", "Primvar", Version::new(3, 4)),
    ];
    for entry in expected {
        assert!(discovered.contains(&entry), "missing {entry:?}");
    }

    // The same name under two sibling directories yields two records.
    let same_name = results
        .iter()
        .filter(|r| r.identifier == "TestNodeSameName")
        .count();
    assert_eq!(same_name, 2);

    // Nothing with a disallowed extension slipped through.
    assert!(results.iter().all(|r| {
        let ext = r.uri.extension().unwrap().to_str().unwrap();
        ext == "oso" || ext == "args"
    }));
}

#[test]
fn test_discovery_and_raw_walk_agree() {
    let temp = reference_tree();
    let config = reference_config(temp.path());

    let results = discover_nodes(&config);
    let uris = discover_files(
        &config.search_paths,
        &config.allowed_extensions,
        config.follow_symlinks,
    );

    // Every reference file name parses, so the two surfaces enumerate
    // the same files in the same order.
    assert_eq!(results.len(), uris.len());
    for (result, location) in results.iter().zip(uris.iter()) {
        assert_eq!(result.uri, location.uri);
        assert_eq!(result.resolved_uri, location.resolved_uri);
    }
}

#[test]
fn test_repeated_passes_are_identical() {
    let temp = reference_tree();
    let config = reference_config(temp.path());

    let first = discover_nodes(&config);
    let second = discover_nodes(&config);
    assert_eq!(first, second);
}

#[test]
fn test_non_conforming_names_are_silently_excluded() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    touch(&root.join("Good_node.oso"));
    touch(&root.join("Primvar_4_nonNumber.oso"));
    touch(&root.join("Primvar_float2_3_nonNumber.oso"));
    touch(&root.join("_leading.oso"));
    touch(&root.join("double__under.oso"));

    let config = reference_config(root);
    let results = discover_nodes(&config);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].identifier, "Good_node");
    assert_eq!(results[0].family, "Good");

    // The walker still reports all five; exclusion happens at assembly.
    let uris = discover_files(
        &config.search_paths,
        &config.allowed_extensions,
        config.follow_symlinks,
    );
    assert_eq!(uris.len(), 5);
}

#[test]
fn test_identifier_is_the_raw_base_name() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    touch(&root.join("Primvar_float_3_4.oso"));

    let results = discover_nodes(&reference_config(root));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].identifier, "Primvar_float_3_4");
    assert_eq!(results[0].name, "Primvar_float");
    assert_eq!(results[0].family, "Primvar");
    assert_eq!(results[0].version, Version::new(3, 4));
}

#[test]
fn test_multiple_roots_in_priority_order() {
    let temp = tempfile::tempdir().unwrap();
    let high = temp.path().join("high");
    let low = temp.path().join("low");
    touch(&high.join("Shared.oso"));
    touch(&low.join("Shared.oso"));

    let config = DiscoveryConfig::new(
        vec![high.clone(), low.clone()],
        vec!["oso".to_string()],
        false,
    );
    let results = discover_nodes(&config);
    assert_eq!(results.len(), 2);
    assert!(results[0].uri.starts_with(&high));
    assert!(results[1].uri.starts_with(&low));
    assert_eq!(results[0].identifier, results[1].identifier);
}

#[test]
fn test_unusable_root_does_not_abort_the_pass() {
    let temp = reference_tree();
    let missing = PathBuf::from("/nonexistent/nodescope/search/path");

    let config = DiscoveryConfig::new(
        vec![missing, temp.path().to_path_buf()],
        vec!["oso".to_string(), "args".to_string()],
        true,
    );
    assert_eq!(discover_nodes(&config).len(), 13);
}

#[test]
fn test_records_round_trip_through_json() {
    let temp = tempfile::tempdir().unwrap();
    touch(&temp.path().join("Primvar_float2_3.oso"));

    let results = discover_nodes(&reference_config(temp.path()));
    let json = serde_json::to_string(&results).unwrap();
    let back: Vec<nodescope_core::DiscoveryResult> = serde_json::from_str(&json).unwrap();
    assert_eq!(results, back);
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_still_yields_finite_results() {
    let temp = reference_tree();
    let root = temp.path();
    std::os::unix::fs::symlink(root, root.join("nested/loop")).unwrap();

    let results = discover_nodes(&reference_config(root));
    assert_eq!(results.len(), 13);
}
