//! Property-based tests for the merge/extract codec.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;
use treemerge_core::MergeConfig;
use treemerge_core::extract_archive;
use treemerge_core::merge_tree;

/// Relative paths that cannot collide with each other: root files live in
/// an `f_` namespace, subdirectory files in a `d_` namespace.
fn rel_path() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|n| format!("f_{n}.txt")),
        ("[a-z]{1,4}", "[a-z]{1,8}").prop_map(|(d, n)| format!("d_{d}/{n}.txt")),
    ]
}

/// Text content that cannot contain marker lines (no `=` in the alphabet).
fn file_content() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,\n]{0,120}"
}

fn file_set() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(rel_path(), file_content(), 1..8)
}

proptest! {
    #[test]
    fn prop_merge_extract_round_trips(files in file_set()) {
        let source = TempDir::new().unwrap();
        for (rel, content) in &files {
            let path = source.path().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, content).unwrap();
        }

        let config = MergeConfig::default().with_rules(vec![]);
        let (archive, stats) = merge_tree(source.path(), &config).unwrap();
        prop_assert_eq!(stats.included, files.len());

        let dest = TempDir::new().unwrap();
        let report = extract_archive(&archive, dest.path()).unwrap();
        prop_assert_eq!(report.files_created, files.len());

        for (rel, content) in &files {
            let restored = fs::read_to_string(dest.path().join(rel)).unwrap();
            prop_assert_eq!(&restored, content, "content mismatch for {}", rel);
        }
    }

    #[test]
    fn prop_merge_is_deterministic(files in file_set()) {
        let source = TempDir::new().unwrap();
        for (rel, content) in &files {
            let path = source.path().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, content).unwrap();
        }

        let config = MergeConfig::default();
        let (first, _) = merge_tree(source.path(), &config).unwrap();
        let (second, _) = merge_tree(source.path(), &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
