//! Integration tests for treemerge-core.
//!
//! These tests verify end-to-end merge/extract workflows with real
//! filesystem operations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treemerge_core::MergeConfig;
use treemerge_core::WalkBase;
use treemerge_core::extract_archive;
use treemerge_core::merge_tree;
use treemerge_core::restore_scoped;

fn no_excludes() -> MergeConfig {
    MergeConfig::default().with_rules(vec![])
}

#[test]
fn test_round_trip_reproduces_tree() {
    let source = TempDir::new().unwrap();
    let root = source.path();
    fs::write(root.join("readme.md"), "# Title\n\nBody text.\n").unwrap();
    fs::create_dir_all(root.join("src/nested")).unwrap();
    fs::write(root.join("src/lib.rs"), "pub fn f() {}\n").unwrap();
    fs::write(root.join("src/nested/deep.txt"), "no trailing newline").unwrap();

    let (archive, stats) = merge_tree(root, &no_excludes()).unwrap();
    assert_eq!(stats.included, 3);

    let dest = TempDir::new().unwrap();
    let report = extract_archive(&archive, dest.path()).unwrap();
    assert_eq!(report.files_created, 3);

    for rel in ["readme.md", "src/lib.rs", "src/nested/deep.txt"] {
        assert_eq!(
            fs::read_to_string(dest.path().join(rel)).unwrap(),
            fs::read_to_string(root.join(rel)).unwrap(),
            "content mismatch for {rel}"
        );
    }
}

#[test]
fn test_merge_is_byte_identical_across_runs() {
    let source = TempDir::new().unwrap();
    let root = source.path();
    for name in ["c.txt", "a.txt", "b.txt"] {
        fs::write(root.join(name), format!("content of {name}\n")).unwrap();
    }
    fs::create_dir(root.join("dir")).unwrap();
    fs::write(root.join("dir/inner.txt"), "inner\n").unwrap();

    let config = MergeConfig::default();
    let (first, _) = merge_tree(root, &config).unwrap();
    let (second, _) = merge_tree(root, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_idempotent_restore() {
    let dest = TempDir::new().unwrap();
    let archive = "===FILE:a.txt===\nhello\n===END===\n===FILE:d/b.txt===\nworld\n===END===\n";

    extract_archive(archive, dest.path()).unwrap();
    let snapshot = read_tree(dest.path());

    extract_archive(archive, dest.path()).unwrap();
    assert_eq!(read_tree(dest.path()), snapshot);
}

#[test]
fn test_exclusion_accounting() {
    let source = TempDir::new().unwrap();
    let root = source.path();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git/config"), "[core]").unwrap();
    fs::write(root.join("notes.pyc"), "compiled").unwrap();
    fs::write(root.join("kept.txt"), "kept").unwrap();

    let (archive, stats) = merge_tree(root, &MergeConfig::default()).unwrap();

    assert!(!archive.contains(".git/config"));
    assert!(!archive.contains("notes.pyc"));
    assert!(archive.contains("===FILE:kept.txt==="));
    // Only the excluded file counts; the excluded directory does not.
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.included, 1);
}

#[test]
fn test_scoped_restore() {
    let dest = TempDir::new().unwrap();
    let archive = "===FILE:projA/x.txt===\nhi\n===END===\n\
                   ===FILE:projA/sub/y.txt===\nlo\n===END===\n\
                   ===FILE:readme.txt===\nr\n===END===\n\
                   ===FILE:projB/z.txt===\nz\n===END===\n";

    let report = restore_scoped(archive, "projA", dest.path()).unwrap();

    assert_eq!(report.files_created, 3);
    assert_eq!(fs::read_to_string(dest.path().join("x.txt")).unwrap(), "hi");
    assert_eq!(fs::read_to_string(dest.path().join("sub/y.txt")).unwrap(), "lo");
    assert_eq!(fs::read_to_string(dest.path().join("readme.txt")).unwrap(), "r");
    assert!(!dest.path().join("z.txt").exists());
    assert!(!dest.path().join("projB").exists());
}

#[test]
fn test_malformed_input_safety() {
    let dest = TempDir::new().unwrap();
    let report =
        extract_archive("garbage\n===FILE:a.txt===\nok\n===END===", dest.path()).unwrap();

    assert_eq!(report.files_created, 1);
    assert_eq!(fs::read_to_string(dest.path().join("a.txt")).unwrap(), "ok");
}

#[test]
fn test_literal_grammar_a_example() {
    let source = TempDir::new().unwrap();
    let root = source.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.txt"), "hello").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/b.txt"), "world").unwrap();

    let (archive, _) = merge_tree(&root, &no_excludes()).unwrap();

    // Subdirectories recurse before sibling files, so sub/b.txt precedes
    // a.txt in the stream.
    assert_eq!(
        archive,
        "===FILE:sub/b.txt===\nworld\n===END===\n===FILE:a.txt===\nhello\n===END===\n"
    );

    let dest = TempDir::new().unwrap();
    extract_archive(&archive, dest.path()).unwrap();
    assert_eq!(fs::read_to_string(dest.path().join("a.txt")).unwrap(), "hello");
    assert_eq!(fs::read_to_string(dest.path().join("sub/b.txt")).unwrap(), "world");
}

#[test]
fn test_grammar_b_read_compatibility() {
    let dest = TempDir::new().unwrap();
    let legacy = "=== FILE: proj/a.txt ===\nhello\n\n=== FILE: proj/sub/b.txt ===\nworld\n";

    let report = extract_archive(legacy, dest.path()).unwrap();

    assert_eq!(report.files_created, 2);
    assert!(dest.path().join("proj/a.txt").exists());
    assert!(dest.path().join("proj/sub/b.txt").exists());
    assert!(
        fs::read_to_string(dest.path().join("proj/a.txt"))
            .unwrap()
            .starts_with("hello")
    );
}

#[test]
fn test_crlf_archive_keeps_entry_paths_clean() {
    let dest = TempDir::new().unwrap();
    let crlf = "===FILE:a.txt===\r\nhello\r\n===END===\r\n\
                === FILE: sub/b.txt ===\r\nworld\r\n";

    let report = extract_archive(crlf, dest.path()).unwrap();

    assert_eq!(report.files_created, 2);
    // The carriage return must not defeat the marker-suffix strip.
    assert!(dest.path().join("a.txt").exists());
    assert!(dest.path().join("sub/b.txt").exists());
    assert!(!dest.path().join("a.txt===").exists());
    assert!(
        fs::read_to_string(dest.path().join("a.txt"))
            .unwrap()
            .starts_with("hello")
    );
}

#[test]
fn test_parent_base_round_trip_through_scoped_restore() {
    let source = TempDir::new().unwrap();
    let root = source.path().join("widget");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("main.rs"), "fn main() {}\n").unwrap();
    fs::create_dir(root.join("docs")).unwrap();
    fs::write(root.join("docs/guide.md"), "guide\n").unwrap();

    let config = no_excludes().with_base(WalkBase::Parent);
    let (archive, _) = merge_tree(&root, &config).unwrap();
    assert!(archive.contains("===FILE:widget/main.rs==="));

    let dest = TempDir::new().unwrap();
    let report = restore_scoped(&archive, "widget", dest.path()).unwrap();

    assert_eq!(report.files_created, 2);
    assert_eq!(
        fs::read_to_string(dest.path().join("main.rs")).unwrap(),
        "fn main() {}\n"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("docs/guide.md")).unwrap(),
        "guide\n"
    );
}

#[test]
fn test_merge_info_line_survives_round_trip_unharmed() {
    let source = TempDir::new().unwrap();
    fs::write(source.path().join("a.txt"), "a").unwrap();

    let config = no_excludes().with_info(vec![("folder".into(), "src".into())]);
    let (archive, _) = merge_tree(source.path(), &config).unwrap();
    assert!(archive.starts_with("===MERGE_INFO:folder=src===\n"));

    let dest = TempDir::new().unwrap();
    let report = extract_archive(&archive, dest.path()).unwrap();

    // The metadata line is never treated as a file entry.
    assert_eq!(report.files_created, 1);
    assert!(dest.path().join("a.txt").exists());
}

fn read_tree(root: &Path) -> Vec<(String, String)> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned();
            files.push((rel, fs::read_to_string(entry.path()).unwrap()));
        }
    }
    files
}
