//! High-level public API for merging and restoring directory trees.

use crate::Result;
use crate::extract;
use crate::extract::ExtractReport;
use crate::merge::MergeConfig;
use crate::merge::WalkStats;
use crate::merge::writer;
use std::path::Path;

/// Merges the directory tree under `root` into one archive stream.
///
/// The stream is produced fresh per call and is byte-identical across
/// calls over an unchanged tree.
///
/// # Errors
///
/// Returns an error if `root` is missing or not a directory. No partial
/// output is produced in that case.
///
/// # Examples
///
/// ```no_run
/// use treemerge_core::MergeConfig;
/// use treemerge_core::merge_tree;
///
/// # fn main() -> treemerge_core::Result<()> {
/// let (archive, stats) = merge_tree("./project", &MergeConfig::default())?;
/// println!("{} files merged, {} skipped", stats.included, stats.skipped);
/// # let _ = archive;
/// # Ok(())
/// # }
/// ```
pub fn merge_tree<P: AsRef<Path>>(root: P, config: &MergeConfig) -> Result<(String, WalkStats)> {
    writer::merge_to_string(root.as_ref(), config)
}

/// Reconstructs a directory tree from an archive stream under `dest`.
///
/// # Errors
///
/// Returns an error if the destination is not writable or an entry path
/// escapes it. Already-written entries are left in place.
///
/// # Examples
///
/// ```no_run
/// use treemerge_core::extract_archive;
///
/// # fn main() -> treemerge_core::Result<()> {
/// let archive = std::fs::read_to_string("project.txt")?;
/// let report = extract_archive(&archive, "out/")?;
/// println!("{} files created", report.files_created);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>>(text: &str, dest: P) -> Result<ExtractReport> {
    extract::engine::extract_archive(text, dest.as_ref())
}

/// Restores only the subtree belonging to `project` from an archive whose
/// paths are prefixed by a top-level folder name.
///
/// # Errors
///
/// Same failure modes as [`extract_archive`]. A scoped restore matching
/// zero entries is not an error; it records a warning on the report.
pub fn restore_scoped<P: AsRef<Path>>(
    text: &str,
    project: &str,
    dest: P,
) -> Result<ExtractReport> {
    extract::engine::restore_scoped(text, project, dest.as_ref())
}
