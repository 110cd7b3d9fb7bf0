//! Writes parsed archive entries back into a directory tree.

use crate::error::ArchiveError;
use crate::error::Result;
use crate::extract::parser::ArchiveParser;
use crate::extract::report::ExtractReport;
use crate::extract::scope::resolve_scope;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Reconstructs a directory tree from an archive stream under `dest`.
///
/// Parent directories are created as needed and existing files are
/// overwritten unconditionally, so restoring the same archive twice
/// yields identical filesystem state.
///
/// # Errors
///
/// A write failure is fatal and aborts the remaining restore;
/// already-written entries are left in place (no rollback). An entry path
/// that is absolute or escapes `dest` fails with
/// [`ArchiveError::PathTraversal`].
pub fn extract_archive(text: &str, dest: &Path) -> Result<ExtractReport> {
    extract_entries(text, dest, None)
}

/// Restores only the subtree belonging to `project`, stripping its prefix.
///
/// Entries of other projects are dropped; loose top-level files are always
/// restored. A scoped restore that matches zero entries succeeds but
/// records a warning on the report, since it usually means the project
/// name does not match the archive's embedded top-level folder.
///
/// # Errors
///
/// Same failure modes as [`extract_archive`].
pub fn restore_scoped(text: &str, project: &str, dest: &Path) -> Result<ExtractReport> {
    extract_entries(text, dest, Some(project))
}

fn extract_entries(text: &str, dest: &Path, project: Option<&str>) -> Result<ExtractReport> {
    let mut report = ExtractReport::new();

    // Scope is applied per entry as the stream is read, never as a
    // post-pass over a fully buffered archive.
    for entry in ArchiveParser::new(text) {
        let normalized = entry.path.replace('\\', "/");

        let relative = match project {
            Some(name) => match resolve_scope(&normalized, name) {
                Some(rest) => rest,
                None => {
                    report.entries_skipped += 1;
                    continue;
                }
            },
            None => normalized.as_str(),
        };

        if relative.is_empty() {
            report.entries_skipped += 1;
            report.add_warning("entry with empty path discarded");
            continue;
        }

        let target = dest.join(checked_entry_path(relative)?);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, entry.content.as_bytes())?;

        report.bytes_written += entry.content.len() as u64;
        report.files_created += 1;
    }

    if let Some(name) = project
        && report.files_created == 0
    {
        report.add_warning(format!("no entries matched project '{name}'"));
    }

    Ok(report)
}

/// Validates a normalized entry path before joining it to the destination.
///
/// Absolute paths and `..` components are rejected; `.` components are
/// dropped.
fn checked_entry_path(relative: &str) -> Result<PathBuf> {
    let candidate = Path::new(relative);

    let mut safe = PathBuf::new();
    for component in candidate.components() {
        match component {
            Component::Normal(part) => safe.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ArchiveError::PathTraversal {
                    path: candidate.to_path_buf(),
                });
            }
        }
    }

    if safe.as_os_str().is_empty() {
        return Err(ArchiveError::PathTraversal {
            path: candidate.to_path_buf(),
        });
    }

    Ok(safe)
}
