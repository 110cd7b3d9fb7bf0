//! Error conversion utilities for CLI.
//!
//! Converts treemerge-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use std::path::Path;
use treemerge_core::ArchiveError;

/// Converts `ArchiveError` to a user-friendly anyhow error with context.
pub fn convert_archive_error(err: ArchiveError, subject: &Path) -> anyhow::Error {
    match err {
        ArchiveError::InvalidRoot { path } => {
            anyhow!(
                "Invalid source root '{}'\n\
                 HINT: The path must exist and be a directory.",
                path.display()
            )
        }
        ArchiveError::PathTraversal { path } => {
            anyhow!(
                "Security violation: archive '{}' attempted path traversal with '{}'\n\
                 HINT: This archive may be malicious. Do not restore from untrusted sources.",
                subject.display(),
                path.display()
            )
        }
        ArchiveError::PathEncoding { path } => {
            anyhow!(
                "Path is not valid UTF-8 and cannot be archived: {}\n\
                 HINT: Rename the file or exclude it with --exclude.",
                path.display()
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!("I/O error while processing '{}': {}", subject.display(), io_err)
        }
    }
}

/// Adds context to a core result about the path being operated on.
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    subject: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, subject))
}
