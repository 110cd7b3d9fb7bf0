//! Error types for merge and extraction operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while merging a tree or extracting an archive.
///
/// Only root-level conditions are represented here. Per-file conditions
/// (unreadable file, undecodable bytes, stray content in a stream) are
/// recovered locally and reported through [`WalkStats`] or
/// [`ExtractReport`] warnings instead.
///
/// [`WalkStats`]: crate::merge::WalkStats
/// [`ExtractReport`]: crate::extract::ExtractReport
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Source path is missing or not a directory.
    #[error("invalid source root: {path} is missing or not a directory")]
    InvalidRoot {
        /// The offending source path.
        path: PathBuf,
    },

    /// I/O operation failed (unwritable destination, failed stream write).
    ///
    /// On restore this aborts remaining entries; already-written files are
    /// left in place. There is no rollback.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An archive entry path is absolute or escapes the destination.
    #[error("path traversal detected: {path}")]
    PathTraversal {
        /// The entry path that attempted traversal.
        path: PathBuf,
    },

    /// A walked path is not valid UTF-8 and cannot appear in the stream.
    #[error("path is not valid UTF-8: {path}")]
    PathEncoding {
        /// The path that could not be encoded.
        path: PathBuf,
    },
}

impl ArchiveError {
    /// Returns the path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidRoot { path } | Self::PathTraversal { path } | Self::PathEncoding { path } => {
                Some(path)
            }
            Self::Io(_) => None,
        }
    }
}
