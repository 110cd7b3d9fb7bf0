//! Deterministic text-based directory archive codec.
//!
//! `treemerge-core` walks a directory tree, serializes selected file
//! contents into one ordered, marker-delimited text stream, and reverses
//! the process to reconstruct a directory tree. A restore can optionally
//! be scoped to a single named project inside an archive whose paths are
//! prefixed by a top-level folder name.
//!
//! The codec is deterministic (byte-identical output across runs over an
//! unchanged tree), tolerant of unreadable and binary files (placeholders,
//! never failures), and lossless for well-formed text content apart from
//! the documented trailing-newline approximation on restore.
//!
//! # Examples
//!
//! ```no_run
//! use treemerge_core::MergeConfig;
//! use treemerge_core::extract_archive;
//! use treemerge_core::merge_tree;
//!
//! # fn main() -> treemerge_core::Result<()> {
//! let (archive, stats) = merge_tree("./project", &MergeConfig::default())?;
//! println!("merged {} files", stats.included);
//!
//! let report = extract_archive(&archive, "./restored")?;
//! println!("created {} files", report.files_created);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod extract;
pub mod merge;
pub mod stream;

// Re-export main API types
pub use api::extract_archive;
pub use api::merge_tree;
pub use api::restore_scoped;
pub use error::ArchiveError;
pub use error::Result;
pub use extract::ExtractReport;
pub use merge::ExclusionFilter;
pub use merge::ExclusionRule;
pub use merge::MergeConfig;
pub use merge::WalkBase;
pub use merge::WalkStats;
pub use stream::FileEntry;
