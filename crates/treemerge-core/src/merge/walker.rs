//! Deterministic, skip-tolerant directory tree walking.
//!
//! The walk visits each directory's subdirectories in lexicographic order,
//! depth-first, before its files, which are also visited in lexicographic
//! order. Two walks over an unchanged tree therefore enumerate identical
//! sequences, which is what makes merge output reproducible.

use crate::error::ArchiveError;
use crate::error::Result;
use crate::merge::config::WalkBase;
use crate::merge::filters::ExclusionFilter;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Aggregate counters for one walk.
///
/// `included` and `skipped` are the archive accounting: one increment per
/// file decision. Directories are never counted individually. The other
/// counters exist for observability only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files enumerated for the archive.
    pub included: usize,

    /// Files dropped by an exclusion rule.
    pub skipped: usize,

    /// Directories that could not be read and were silently passed over.
    /// Not part of `skipped`.
    pub unreadable_dirs: usize,

    /// Symlinks passed over. Symlinks are never followed, which guarantees
    /// termination without cycle detection. Not part of `skipped`.
    pub symlinks_skipped: usize,
}

/// One file enumerated by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Full filesystem path.
    pub path: PathBuf,

    /// Forward-slash relative path as it will appear in the stream.
    pub relative_path: String,
}

/// Single-pass, non-restartable enumeration of a directory tree.
///
/// Yields files only; directories steer recursion but are never emitted.
/// An excluded directory is not descended into and contributes nothing to
/// the counters. Iteration errors from unreadable subtrees are swallowed
/// and tracked in [`WalkStats::unreadable_dirs`].
///
/// # Examples
///
/// ```no_run
/// use treemerge_core::merge::ExclusionFilter;
/// use treemerge_core::merge::TreeWalker;
/// use treemerge_core::merge::WalkBase;
/// use std::path::Path;
///
/// # fn main() -> treemerge_core::Result<()> {
/// let filter = ExclusionFilter::default();
/// let mut walker = TreeWalker::new(Path::new("./project"), &filter, WalkBase::Root)?;
/// for file in walker.by_ref() {
///     println!("{}", file?.relative_path);
/// }
/// println!("{} included", walker.stats().included);
/// # Ok(())
/// # }
/// ```
pub struct TreeWalker<'a> {
    iter: walkdir::IntoIter,
    filter: &'a ExclusionFilter,
    base: PathBuf,
    stats: WalkStats,
}

impl<'a> TreeWalker<'a> {
    /// Creates a walker over `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidRoot`] if `root` is missing or not a
    /// directory. No partial output is produced in that case.
    pub fn new(root: &Path, filter: &'a ExclusionFilter, base: WalkBase) -> Result<Self> {
        if !root.is_dir() {
            return Err(ArchiveError::InvalidRoot {
                path: root.to_path_buf(),
            });
        }

        let base_path = match base {
            WalkBase::Root => root.to_path_buf(),
            WalkBase::Parent => root
                .parent()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
        };

        let iter = WalkDir::new(root)
            .follow_links(false)
            .sort_by(|a, b| {
                // Subdirectories recurse before sibling files; names break
                // ties lexicographically.
                b.file_type()
                    .is_dir()
                    .cmp(&a.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter();

        Ok(Self {
            iter,
            filter,
            base: base_path,
            stats: WalkStats::default(),
        })
    }

    /// Returns the counters accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// Consumes the walker, returning the final counters.
    #[must_use]
    pub fn into_stats(self) -> WalkStats {
        self.stats
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = Result<WalkedFile>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.iter.next()? {
                Ok(entry) => entry,
                Err(_) => {
                    // Unreadable subtree: skipped silently, counted apart
                    // from exclusion-driven skips.
                    self.stats.unreadable_dirs += 1;
                    continue;
                }
            };

            // The walked root itself is never filtered or emitted.
            if entry.depth() == 0 {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let file_type = entry.file_type();

            if self.filter.is_excluded(&name) {
                if file_type.is_dir() {
                    // Its contents stay invisible to the walk and to the
                    // counters.
                    self.iter.skip_current_dir();
                } else if file_type.is_file() {
                    self.stats.skipped += 1;
                }
                continue;
            }

            if file_type.is_symlink() {
                self.stats.symlinks_skipped += 1;
                continue;
            }

            if file_type.is_dir() {
                continue;
            }

            match relative_archive_path(entry.path(), &self.base) {
                Ok(relative_path) => {
                    self.stats.included += 1;
                    return Some(Ok(WalkedFile {
                        path: entry.path().to_path_buf(),
                        relative_path,
                    }));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Computes the forward-slash relative path of `path` against `base`.
fn relative_archive_path(path: &Path, base: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).unwrap_or(path);

    let mut parts = Vec::new();
    for component in relative.components() {
        let part = component
            .as_os_str()
            .to_str()
            .ok_or_else(|| ArchiveError::PathEncoding {
                path: path.to_path_buf(),
            })?;
        parts.push(part);
    }

    Ok(parts.join("/"))
}
