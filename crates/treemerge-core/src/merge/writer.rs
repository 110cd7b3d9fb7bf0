//! Serializes a walked tree into an ordered archive stream.

use crate::error::Result;
use crate::merge::config::MergeConfig;
use crate::merge::filters::ExclusionFilter;
use crate::merge::walker::TreeWalker;
use crate::merge::walker::WalkStats;
use crate::stream::END_MARKER;
use crate::stream::FILE_BEGIN_PREFIX;
use crate::stream::MARKER_SUFFIX;
use crate::stream::MERGE_INFO_PREFIX;
use crate::stream::UNREADABLE_PLACEHOLDER;
use crate::stream::binary_placeholder;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Merges the tree under `root` into `writer` as a Grammar A stream.
///
/// Entries appear in the walker's deterministic order, so repeated calls
/// over an unchanged tree produce byte-identical output. The source tree
/// is only read; each file handle is released before the next entry is
/// processed, which also makes the gap between two entries the only safe
/// cancellation point.
///
/// A file that exists but cannot be read is included with a placeholder
/// and counted as included, never as skipped.
///
/// # Errors
///
/// Returns [`ArchiveError::InvalidRoot`] if `root` is missing or not a
/// directory (no partial output is written in that case), or an I/O error
/// if the destination writer fails.
///
/// [`ArchiveError::InvalidRoot`]: crate::ArchiveError::InvalidRoot
pub fn write_merge<W: Write>(root: &Path, config: &MergeConfig, writer: &mut W) -> Result<WalkStats> {
    let filter = ExclusionFilter::new(config.rules.clone());
    let mut walker = TreeWalker::new(root, &filter, config.base)?;

    if !config.info.is_empty() {
        let pairs: Vec<String> = config
            .info
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        writeln!(writer, "{MERGE_INFO_PREFIX}{}{MARKER_SUFFIX}", pairs.join(","))?;
    }

    for file in walker.by_ref() {
        let file = file?;
        let content = read_file_text(&file.path);

        writeln!(writer, "{FILE_BEGIN_PREFIX}{}{MARKER_SUFFIX}", file.relative_path)?;
        writer.write_all(content.as_bytes())?;
        writeln!(writer, "\n{END_MARKER}")?;
    }

    Ok(walker.into_stats())
}

/// Convenience wrapper producing the stream as a `String`.
///
/// # Examples
///
/// ```no_run
/// use treemerge_core::merge::MergeConfig;
/// use treemerge_core::merge::writer::merge_to_string;
/// use std::path::Path;
///
/// # fn main() -> treemerge_core::Result<()> {
/// let (archive, stats) = merge_to_string(Path::new("./project"), &MergeConfig::default())?;
/// println!("{} files, {} skipped", stats.included, stats.skipped);
/// # let _ = archive;
/// # Ok(())
/// # }
/// ```
pub fn merge_to_string(root: &Path, config: &MergeConfig) -> Result<(String, WalkStats)> {
    let mut buffer = Vec::new();
    let stats = write_merge(root, config, &mut buffer)?;
    // The buffer only ever receives UTF-8 strings.
    Ok((String::from_utf8_lossy(&buffer).into_owned(), stats))
}

/// Reads a file permissively as text.
///
/// Bytes containing NUL are treated as binary and replaced by a length
/// placeholder; other invalid UTF-8 sequences are substituted rather than
/// treated as fatal. An unreadable file yields a fixed placeholder.
fn read_file_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => {
            if bytes.contains(&0) {
                binary_placeholder(bytes.len())
            } else {
                String::from_utf8_lossy(&bytes).into_owned()
            }
        }
        Err(_) => UNREADABLE_PLACEHOLDER.to_string(),
    }
}
