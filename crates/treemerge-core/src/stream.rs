//! Marker grammar shared by the merge writer and the archive parser.
//!
//! Two grammars exist in the wild. New archives are always written in
//! Grammar A; Grammar B is accepted on the read path for compatibility
//! with older streams. The choice is part of the archive format version.
//!
//! ```text
//! Grammar A (explicit end marker)
//!   [optional] ===MERGE_INFO:key=value[,key=value...]===
//!   ===FILE:<relativePath>===
//!   <raw content, any number of lines>
//!   ===END===
//!
//! Grammar B (implicit end, read-only compatibility)
//!   === FILE: <relativePath> ===
//!   <raw content>
//!   -- entry closes at the next begin marker or end of input
//! ```

/// Grammar A begin-marker prefix.
pub const FILE_BEGIN_PREFIX: &str = "===FILE:";

/// Suffix closing a Grammar A marker line.
pub const MARKER_SUFFIX: &str = "===";

/// Grammar A end marker.
pub const END_MARKER: &str = "===END===";

/// Prefix of the optional leading metadata line.
pub const MERGE_INFO_PREFIX: &str = "===MERGE_INFO:";

/// Grammar B begin-marker prefix.
pub const SPACED_BEGIN_PREFIX: &str = "=== FILE: ";

/// Suffix closing a Grammar B begin-marker line.
pub const SPACED_MARKER_SUFFIX: &str = " ===";

/// Placeholder written for a file that exists but cannot be read.
pub const UNREADABLE_PLACEHOLDER: &str = "[unreadable file]";

/// One file's relative path plus its serialized content or placeholder.
///
/// Paths are forward-slash separated with no leading slash. Within one
/// stream no two entries share a path; the tree-walk semantics guarantee
/// this, it is not independently enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Relative path as written in the begin marker.
    pub path: String,

    /// Text content, or a placeholder for binary/unreadable files.
    pub content: String,
}

/// Placeholder substituted for content that is not decodable as text.
#[must_use]
pub fn binary_placeholder(byte_len: usize) -> String {
    format!("[binary file: {byte_len} bytes]")
}

/// Parses a begin-marker line in either grammar, returning the entry path.
///
/// Trailing whitespace is dropped first so CRLF-saved archives still
/// match; without this a stray `\r` defeats the suffix strip and the
/// marker suffix leaks into the path.
#[must_use]
pub fn parse_begin_marker(line: &str) -> Option<String> {
    let line = line.trim_end();
    if let Some(rest) = line.strip_prefix(FILE_BEGIN_PREFIX) {
        let path = rest.strip_suffix(MARKER_SUFFIX).unwrap_or(rest).trim();
        return Some(path.to_string());
    }
    if let Some(rest) = line.strip_prefix(SPACED_BEGIN_PREFIX) {
        let path = rest.strip_suffix(SPACED_MARKER_SUFFIX).unwrap_or(rest).trim();
        return Some(path.to_string());
    }
    None
}
