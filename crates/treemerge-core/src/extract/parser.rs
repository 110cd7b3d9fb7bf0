//! Line-oriented archive stream parsing.

use crate::stream::END_MARKER;
use crate::stream::FileEntry;
use crate::stream::MERGE_INFO_PREFIX;
use crate::stream::parse_begin_marker;

/// Parses an archive stream into discrete file entries, in stream order.
///
/// The parser reads forward only and accepts both grammars: a Grammar A
/// entry closes at its `===END===` line, a Grammar B entry at the next
/// begin marker or end of input. Whichever boundary comes first wins, so
/// a Grammar A stream with a missing final end marker still yields its
/// last entry.
///
/// Malformed input is recovered, never fatal: a leading metadata line,
/// content before any begin marker, and an end marker with no open entry
/// are all discarded silently.
///
/// # Examples
///
/// ```
/// use treemerge_core::extract::ArchiveParser;
///
/// let stream = "===FILE:a.txt===\nhello\n===END===\n";
/// let entries: Vec<_> = ArchiveParser::new(stream).collect();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].path, "a.txt");
/// assert_eq!(entries[0].content, "hello");
/// ```
pub struct ArchiveParser<'a> {
    lines: std::str::Split<'a, char>,
    current: Option<(String, Vec<&'a str>)>,
    exhausted: bool,
}

impl<'a> ArchiveParser<'a> {
    /// Creates a parser over the full stream text.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.split('\n'),
            current: None,
            exhausted: false,
        }
    }
}

impl Iterator for ArchiveParser<'_> {
    type Item = FileEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        for line in self.lines.by_ref() {
            if line.starts_with(MERGE_INFO_PREFIX) {
                continue;
            }

            if let Some(path) = parse_begin_marker(line) {
                // A new begin marker closes the open entry (Grammar B).
                let previous = self.current.replace((path, Vec::new()));
                if let Some(entry) = previous.map(close_entry) {
                    return Some(entry);
                }
                continue;
            }

            if line.trim() == END_MARKER {
                // An end marker with no open entry is discarded.
                if let Some(entry) = self.current.take().map(close_entry) {
                    return Some(entry);
                }
                continue;
            }

            if let Some((_, buffered)) = &mut self.current {
                buffered.push(line);
            }
            // Content before any begin marker is discarded silently.
        }

        // End of input closes the final entry even without an end marker.
        self.exhausted = true;
        self.current.take().map(close_entry)
    }
}

/// Joins buffered lines with a single newline.
///
/// This is the documented lossy approximation of the source file's
/// trailing-newline convention.
fn close_entry((path, lines): (String, Vec<&str>)) -> FileEntry {
    FileEntry {
        path,
        content: lines.join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<FileEntry> {
        ArchiveParser::new(text).collect()
    }

    #[test]
    fn test_parse_grammar_a() {
        let entries = parse("===FILE:a.txt===\nhello\n===END===\n===FILE:sub/b.txt===\nworld\n===END===\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "a.txt");
        assert_eq!(entries[0].content, "hello");
        assert_eq!(entries[1].path, "sub/b.txt");
        assert_eq!(entries[1].content, "world");
    }

    #[test]
    fn test_parse_grammar_b() {
        let entries = parse("=== FILE: a.txt ===\nhello\n\n=== FILE: b.txt ===\nworld\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "a.txt");
        // Grammar B buffers up to the next marker, blank separator included.
        assert_eq!(entries[0].content, "hello\n");
        assert_eq!(entries[1].path, "b.txt");
    }

    #[test]
    fn test_parse_multiline_content() {
        let entries = parse("===FILE:a.txt===\nline one\nline two\n===END===\n");
        assert_eq!(entries[0].content, "line one\nline two");
    }

    #[test]
    fn test_merge_info_line_is_not_an_entry() {
        let entries = parse("===MERGE_INFO:folder=proj===\n===FILE:a.txt===\nx\n===END===\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "a.txt");
    }

    #[test]
    fn test_leading_garbage_is_discarded() {
        let entries = parse("garbage\n===FILE:a.txt===\nok\n===END===");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "a.txt");
        assert_eq!(entries[0].content, "ok");
    }

    #[test]
    fn test_unmatched_end_marker_is_discarded() {
        let entries = parse("===END===\n===FILE:a.txt===\nok\n===END===\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "ok");
    }

    #[test]
    fn test_final_entry_flushed_at_end_of_input() {
        let entries = parse("===FILE:a.txt===\ntail content");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "tail content");
    }

    #[test]
    fn test_empty_stream_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("just\nplain\ntext\n").is_empty());
    }

    #[test]
    fn test_empty_content_entry() {
        let entries = parse("===FILE:empty.txt===\n===END===\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "");
    }

    #[test]
    fn test_entry_content_preserves_blank_lines() {
        let entries = parse("===FILE:a.txt===\nfirst\n\nthird\n===END===\n");
        assert_eq!(entries[0].content, "first\n\nthird");
    }
}
