//! Extraction operation reporting.

/// Report of one archive extraction or scoped restore.
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Number of files written to the destination.
    pub files_created: usize,

    /// Number of entries dropped by scope resolution or an unusable path.
    pub entries_skipped: usize,

    /// Total content bytes written.
    pub bytes_written: u64,

    /// Warnings generated during extraction.
    pub warnings: Vec<String>,
}

impl ExtractReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
