//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use std::path::Path;
use treemerge_core::ExtractReport;
use treemerge_core::WalkStats;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;

        if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_merge_result(&self, output_path: &Path, stats: &WalkStats) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Archive written: {}",
                style("✓").green().bold(),
                output_path.display()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Archive written: {}", output_path.display()));
        }

        let _ = self
            .term
            .write_line(&format!("  Files merged:   {}", stats.included));
        let _ = self
            .term
            .write_line(&format!("  Files skipped:  {}", stats.skipped));

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Unreadable directories: {}",
                stats.unreadable_dirs
            ));
            let _ = self
                .term
                .write_line(&format!("  Symlinks skipped: {}", stats.symlinks_skipped));
        }

        Ok(())
    }

    fn format_extract_result(&self, report: &ExtractReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} Restore complete", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line("Restore complete");
        }

        let _ = self
            .term
            .write_line(&format!("  Files created:  {}", report.files_created));
        let _ = self.term.write_line(&format!(
            "  Total size:     {}",
            Self::format_size(report.bytes_written)
        ));

        if self.verbose || report.entries_skipped > 0 {
            let _ = self
                .term
                .write_line(&format!("  Entries skipped: {}", report.entries_skipped));
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_success(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(HumanFormatter::format_size(512), "512 B");
        assert_eq!(HumanFormatter::format_size(2048), "2.0 KB");
        assert_eq!(HumanFormatter::format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
