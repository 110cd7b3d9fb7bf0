//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use treemerge_core::ExtractReport;
use treemerge_core::WalkStats;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct MergeData {
    output: String,
    files_merged: usize,
    files_skipped: usize,
    unreadable_dirs: usize,
    symlinks_skipped: usize,
}

#[derive(Debug, Serialize)]
struct ExtractData {
    files_created: usize,
    entries_skipped: usize,
    bytes_written: u64,
    warnings: Vec<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format_merge_result(&self, output_path: &Path, stats: &WalkStats) -> Result<()> {
        let output = JsonOutput::success(
            "merge",
            MergeData {
                output: output_path.display().to_string(),
                files_merged: stats.included,
                files_skipped: stats.skipped,
                unreadable_dirs: stats.unreadable_dirs,
                symlinks_skipped: stats.symlinks_skipped,
            },
        );
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn format_extract_result(&self, report: &ExtractReport) -> Result<()> {
        let output = JsonOutput::success(
            "extract",
            ExtractData {
                files_created: report.files_created,
                entries_skipped: report.entries_skipped,
                bytes_written: report.bytes_written,
                warnings: report.warnings.clone(),
            },
        );
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output: JsonOutput<()> = JsonOutput {
            operation: "error".to_string(),
            status: super::formatter::Status::Error,
            data: None,
            error: Some(format!("{error:#}")),
        };
        if let Ok(rendered) = serde_json::to_string_pretty(&output) {
            eprintln!("{rendered}");
        }
    }

    fn format_success(&self, _message: &str) {
        // Success payloads are emitted by the result formatters.
    }

    fn format_warning(&self, _message: &str) {
        // Warnings are carried inside the result payloads.
    }
}
