//! Restore command implementation (project-scoped extraction).

use crate::cli::RestoreArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::env;
use std::fs;
use treemerge_core::restore_scoped;

pub fn execute(args: &RestoreArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let dest = match &args.dest {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let bytes = fs::read(&args.archive)
        .with_context(|| format!("failed to read archive '{}'", args.archive.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let report = add_archive_context(restore_scoped(&text, &args.project, &dest), &args.archive)?;

    for warning in &report.warnings {
        formatter.format_warning(warning);
    }
    formatter.format_extract_result(&report)?;

    Ok(())
}
