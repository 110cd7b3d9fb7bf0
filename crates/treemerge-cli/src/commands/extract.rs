//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::env;
use std::fs;
use treemerge_core::extract_archive;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let dest = match &args.dest {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    // Archives are read permissively: invalid UTF-8 in content is
    // substituted rather than rejected.
    let bytes = fs::read(&args.archive)
        .with_context(|| format!("failed to read archive '{}'", args.archive.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let report = add_archive_context(extract_archive(&text, &dest), &args.archive)?;

    for warning in &report.warnings {
        formatter.format_warning(warning);
    }
    formatter.format_extract_result(&report)?;

    Ok(())
}
