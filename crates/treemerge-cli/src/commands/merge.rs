//! Merge command implementation.

use crate::cli::MergeArgs;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use std::fs;
use std::io::Write;
use treemerge_core::ExclusionRule;
use treemerge_core::MergeConfig;
use treemerge_core::WalkBase;
use treemerge_core::merge::default_rules;
use treemerge_core::merge_tree;

pub fn execute(args: &MergeArgs, formatter: &dyn OutputFormatter, json: bool) -> Result<()> {
    // Without an output file the archive stream owns stdout, leaving
    // nowhere for a JSON envelope.
    if json && args.output.is_none() {
        bail!(
            "--json requires --output for merge\n\
             HINT: Pass -o FILE to write the archive and receive a JSON summary."
        );
    }

    let mut rules = if args.no_default_excludes {
        Vec::new()
    } else {
        default_rules()
    };
    rules.extend(args.exclude.iter().map(|p| ExclusionRule::parse(p)));

    let base = if args.parent_base {
        WalkBase::Parent
    } else {
        WalkBase::Root
    };

    let config = MergeConfig::default()
        .with_rules(rules)
        .with_base(base)
        .with_info(args.info.clone());

    let (archive, stats) = add_archive_context(merge_tree(&args.source, &config), &args.source)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &archive)
                .with_context(|| format!("failed to write archive '{}'", path.display()))?;
            formatter.format_merge_result(path, &stats)?;
        }
        None => {
            // The archive itself goes to stdout; the summary would corrupt
            // the stream, so it is suppressed.
            std::io::stdout()
                .write_all(archive.as_bytes())
                .context("failed to write archive to stdout")?;
        }
    }

    Ok(())
}
