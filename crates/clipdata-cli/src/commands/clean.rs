//! Clean command
//!
//! Usage: clipdata clean <INPUT> --type <TYPE> [--exclude <CODES>] [--output <FILE>]

use super::{load_dataset, run_logged, CommandResult};
use clap::Args;
use clipdata_core::config::COMPACT_INDENT;
use clipdata_core::ops::clean_dataset;
use clipdata_core::{DatasetKind, Exclusion, PipelineConfig};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CleanArgs {
    pub input: PathBuf,

    #[arg(long = "type", value_name = "TYPE")]
    pub kind: DatasetKind,

    /// General categories to strip, comma-separated
    #[arg(long, default_value = "Cc,Cf")]
    pub exclude: Exclusion,

    /// Output file (default: overwrite the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = COMPACT_INDENT)]
    pub indent: usize,
}

/// Execute clean command
pub fn execute(args: CleanArgs) -> CommandResult {
    let config = PipelineConfig::for_kind(".", args.kind)
        .with_indent(args.indent)
        .with_exclusion(args.exclude);
    let output = args.output.unwrap_or_else(|| args.input.clone());

    run_logged("clean", || {
        let dataset = load_dataset("clean", args.kind, &args.input)?;
        let (cleaned, report) = clean_dataset(&dataset, &config.exclusion);

        for entry in &report.cleaned {
            println!(
                "  Cleaned in '{}': {:?} -> {:?}",
                entry.location, entry.before, entry.after
            );
        }
        for entry in &report.dropped {
            println!("  Dropped in '{}': {:?} was empty after cleaning", entry.location, entry.before);
        }
        for location in &report.pruned {
            println!("  Removed empty branch '{}'", location);
        }
        if report.cleaned.is_empty() && report.dropped.is_empty() {
            println!("No invisible characters found.");
        } else {
            println!(
                "Cleaned {} item(s), dropped {}",
                report.cleaned.len(),
                report.dropped.len()
            );
        }

        clipdata_store::write_json(&output, &cleaned.to_json(), config.indent)?;
        println!("✓ Saved to {}", output.display());
        Ok(())
    })
}
