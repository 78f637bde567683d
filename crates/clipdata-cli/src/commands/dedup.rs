//! Dedup command
//!
//! Usage: clipdata dedup <INPUT> --type <TYPE> [--scope <SCOPE>] [--output <FILE>]

use super::{load_dataset, run_logged, scope_for, CommandResult, ScopeArg};
use clap::Args;
use clipdata_core::config::DEFAULT_INDENT;
use clipdata_core::ops::deduplicate;
use clipdata_core::reconcile::render_duplicates;
use clipdata_core::{DatasetKind, PipelineConfig};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DedupArgs {
    pub input: PathBuf,

    #[arg(long = "type", value_name = "TYPE")]
    pub kind: DatasetKind,

    /// Uniqueness policy (default: per kind)
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// Output file (default: overwrite the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

/// Execute dedup command
pub fn execute(args: DedupArgs) -> CommandResult {
    let config = PipelineConfig::for_kind(".", args.kind)
        .with_indent(args.indent)
        .with_scope(scope_for(args.kind, args.scope));
    let output = args.output.unwrap_or_else(|| args.input.clone());

    run_logged("dedup", || {
        let dataset = load_dataset("dedup", args.kind, &args.input)?;
        let (deduped, report) = deduplicate(&dataset, config.scope);

        if report.duplicates.is_empty() {
            println!("No duplicates found.");
        } else {
            println!("Removed {} duplicate(s):", report.duplicates.len());
            print!("{}", render_duplicates(&report.duplicates));
        }
        for location in &report.malformed {
            println!("  Dropped malformed item in '{}'", location);
        }
        for location in &report.pruned {
            println!("  Removed empty branch '{}'", location);
        }
        println!("{} item(s) kept", report.kept);

        clipdata_store::write_json(&output, &deduped.to_json(), config.indent)?;
        println!("✓ Saved to {}", output.display());
        Ok(())
    })
}
