//! Enrich command
//!
//! Usage: clipdata enrich <INPUT> --type <TYPE> [--output <FILE>]

use super::{load_dataset, run_logged, CommandResult};
use clap::Args;
use clipdata_core::config::DEFAULT_INDENT;
use clipdata_core::ops::enrich;
use clipdata_core::DatasetKind;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EnrichArgs {
    pub input: PathBuf,

    #[arg(long = "type", value_name = "TYPE")]
    pub kind: DatasetKind,

    /// Output file (default: overwrite the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

/// Execute enrich command
pub fn execute(args: EnrichArgs) -> CommandResult {
    let output = args.output.unwrap_or_else(|| args.input.clone());

    run_logged("enrich", || {
        let dataset = load_dataset("enrich", args.kind, &args.input)?;
        let (enriched, report) = enrich(&dataset);

        if report.unsupported {
            println!("⚠ No derived metadata for {} datasets; nothing to do.", args.kind);
            return Ok(());
        }
        for skipped in &report.skipped {
            println!(
                "  Skipped {:?} in '{}': {}",
                skipped.item, skipped.location, skipped.reason
            );
        }
        println!(
            "Enriched {} item(s), skipped {}",
            report.enriched,
            report.skipped.len()
        );

        clipdata_store::write_json(&output, &enriched.to_json(), args.indent)?;
        println!("✓ Saved to {}", output.display());
        Ok(())
    })
}
