//! Sort command
//!
//! Usage: clipdata sort <INPUT> --type <TYPE> [--output <FILE>]
//!
//! Sorting in place keeps `<INPUT>.bak` until the rewrite has succeeded and
//! changed something.

use super::{load_dataset, run_logged, CommandResult};
use clap::Args;
use clipdata_core::config::DEFAULT_INDENT;
use clipdata_core::ops::sort_by_codepoint;
use clipdata_core::DatasetKind;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SortArgs {
    pub input: PathBuf,

    #[arg(long = "type", value_name = "TYPE")]
    pub kind: DatasetKind,

    /// Output file (default: overwrite the input, keeping a backup)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

/// Execute sort command
pub fn execute(args: SortArgs) -> CommandResult {
    run_logged("sort", || {
        let dataset = load_dataset("sort", args.kind, &args.input)?;
        let (sorted, changed) = sort_by_codepoint(&dataset);

        for location in &changed {
            println!("  Sorted '{}'", location);
        }

        match &args.output {
            Some(output) => {
                clipdata_store::write_json(output, &sorted.to_json(), args.indent)?;
                println!("✓ Saved to {}", output.display());
            }
            None => {
                let backup = clipdata_store::create_backup(&args.input)?;
                clipdata_store::write_json(&args.input, &sorted.to_json(), args.indent)?;
                if changed.is_empty() {
                    clipdata_store::discard_backup(&args.input)?;
                } else {
                    println!("  Backup kept at {}", backup.display());
                }
                println!("✓ Saved to {}", args.input.display());
            }
        }

        if changed.is_empty() {
            println!("Already sorted.");
        } else {
            println!("Sorted {} branch(es)", changed.len());
        }
        Ok(())
    })
}
