//! Reorder command
//!
//! Usage: clipdata reorder <REFERENCE> <POOL> --type <TYPE> --output <FILE>

use super::{load_dataset, run_logged, CommandResult};
use clap::Args;
use clipdata_core::config::DEFAULT_INDENT;
use clipdata_core::ops::rebuild;
use clipdata_core::reconcile::render_duplicates;
use clipdata_core::DatasetKind;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReorderArgs {
    /// Dataset whose order is authoritative
    pub reference: PathBuf,

    /// Dataset supplying the leaf records
    pub pool: PathBuf,

    #[arg(long = "type", value_name = "TYPE")]
    pub kind: DatasetKind,

    #[arg(short, long)]
    pub output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

/// Execute reorder command
pub fn execute(args: ReorderArgs) -> CommandResult {
    run_logged("reorder", || {
        let reference = load_dataset("reorder", args.kind, &args.reference)?;
        let pool = load_dataset("reorder", args.kind, &args.pool)?;

        let (rebuilt, report) = rebuild(&reference, &pool)?;

        if report.orphans.is_empty() {
            println!("All items were re-ordered according to the reference.");
        } else {
            println!(
                "Preserved {} item(s) not present in the reference:",
                report.orphans.len()
            );
            for orphan in &report.orphans {
                println!("  - '{}' in '{}'", orphan.identity, orphan.location);
            }
        }
        for missing in &report.missing {
            println!("  Missing from pool: '{}' in '{}'", missing.identity, missing.location);
        }
        if !report.unresolved.is_empty() {
            println!("Pool repeats (emitted once):");
            print!("{}", render_duplicates(&report.unresolved));
        }
        if report.malformed > 0 {
            println!("  Dropped {} pool item(s) without an identity", report.malformed);
        }

        clipdata_store::write_json(&args.output, &rebuilt.to_json(), args.indent)?;
        println!("✓ Saved to {}", args.output.display());
        Ok(())
    })
}
