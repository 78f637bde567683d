//! Verify-order command
//!
//! Usage: clipdata verify-order <INPUT> --type <TYPE>

use super::{load_dataset, run_logged, verification_failed, CommandResult};
use clap::Args;
use clipdata_core::ops::{verify_order, BranchOrder};
use clipdata_core::DatasetKind;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct VerifyOrderArgs {
    pub input: PathBuf,

    #[arg(long = "type", value_name = "TYPE")]
    pub kind: DatasetKind,
}

/// Execute verify-order command
pub fn execute(args: VerifyOrderArgs) -> CommandResult {
    run_logged("verify_order", || {
        let dataset = load_dataset("verify_order", args.kind, &args.input)?;

        let mut unsorted = 0;
        for status in verify_order(&dataset) {
            match &status.order {
                BranchOrder::Sorted => println!("✓ '{}' is sorted", status.location),
                BranchOrder::Empty => println!("- '{}' is empty", status.location),
                BranchOrder::Unsorted {
                    position,
                    before,
                    after,
                } => {
                    unsorted += 1;
                    println!(
                        "✗ '{}' is not sorted: {:?} at position {} comes before {:?}",
                        status.location, before, position, after
                    );
                }
            }
        }

        if unsorted > 0 {
            return Err(verification_failed(
                "verify_order",
                format!("{} branch(es) are not sorted by codepoint", unsorted),
            ));
        }
        println!("All branches are sorted.");
        Ok(())
    })
}
