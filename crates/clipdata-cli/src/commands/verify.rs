//! Verify command
//!
//! Usage: clipdata verify <REFERENCE> <TARGET> --type <TYPE>
//!
//! Fails when the target lost any leaf of the reference; leaves only the
//! target has are listed but do not fail.

use super::{load_dataset, run_logged, verification_failed, CommandResult};
use clap::Args;
use clipdata_core::reconcile::{reconcile, render_reconciliation};
use clipdata_core::{DatasetKind, LeafIndex};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Dataset every leaf must survive from
    pub reference: PathBuf,

    /// Dataset under test
    pub target: PathBuf,

    #[arg(long = "type", value_name = "TYPE")]
    pub kind: DatasetKind,
}

/// Execute verify command
pub fn execute(args: VerifyArgs) -> CommandResult {
    run_logged("verify", || {
        let reference = load_dataset("verify", args.kind, &args.reference)?;
        let target = load_dataset("verify", args.kind, &args.target)?;

        let result = reconcile(&LeafIndex::build(&reference), &LeafIndex::build(&target));
        print!("{}", render_reconciliation(&result));

        if !result.is_complete() {
            return Err(verification_failed(
                "verify",
                format!("{} item(s) missing from {}", result.missing.len(), args.target.display()),
            ));
        }
        Ok(())
    })
}
