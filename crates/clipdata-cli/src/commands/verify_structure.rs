//! Verify-structure command
//!
//! Usage: clipdata verify-structure <INPUT> --type <TYPE> [--scope <SCOPE>]

use super::{run_logged, scope_for, verification_failed, CommandResult, ScopeArg};
use clap::Args;
use clipdata_core::rules::validate_dataset;
use clipdata_core::DatasetKind;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct VerifyStructureArgs {
    pub input: PathBuf,

    #[arg(long = "type", value_name = "TYPE")]
    pub kind: DatasetKind,

    /// Uniqueness policy to check (default: per kind)
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,
}

/// Execute verify-structure command
pub fn execute(args: VerifyStructureArgs) -> CommandResult {
    run_logged("verify_structure", || {
        let raw = clipdata_store::load_json(&args.input)?;
        let violations = validate_dataset(args.kind, &raw, scope_for(args.kind, args.scope));

        if violations.is_empty() {
            println!("✓ {} is a valid {} dataset", args.input.display(), args.kind);
            return Ok(());
        }
        println!("Found {} issue(s):", violations.len());
        for violation in &violations {
            println!("  - {}", violation);
        }
        Err(verification_failed(
            "verify_structure",
            format!("{} structure issue(s)", violations.len()),
        ))
    })
}
