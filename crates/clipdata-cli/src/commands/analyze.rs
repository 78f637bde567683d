//! Analyze command
//!
//! Usage: clipdata analyze <PATH>... [--recursive]

use super::{batch_files, is_single_file, run_logged, CommandResult};
use clap::Args;
use clipdata_core::log_skip;
use clipdata_core::render::{analyze, render_shape};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// JSON files, or directories with --recursive
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Analyze every JSON file under the given directories
    #[arg(short, long)]
    pub recursive: bool,
}

/// Execute analyze command
pub fn execute(args: AnalyzeArgs) -> CommandResult {
    run_logged("analyze", || {
        let single = is_single_file(&args.paths);
        for file in batch_files(&args.paths, args.recursive)? {
            println!("--- Structure of {} ---", file.display());
            match clipdata_store::load_json(&file) {
                Ok(value) => print!("{}", render_shape(&analyze(&value))),
                Err(e) if !single && e.kind().is_per_file() => {
                    log_skip!("analyze", e, path = %file.display());
                    println!("✗ {}", e);
                }
                Err(e) => return Err(e),
            }
            println!();
        }
        Ok(())
    })
}
