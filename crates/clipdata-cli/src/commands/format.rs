//! Format command
//!
//! Usage: clipdata format <PATH>... [--indent <N>] [--output <FILE>] [--recursive]

use super::{batch_files, is_single_file, run_logged, CommandResult};
use clap::Args;
use clipdata_core::config::COMPACT_INDENT;
use clipdata_core::errors::{ExError, ExErrorKind, Result};
use clipdata_core::log_skip;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// JSON files, or directories with --recursive
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Spaces per indentation level
    #[arg(long, default_value_t = COMPACT_INDENT)]
    pub indent: usize,

    /// Write here instead of in place (single input file only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Process every JSON file under the given directories
    #[arg(short, long)]
    pub recursive: bool,
}

/// Execute format command
pub fn execute(args: FormatArgs) -> CommandResult {
    run_logged("format", || {
        let files = batch_files(&args.paths, args.recursive)?;
        let single = is_single_file(&args.paths);
        if args.output.is_some() && !single {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("format")
                .with_message("--output can only be used with a single input file"));
        }

        let mut formatted = 0;
        for file in &files {
            let destination = args.output.as_deref().unwrap_or(file);
            match format_file(file, destination, args.indent) {
                Ok(()) => {
                    formatted += 1;
                    println!("✓ Formatted {}", destination.display());
                }
                Err(e) if !single && e.kind().is_per_file() => {
                    log_skip!("format", e, path = %file.display());
                    println!("✗ Skipped {}: {}", file.display(), e);
                }
                Err(e) => return Err(e),
            }
        }
        println!("Formatted {} of {} file(s)", formatted, files.len());
        Ok(())
    })
}

fn format_file(source: &Path, destination: &Path, indent: usize) -> Result<()> {
    let value = clipdata_store::load_json(source)?;
    clipdata_store::write_json(destination, &value, indent)
}
