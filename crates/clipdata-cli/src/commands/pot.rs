//! Pot command
//!
//! Usage: clipdata pot <OUTPUT> <DATA_DIR>

use super::{run_logged, CommandResult};
use clap::Args;
use clipdata_core::errors::{ExError, ExErrorKind};
use clipdata_core::log_skip;
use clipdata_core::render::{collect_strings, render_pot, POT_SOURCE_FILES};
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PotArgs {
    /// Template file to write
    pub output: PathBuf,

    /// Directory holding the exported data files
    pub data_dir: PathBuf,
}

/// Execute pot command
pub fn execute(args: PotArgs) -> CommandResult {
    run_logged("pot", || {
        let mut strings = BTreeSet::new();
        for (file_name, kind) in POT_SOURCE_FILES {
            let path = args.data_dir.join(file_name);
            let document = match clipdata_store::load_json(&path) {
                Ok(document) => document,
                Err(e) if e.kind() == ExErrorKind::InputNotFound => {
                    log_skip!("pot", "data file not found", path = %path.display());
                    println!("⚠ '{}' not found, skipping.", path.display());
                    continue;
                }
                Err(e) if e.kind().is_per_file() => {
                    log_skip!("pot", e, path = %path.display());
                    println!("✗ Error processing '{}': {}", path.display(), e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            match document.get("data") {
                Some(data) => collect_strings(kind, data, &mut strings),
                None => {
                    let e = ExError::new(ExErrorKind::SchemaMismatch)
                        .with_op("pot")
                        .with_path(&path)
                        .with_message("no 'data' key; is the file exported?");
                    log_skip!("pot", e, path = %path.display());
                    println!("✗ {}", e);
                }
            }
        }

        let text = render_pot(&strings);
        clipdata_store::atomic_write(&args.output, text.as_bytes())?;
        println!("✓ Extracted {} string(s) to {}", strings.len(), args.output.display());
        Ok(())
    })
}
