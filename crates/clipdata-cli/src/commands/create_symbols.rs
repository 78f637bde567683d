//! Create-symbols command
//!
//! Usage: clipdata create-symbols [--source <DIR>] [--output <FILE>]

use super::{run_logged, CommandResult};
use clap::Args;
use clipdata_core::config::DEFAULT_INDENT;
use clipdata_core::errors::ExErrorKind;
use clipdata_core::merge::{category_name_from_file, create_symbols, SYMBOL_SOURCE_FILES};
use clipdata_core::{log_skip, DatasetKind, PipelineConfig};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CreateSymbolsArgs {
    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Directory of vendor text lists (default: build/symbols/source)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output file (default: build/symbols/symbols.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

/// Execute create-symbols command
pub fn execute(args: CreateSymbolsArgs) -> CommandResult {
    let config = PipelineConfig::for_kind(&args.root, DatasetKind::Symbol).with_indent(args.indent);
    let kind_dir = config.kind_dir(DatasetKind::Symbol);
    let source_dir = args.source.unwrap_or_else(|| kind_dir.join("source"));
    let output = args.output.unwrap_or_else(|| kind_dir.join("symbols.json"));

    run_logged("create_symbols", || {
        let mut sources = Vec::new();
        for file_name in SYMBOL_SOURCE_FILES {
            let path = source_dir.join(file_name);
            match clipdata_store::read_text(&path) {
                Ok(text) => sources.push((category_name_from_file(file_name), text)),
                Err(e) if e.kind() == ExErrorKind::InputNotFound => {
                    log_skip!("create_symbols", "source file not found", path = %path.display());
                    println!("⚠ Source file not found, skipping: {}", path.display());
                }
                Err(e) => return Err(e),
            }
        }

        let dataset = create_symbols(&sources);
        for category in &dataset.categories {
            let count = dataset
                .branch(&clipdata_core::Location::top(&category.name))
                .map(<[_]>::len)
                .unwrap_or(0);
            println!("  {}: {} symbol(s)", category.name, count);
        }

        clipdata_store::write_json(&output, &dataset.to_json(), config.indent)?;
        println!(
            "✓ Wrote {} categories to {}",
            dataset.categories.len(),
            output.display()
        );
        Ok(())
    })
}
