//! Expand command
//!
//! Usage: clipdata expand [--base <FILE>] [--source <DIR>] [--rules <FILE>] [--output <FILE>]

use super::{load_dataset, run_logged, CommandResult};
use clap::Args;
use clipdata_core::config::DEFAULT_INDENT;
use clipdata_core::errors::ExErrorKind;
use clipdata_core::merge::{default_rules, expand_kaomoji, rules_from_value, source_lines};
use clipdata_core::reconcile::render_duplicates;
use clipdata_core::{DatasetKind, PipelineConfig};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Base dataset (default: build/kaomojis/kaomojis_original.json)
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// Directory of vendor text lists (default: build/kaomojis/source)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// JSON file of mapping rules replacing the built-in table
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Output file (default: build/kaomojis/kaomojis_simple_expanded.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

/// Execute expand command
pub fn execute(args: ExpandArgs) -> CommandResult {
    let kind = DatasetKind::Kaomoji;
    let config = PipelineConfig::for_kind(&args.root, kind).with_indent(args.indent);
    let kind_dir = config.kind_dir(kind);
    let base_path = args
        .base
        .unwrap_or_else(|| kind_dir.join("kaomojis_original.json"));
    let source_dir = args.source.unwrap_or_else(|| kind_dir.join("source"));
    let output = args
        .output
        .unwrap_or_else(|| kind_dir.join("kaomojis_simple_expanded.json"));

    run_logged("expand", || {
        let base = load_dataset("expand", kind, &base_path)?;
        let rules = match &args.rules {
            Some(path) => rules_from_value(&clipdata_store::load_json(path)?)?,
            None => default_rules(),
        };

        let mut sources = BTreeMap::new();
        for file_name in rules.iter().flat_map(|r| r.sources.iter()) {
            if sources.contains_key(file_name) {
                continue;
            }
            match clipdata_store::read_text(&source_dir.join(file_name)) {
                Ok(text) => {
                    sources.insert(file_name.clone(), source_lines(&text));
                }
                Err(e) if e.kind() == ExErrorKind::InputNotFound => {}
                Err(e) => return Err(e),
            }
        }

        let (expanded, report) = expand_kaomoji(&base, &rules, &sources)?;

        for file_name in &report.missing_sources {
            println!("⚠ Source file not found: {}", file_name);
        }
        for rule in &report.unresolved {
            println!("⚠ Main category not found: {}", rule);
        }
        for created in &report.created {
            println!("+ Created sub-category {}", created);
        }
        if !report.duplicates.is_empty() {
            print!("{}", render_duplicates(&report.duplicates));
        }
        println!("Added {} new kaomoji(s)", report.added.len());

        clipdata_store::write_json(&output, &expanded.to_json(), config.indent)?;
        println!("✓ Saved to {}", output.display());
        Ok(())
    })
}
