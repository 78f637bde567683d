//! Export command
//!
//! Usage: clipdata export --type <TYPE> [--input <FILE>] [--output <FILE>]
//!
//! Without `--input` the source comes from `build/json_final_config.json`
//! or the kind's default file; a bare file name is looked up in the kind's
//! build directory.

use super::{run_logged, CommandResult};
use clap::Args;
use clipdata_core::config::COMPACT_INDENT;
use clipdata_core::export::{assemble, ExtensionInfo};
use clipdata_core::{DatasetKind, ExportConfig, PipelineConfig};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    #[arg(long = "type", value_name = "TYPE")]
    pub kind: DatasetKind,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (default: extension/data/<kind>s.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = COMPACT_INDENT)]
    pub indent: usize,
}

/// Execute export command
pub fn execute(args: ExportArgs) -> CommandResult {
    let config = PipelineConfig::for_kind(&args.root, args.kind).with_indent(args.indent);

    run_logged("export", || {
        let export_config = match clipdata_store::try_load_json(&config.export_config_path()) {
            Some(value) => ExportConfig::from_value(&value).unwrap_or_else(|e| {
                tracing::warn!(err.code = e.code(), "ignoring export config: {}", e);
                ExportConfig::default()
            }),
            None => ExportConfig::default(),
        };
        let input = export_config.resolve_input(&config, args.kind, args.input.as_deref());
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| config.default_export_output(args.kind));

        println!("Reading {}", input.display());
        let data = clipdata_store::load_json(&input)?;
        let extension_info = clipdata_store::try_load_json(&config.extension_metadata_path())
            .and_then(|metadata| ExtensionInfo::from_metadata(&metadata));
        if extension_info.is_none() {
            println!("⚠ Extension metadata not available; extension_info is null");
        }

        let envelope = assemble(args.kind, data, extension_info)?;
        clipdata_store::write_json(&output, &envelope, config.indent)?;
        println!(
            "✓ Exported {} (version {}) to {}",
            args.kind,
            envelope.metadata.data_version,
            output.display()
        );
        Ok(())
    })
}
