//! clipdata CLI
//!
//! Command-line interface for the dataset curation pipeline

use clap::{Parser, Subcommand};
use clipdata_core::logging_facility::{init_with_level, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "clipdata")]
#[command(about = "Curate the emoji, kaomoji and symbol datasets", long_about = None)]
struct Cli {
    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Re-serialize JSON files with a fixed indentation
    Format(commands::format::FormatArgs),
    /// Print the key/type structure of JSON files
    Analyze(commands::analyze::AnalyzeArgs),
    /// Build the symbol dataset from vendor text lists
    CreateSymbols(commands::create_symbols::CreateSymbolsArgs),
    /// Merge vendor kaomoji lists into the base dataset
    Expand(commands::expand::ExpandArgs),
    /// Strip invisible characters from leaf identities
    Clean(commands::clean::CleanArgs),
    /// Remove repeated leaves
    Dedup(commands::dedup::DedupArgs),
    /// Sort every branch by codepoint
    Sort(commands::sort::SortArgs),
    /// Check that every branch is sorted by codepoint
    VerifyOrder(commands::verify_order::VerifyOrderArgs),
    /// Check the shape and invariants of a dataset
    VerifyStructure(commands::verify_structure::VerifyStructureArgs),
    /// Check that a dataset still contains every leaf of a reference
    Verify(commands::verify::VerifyArgs),
    /// Rebuild a dataset in the order of a reference
    Reorder(commands::reorder::ReorderArgs),
    /// Attach derived Unicode metadata
    Enrich(commands::enrich::EnrichArgs),
    /// Wrap a dataset in its export envelope
    Export(commands::export::ExportArgs),
    /// Extract translatable strings into a gettext template
    Pot(commands::pot::PotArgs),
}

fn main() {
    let cli = Cli::parse();

    let profile = if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    };
    init_with_level(profile, if cli.verbose { "debug" } else { "info" });

    let result = match cli.command {
        Commands::Format(args) => commands::format::execute(args),
        Commands::Analyze(args) => commands::analyze::execute(args),
        Commands::CreateSymbols(args) => commands::create_symbols::execute(args),
        Commands::Expand(args) => commands::expand::execute(args),
        Commands::Clean(args) => commands::clean::execute(args),
        Commands::Dedup(args) => commands::dedup::execute(args),
        Commands::Sort(args) => commands::sort::execute(args),
        Commands::VerifyOrder(args) => commands::verify_order::execute(args),
        Commands::VerifyStructure(args) => commands::verify_structure::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
        Commands::Reorder(args) => commands::reorder::execute(args),
        Commands::Enrich(args) => commands::enrich::execute(args),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Pot(args) => commands::pot::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
