//! clipdata core - dataset curation kernel
//!
//! This crate holds everything the build pipeline does to the emoji,
//! kaomoji and symbol datasets, independent of where the files live:
//! - Typed dataset model over the two-level category tree
//! - Identity indexing and set reconciliation between dataset versions
//! - Tree transformations (dedup, rebuild, codepoint sort, clean, enrich)
//! - Invariant checks on raw and parsed datasets
//! - Vendor source mergers, export envelope and translation template
//!
//! Filesystem access lives in `clipdata-store`; the command line in
//! `clipdata-cli`.

pub mod config;
pub mod errors;
pub mod export;
pub mod logging_facility;
pub mod merge;
pub mod model;
pub mod ops;
pub mod reconcile;
pub mod render;
pub mod rules;
pub mod traversal;
pub mod unicode;

// Re-export commonly used types
pub use config::{Exclusion, ExportConfig, PipelineConfig};
pub use errors::{CurationError, ExError, ExErrorKind, Result};
pub use model::{Dataset, DatasetKind, Leaf, Location, UniquenessScope};
pub use traversal::LeafIndex;
