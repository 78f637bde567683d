//! Tree transformations
//!
//! Each stage takes a parsed dataset and returns a new one together with a
//! structured report. Nothing here reads or writes files.

pub mod clean;
pub mod dedup;
pub mod enrich;
pub mod rebuild;
pub mod sort;

pub use clean::{clean_dataset, CleanReport, Cleaned};
pub use dedup::{deduplicate, DedupReport};
pub use enrich::{enrich, slug, EnrichReport, Skipped};
pub use rebuild::{rebuild, RebuildReport};
pub use sort::{sort_by_codepoint, verify_order, BranchOrder, OrderStatus};
