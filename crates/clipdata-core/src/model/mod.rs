//! Typed dataset model
//!
//! All three datasets share one shape: an ordered list of categories, each
//! holding either leaves directly (emoji, symbol) or named sub-categories
//! of leaves (kaomoji). Conversion from and to `serde_json::Value` keeps
//! unknown keys and their document order.

pub mod dataset;
pub mod kind;
pub mod leaf;

pub use dataset::{Branch, BranchMut, Category, Children, Dataset, Location, SchemaWarning, SubCategory};
pub use kind::{Attribution, DatasetKind, UniquenessScope};
pub use leaf::Leaf;
