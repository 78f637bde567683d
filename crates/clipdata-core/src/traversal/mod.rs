//! Dataset traversal
//!
//! Identity indexing over the category tree, shared by every stage that
//! needs to know where a leaf lives.

pub mod index;

pub use index::{IndexEntry, LeafIndex};
