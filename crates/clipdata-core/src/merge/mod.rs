//! Build datasets from plain-text vendor sources.
//!
//! Source files are read by the caller; these functions only see their
//! names and contents.

pub mod kaomoji;
pub mod symbols;

pub use kaomoji::{default_rules, expand_kaomoji, rules_from_value, source_lines, ExpandReport, MappingRule};
pub use symbols::{category_name_from_file, create_symbols, SYMBOL_SOURCE_FILES};
