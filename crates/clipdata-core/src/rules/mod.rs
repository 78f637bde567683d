//! Dataset invariants and their validation.

pub mod invariants;
pub mod validation;

pub use invariants::{find_empty_branches, find_scope_violations, find_structure_issues, StructureIssue};
pub use validation::{validate_dataset, Violation};
