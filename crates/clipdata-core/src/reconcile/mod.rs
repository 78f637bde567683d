//! Set reconciliation between dataset versions.
//!
//! Compares identity sets and screens candidate leaves against a master
//! set. Everything here is pure: inputs are never mutated except through
//! the explicit [`SeenSet::admit`].
//!
//! ## Entry point
//!
//! ```ignore
//! use clipdata_core::reconcile::{reconcile, render_reconciliation};
//!
//! let result = reconcile(&reference_index, &target_index);
//! println!("{}", render_reconciliation(&result));
//! ```

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::{reconcile, SeenSet};
pub use human_summary::{render_duplicates, render_reconciliation};
pub use model::{Duplicate, LeafRef, Reconciliation, Screened};
