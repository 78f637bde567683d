//! Reconciliation output types.
//!
//! All lists are sorted so the same inputs always serialize identically.

use serde::Serialize;
use std::fmt;

/// An identity and the path where it lives.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct LeafRef {
    pub identity: String,
    pub location: String,
}

impl LeafRef {
    pub fn new(identity: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            location: location.into(),
        }
    }
}

/// Membership delta between a reference and a target dataset.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Reconciliation {
    /// In the reference but not the target, with the reference location
    pub missing: Vec<LeafRef>,
    /// In the target but not the reference, with the target location
    pub added: Vec<LeafRef>,
}

impl Reconciliation {
    /// True when nothing from the reference was lost
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// A leaf rejected because its identity was already seen.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Duplicate {
    pub identity: String,
    pub location: String,
    pub first_seen: String,
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' in '{}' is a duplicate. First seen in '{}'.",
            self.identity, self.location, self.first_seen
        )
    }
}

/// Outcome of screening a batch of candidates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screened {
    /// Candidates not yet seen, in input order
    pub fresh: Vec<String>,
    pub duplicates: Vec<Duplicate>,
}
