//! Dataset kinds and their per-kind conventions.

use crate::errors::CurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three datasets the picker ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Emoji,
    Kaomoji,
    Symbol,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [DatasetKind::Emoji, DatasetKind::Kaomoji, DatasetKind::Symbol];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Emoji => "emoji",
            DatasetKind::Kaomoji => "kaomoji",
            DatasetKind::Symbol => "symbol",
        }
    }

    /// Key holding a branch's leaves
    pub fn leaves_key(&self) -> &'static str {
        match self {
            DatasetKind::Emoji => "emojis",
            DatasetKind::Kaomoji => "emoticons",
            DatasetKind::Symbol => "symbols",
        }
    }

    /// Key holding a category's sub-categories, for nested kinds only
    pub fn sub_categories_key(&self) -> Option<&'static str> {
        match self {
            DatasetKind::Kaomoji => Some("categories"),
            DatasetKind::Emoji | DatasetKind::Symbol => None,
        }
    }

    pub fn is_nested(&self) -> bool {
        self.sub_categories_key().is_some()
    }

    /// Field carrying the identity string of a detailed leaf record
    pub fn identity_field(&self) -> &'static str {
        match self {
            DatasetKind::Emoji => "emoji",
            DatasetKind::Kaomoji => "kaomoji",
            DatasetKind::Symbol => "symbol",
        }
    }

    /// Build directory holding this kind's intermediate files
    pub fn directory_name(&self) -> &'static str {
        match self {
            DatasetKind::Emoji => "emojis",
            DatasetKind::Kaomoji => "kaomojis",
            DatasetKind::Symbol => "symbols",
        }
    }

    /// File name of the finalized export (`emojis.json`, ...)
    pub fn export_file_name(&self) -> String {
        format!("{}s.json", self.as_str())
    }

    /// Intermediate file the exporter reads when nothing else is configured
    pub fn default_source_file(&self) -> &'static str {
        match self {
            DatasetKind::Emoji => "emojis_detailed.json",
            DatasetKind::Kaomoji => "kaomojis_cleaned.json",
            DatasetKind::Symbol => "symbols_detailed.json",
        }
    }

    /// Symbols may legitimately repeat across Unicode blocks; the other
    /// datasets require a leaf to appear once in the whole tree.
    pub fn default_scope(&self) -> UniquenessScope {
        match self {
            DatasetKind::Emoji | DatasetKind::Kaomoji => UniquenessScope::Global,
            DatasetKind::Symbol => UniquenessScope::Branch,
        }
    }

    pub fn attribution(&self) -> Attribution {
        match self {
            DatasetKind::Emoji => Attribution {
                provider: "Unicode Consortium".to_string(),
                url: "https://unicode.org/emoji/charts/full-emoji-list.html".to_string(),
                notes: "Data is derived from Unicode emoji charts and enriched with additional metadata.".to_string(),
            },
            DatasetKind::Kaomoji => Attribution {
                provider: "Various (Google, Microsoft, etc.)".to_string(),
                url: "https://github.com/NiffirgkcaJ/all-in-one-clipboard".to_string(),
                notes: "Kaomojis are aggregated from various public sources.".to_string(),
            },
            DatasetKind::Symbol => Attribution {
                provider: "Various (Microsoft, Unicode, etc.)".to_string(),
                url: "https://github.com/NiffirgkcaJ/all-in-one-clipboard".to_string(),
                notes: "Symbols are aggregated from various public sources and Unicode standards.".to_string(),
            },
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = CurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emoji" | "emojis" => Ok(DatasetKind::Emoji),
            "kaomoji" | "kaomojis" => Ok(DatasetKind::Kaomoji),
            "symbol" | "symbols" => Ok(DatasetKind::Symbol),
            _ => Err(CurationError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Range within which leaf identities must be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniquenessScope {
    /// Once across the whole tree
    Global,
    /// Once per category (flat kinds) or sub-category (kaomoji)
    Branch,
    /// No uniqueness enforced
    Off,
}

/// Static provenance block embedded in the export envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub provider: String,
    pub url: String,
    pub notes: String,
}
