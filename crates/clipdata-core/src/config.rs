//! Pipeline configuration
//!
//! Every stage receives its settings explicitly. Paths are only computed
//! here; reading the files they point to is the store's job.

use crate::errors::{ExError, ExErrorKind, Result};
use crate::model::{DatasetKind, UniquenessScope};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Indentation of intermediate build files
pub const DEFAULT_INDENT: usize = 4;

/// Indentation of cleaned, formatted and exported files
pub const COMPACT_INDENT: usize = 2;

/// Build directory under the project root
pub const BUILD_DIR: &str = "build";

/// Extension directory under the project root
pub const EXTENSION_DIR: &str = "extension";

/// Export source overrides, relative to the build directory
pub const EXPORT_CONFIG_FILE: &str = "json_final_config.json";

/// General categories removed by the invisible-character cleaner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion(BTreeSet<String>);

impl Exclusion {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(codes.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Exclusion {
    /// Control and format characters
    fn default() -> Self {
        Self::new(["Cc", "Cf"])
    }
}

impl FromStr for Exclusion {
    type Err = ExError;

    /// Comma-separated two-letter codes, e.g. `Cc,Cf,Zs`
    fn from_str(s: &str) -> Result<Self> {
        let codes: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        if let Some(bad) = codes.iter().find(|c| c.chars().count() != 2) {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_exclusion")
                .with_message(format!("'{}' is not a two-letter category code", bad)));
        }
        Ok(Self::new(codes))
    }
}

/// Settings shared by every stage of one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub project_root: PathBuf,
    pub indent: usize,
    pub scope: UniquenessScope,
    pub exclusion: Exclusion,
}

impl PipelineConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            indent: DEFAULT_INDENT,
            scope: UniquenessScope::Global,
            exclusion: Exclusion::default(),
        }
    }

    /// Defaults for one dataset kind (its uniqueness scope)
    pub fn for_kind(project_root: impl Into<PathBuf>, kind: DatasetKind) -> Self {
        Self::new(project_root).with_scope(kind.default_scope())
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_scope(mut self, scope: UniquenessScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn build_dir(&self) -> PathBuf {
        self.project_root.join(BUILD_DIR)
    }

    /// `build/<kind>s/`
    pub fn kind_dir(&self, kind: DatasetKind) -> PathBuf {
        self.build_dir().join(kind.directory_name())
    }

    pub fn extension_dir(&self) -> PathBuf {
        self.project_root.join(EXTENSION_DIR)
    }

    pub fn extension_metadata_path(&self) -> PathBuf {
        self.extension_dir().join("metadata.json")
    }

    pub fn export_config_path(&self) -> PathBuf {
        self.build_dir().join(EXPORT_CONFIG_FILE)
    }

    /// `extension/data/<kind>s.json`
    pub fn default_export_output(&self, kind: DatasetKind) -> PathBuf {
        self.extension_dir().join("data").join(kind.export_file_name())
    }
}

/// Contents of `json_final_config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub default_sources: BTreeMap<String, String>,
}

impl ExportConfig {
    /// # Errors
    ///
    /// Returns `SchemaMismatch` if the value does not have the
    /// `{"default_sources": {...}}` shape.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| {
            ExError::new(ExErrorKind::SchemaMismatch)
                .with_op("load_export_config")
                .with_message(e.to_string())
        })
    }

    /// Configured source file name, or the kind's built-in default
    pub fn source_for(&self, kind: DatasetKind) -> &str {
        self.default_sources
            .get(kind.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_source_file())
    }

    /// Resolve the exporter input.
    ///
    /// No input picks the configured source in the kind's build directory;
    /// a bare file name is looked up in that same directory; anything with a
    /// directory component is taken as given.
    pub fn resolve_input(
        &self,
        config: &PipelineConfig,
        kind: DatasetKind,
        input: Option<&Path>,
    ) -> PathBuf {
        match input {
            None => config.kind_dir(kind).join(self.source_for(kind)),
            Some(path) if is_bare_file_name(path) => config.kind_dir(kind).join(path),
            Some(path) => path.to_path_buf(),
        }
    }
}

fn is_bare_file_name(path: &Path) -> bool {
    !path.is_absolute() && path.components().count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exclusion_parsing() {
        let ex: Exclusion = "Cc, Cf,Zs".parse().unwrap();
        assert!(ex.contains("Zs"));
        assert_eq!(ex.codes().count(), 3);
        assert!("Cc,Control".parse::<Exclusion>().is_err());
    }

    #[test]
    fn test_kind_defaults() {
        let config = PipelineConfig::for_kind("/p", DatasetKind::Symbol);
        assert_eq!(config.scope, UniquenessScope::Branch);
        assert_eq!(config.indent, DEFAULT_INDENT);
        assert_eq!(
            config.default_export_output(DatasetKind::Kaomoji),
            PathBuf::from("/p/extension/data/kaomojis.json")
        );
    }

    #[test]
    fn test_export_config_overrides_default_source() {
        let export =
            ExportConfig::from_value(&json!({"default_sources": {"emoji": "custom.json"}})).unwrap();
        assert_eq!(export.source_for(DatasetKind::Emoji), "custom.json");
        assert_eq!(
            export.source_for(DatasetKind::Kaomoji),
            "kaomojis_cleaned.json"
        );
    }

    #[test]
    fn test_resolve_input() {
        let config = PipelineConfig::new("/p");
        let export = ExportConfig::default();

        assert_eq!(
            export.resolve_input(&config, DatasetKind::Symbol, None),
            PathBuf::from("/p/build/symbols/symbols_detailed.json")
        );
        assert_eq!(
            export.resolve_input(&config, DatasetKind::Symbol, Some(Path::new("other.json"))),
            PathBuf::from("/p/build/symbols/other.json")
        );
        assert_eq!(
            export.resolve_input(&config, DatasetKind::Symbol, Some(Path::new("tmp/x.json"))),
            PathBuf::from("tmp/x.json")
        );
    }

    #[test]
    fn test_malformed_export_config() {
        let err = ExportConfig::from_value(&json!({"default_sources": ["x"]})).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::SchemaMismatch);
    }
}
