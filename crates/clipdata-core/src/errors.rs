use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure a pipeline stage can surface is classified into one of
/// these kinds. Each kind maps to a stable error code that tests and the
/// CLI can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    /// A source file does not exist
    InputNotFound,
    /// A source file is not valid JSON
    MalformedJson,
    /// A document parsed but does not have the expected dataset shape
    SchemaMismatch,
    /// A lookup (Unicode name, mapping target, reference branch) has no answer
    UnresolvableLookup,
    /// Arguments or configuration are inconsistent
    InvalidInput,

    // Verification
    /// A verifier found the dataset violating one of its invariants
    VerificationFailed,

    // Output
    /// The destination could not be created or written
    WriteFailed,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InputNotFound => "ERR_INPUT_NOT_FOUND",
            ExErrorKind::MalformedJson => "ERR_MALFORMED_JSON",
            ExErrorKind::SchemaMismatch => "ERR_SCHEMA_MISMATCH",
            ExErrorKind::UnresolvableLookup => "ERR_UNRESOLVABLE_LOOKUP",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::VerificationFailed => "ERR_VERIFICATION_FAILED",
            ExErrorKind::WriteFailed => "ERR_WRITE_FAILED",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether a batch command may skip the offending file and continue
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InputNotFound | ExErrorKind::MalformedJson | ExErrorKind::SchemaMismatch
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus enough context (operation, file path,
/// parse position) for the operator to find and fix the problem.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    line: Option<usize>,
    column: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            line: None,
            column: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add parse position context (1-based line and column)
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get the parse position, if any
    pub fn position(&self) -> Option<(usize, usize)> {
        self.line.zip(self.column)
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        if let Some((line, column)) = self.position() {
            write!(f, " (line {}, column {})", line, column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised while curating a dataset
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurationError {
    /// The character has no Unicode name (unassigned, control, private use)
    #[error("No Unicode name for {codepoint}")]
    NoUnicodeName { codepoint: String },

    /// A symbol entry is not exactly one Unicode scalar value
    #[error("Symbol {symbol:?} is not a single character")]
    NotSingleChar { symbol: String },

    /// A mapping rule names a main category the base dataset lacks
    #[error("Main category not found: {category}")]
    UnknownCategory { category: String },

    /// Unknown dataset kind name
    #[error("Unknown dataset kind: {name}")]
    UnknownKind { name: String },

    /// The document does not have the dataset shape
    #[error("Schema mismatch: {reason}")]
    SchemaMismatch { reason: String },
}

impl From<CurationError> for ExError {
    fn from(err: CurationError) -> Self {
        match err {
            CurationError::NoUnicodeName { codepoint } => {
                ExError::new(ExErrorKind::UnresolvableLookup)
                    .with_op("char_name")
                    .with_message(format!("No Unicode name for {}", codepoint))
            }

            CurationError::NotSingleChar { symbol } => {
                ExError::new(ExErrorKind::UnresolvableLookup)
                    .with_op("annotate_symbol")
                    .with_message(format!("{:?} is not a single character", symbol))
            }

            CurationError::UnknownCategory { category } => {
                ExError::new(ExErrorKind::UnresolvableLookup)
                    .with_message(format!("Main category '{}' not found", category))
            }

            CurationError::UnknownKind { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Unknown dataset kind '{}'", name)),

            CurationError::SchemaMismatch { reason } => {
                ExError::new(ExErrorKind::SchemaMismatch).with_message(reason)
            }
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_io() {
            ExErrorKind::Io
        } else if err.is_data() {
            ExErrorKind::Serialization
        } else {
            ExErrorKind::MalformedJson
        };
        let ex = ExError::new(kind).with_message(err.to_string());
        if err.line() > 0 {
            ex.with_location(err.line(), err.column())
        } else {
            ex
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_op_and_path() {
        let err = ExError::new(ExErrorKind::InputNotFound)
            .with_op("load_dataset")
            .with_path("build/kaomojis/kaomojis.json")
            .with_message("source file not found");

        let text = err.to_string();
        assert!(text.starts_with("[ERR_INPUT_NOT_FOUND]"));
        assert!(text.contains("load_dataset"));
        assert!(text.contains("kaomojis.json"));
    }

    #[test]
    fn test_serde_json_syntax_error_carries_position() {
        let err: ExError = serde_json::from_str::<serde_json::Value>("[1,\n  oops]")
            .unwrap_err()
            .into();

        assert_eq!(err.kind(), ExErrorKind::MalformedJson);
        assert_eq!(err.position().map(|(line, _)| line), Some(2));
    }

    #[test]
    fn test_per_file_kinds() {
        assert!(ExErrorKind::MalformedJson.is_per_file());
        assert!(ExErrorKind::InputNotFound.is_per_file());
        assert!(!ExErrorKind::WriteFailed.is_per_file());
    }
}
