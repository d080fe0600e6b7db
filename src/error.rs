use std::{
    fmt,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Error types for loading and validating build configurations.
///
/// Variants fall into three families: load errors (the file could not be
/// read or parsed), schema errors (the document parsed but does not describe
/// a valid configuration) and serialization errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The file content is not syntactically valid for its format
    #[error("failed to parse {location} at line {line}, column {column}: {details}")]
    Parse {
        /// File path, or "string" for in-memory sources
        location: String,
        /// One-based line of the offending input
        line: usize,
        /// One-based column of the offending input
        column: usize,
        /// Parser message
        details: String,
    },

    /// The file extension does not map to a known configuration format
    #[error("unsupported configuration format for '{path}' (expected .js, .cjs, .mjs, .json or .toml)")]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },

    /// No conventional configuration file exists in a directory
    #[error("no configuration file found in '{dir}'")]
    NotFound {
        /// Directory that was searched
        dir: PathBuf,
    },

    /// A required key is absent
    #[error("missing required key '{key}'")]
    MissingKey {
        /// Dotted path of the missing key
        key: String,
    },

    /// A value lies outside its enumerated domain
    #[error("invalid value for '{key}': got {actual}, expected one of: {}", quote_all(.expected))]
    InvalidValue {
        /// Dotted path of the offending key
        key: String,
        /// The value found in the document
        actual: String,
        /// Every permitted value
        expected: Vec<String>,
    },

    /// A value has the wrong shape
    #[error("invalid type for '{key}': expected {expected}, found {actual}")]
    InvalidType {
        /// Dotted path of the offending key
        key: String,
        /// Expected kind of value
        expected: String,
        /// Kind of value found
        actual: String,
    },

    /// A sequence that must hold at least one element is empty
    #[error("'{key}' must not be empty")]
    EmptySequence {
        /// Dotted path of the empty sequence
        key: String,
    },

    /// A key occurs more than once in the same mapping
    #[error("duplicate key '{key}'")]
    DuplicateKey {
        /// Dotted path of the repeated key
        key: String,
    },

    /// A key is not part of the schema
    #[error("unknown key '{key}', expected one of: {}", quote_all(.permitted))]
    UnknownKey {
        /// Dotted path of the unknown key
        key: String,
        /// Keys permitted at that level
        permitted: Vec<String>,
    },

    /// A content pattern is not a valid glob
    #[error("invalid glob '{pattern}' in '{key}': {details}")]
    InvalidGlob {
        /// Dotted path of the pattern
        key: String,
        /// The pattern text
        pattern: String,
        /// Glob compiler message
        details: String,
    },

    /// The configuration could not be written in the requested format
    #[error("failed to serialize configuration as {format}: {details}")]
    Serialize {
        /// Target format name
        format: String,
        /// Serializer message
        details: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates an I/O error with path context.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a parse error located at a one-based line and column.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parser message
    /// * `path` - Optional path to the file that failed to parse
    /// * `line`, `column` - One-based position of the failure
    pub fn parse(error: impl fmt::Display, path: Option<&Path>, line: usize, column: usize) -> Self {
        let location = match path {
            Some(p) => p.display().to_string(),
            None => "string".to_string(),
        };

        ConfigError::Parse {
            location,
            line,
            column,
            details: error.to_string(),
        }
    }

    /// Returns true for errors describing a well-formed but invalid document.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingKey { .. }
                | ConfigError::InvalidValue { .. }
                | ConfigError::InvalidType { .. }
                | ConfigError::EmptySequence { .. }
                | ConfigError::DuplicateKey { .. }
                | ConfigError::UnknownKey { .. }
                | ConfigError::InvalidGlob { .. }
        )
    }

    /// Dotted key named by a schema error, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingKey { key }
            | ConfigError::InvalidValue { key, .. }
            | ConfigError::InvalidType { key, .. }
            | ConfigError::EmptySequence { key }
            | ConfigError::DuplicateKey { key }
            | ConfigError::UnknownKey { key, .. }
            | ConfigError::InvalidGlob { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Non-fatal diagnostics produced while loading or resolving a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A content pattern matched no files
    UnmatchedPattern {
        /// The pattern text
        pattern: String,
    },

    /// A key outside the schema was ignored under the lenient policy
    UnknownKey {
        /// Dotted path of the ignored key
        key: String,
    },

    /// A font stack does not end in a generic family
    NonGenericFallback {
        /// Font token
        token: String,
        /// Last family of the stack
        family: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnmatchedPattern { pattern } => {
                write!(f, "content pattern '{pattern}' matched no files")
            }
            Warning::UnknownKey { key } => write!(f, "ignoring unknown key '{key}'"),
            Warning::NonGenericFallback { token, family } => write!(
                f,
                "font stack '{token}' ends with '{family}' instead of a generic family"
            ),
        }
    }
}

fn quote_all(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
