mod javascript;
mod json;

use std::{fmt, path::Path};

use serde_json::Value;
use tracing::debug;

use super::BuildConfiguration;
use crate::{ConfigError, Result};

/// On-disk representation of a build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `module.exports = { ... }` / `export default { ... }` object literal.
    JavaScript,
    /// Plain JSON document.
    Json,
    /// TOML document.
    Toml,
}

impl ConfigFormat {
    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("js" | "cjs" | "mjs") => Ok(ConfigFormat::JavaScript),
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parses text into a document tree.
    ///
    /// `path` is only used to locate errors.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` with the line and column of the first
    /// syntax error.
    pub fn parse(self, text: &str, path: Option<&Path>) -> Result<Document> {
        debug!(format = %self, "parsing configuration document");
        match self {
            ConfigFormat::JavaScript => javascript::parse(text, path),
            ConfigFormat::Json => json::parse(text, path),
            ConfigFormat::Toml => parse_toml(text, path),
        }
    }

    /// Serializes a configuration in this format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if the configuration holds values the
    /// format cannot express, such as `null` plugin entries in TOML.
    pub fn render(self, config: &BuildConfiguration) -> Result<String> {
        let serialize_error = |e: &dyn fmt::Display| ConfigError::Serialize {
            format: self.to_string(),
            details: e.to_string(),
        };

        match self {
            ConfigFormat::JavaScript => serde_json::to_value(config)
                .and_then(|value| javascript::render(&value))
                .map_err(|e| serialize_error(&e)),
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map(|text| text + "\n")
                .map_err(|e| serialize_error(&e)),
            ConfigFormat::Toml => toml::Value::try_from(config)
                .and_then(|value| toml::to_string(&value))
                .map_err(|e| serialize_error(&e)),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::JavaScript => f.write_str("JavaScript"),
            ConfigFormat::Json => f.write_str("JSON"),
            ConfigFormat::Toml => f.write_str("TOML"),
        }
    }
}

/// A parsed but not yet validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Format-neutral tree of the parsed content.
    pub root: Value,

    /// Dotted paths of keys that appeared more than once in one mapping.
    pub duplicates: Vec<String>,
}

/// Appends `key` to a dotted key path.
pub(crate) fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn parse_toml(text: &str, path: Option<&Path>) -> Result<Document> {
    let root: Value = toml::from_str(text).map_err(|e| {
        let (line, column) = e
            .span()
            .map(|span| line_column(text, span.start))
            .unwrap_or((1, 1));
        ConfigError::parse(e.message(), path, line, column)
    })?;

    Ok(Document {
        root,
        duplicates: Vec::new(),
    })
}

fn line_column(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset.min(text.len())];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |newline| before[newline + 1..].chars().count())
        + 1;
    (line, column)
}
