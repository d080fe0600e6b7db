use serde_json::{Map, Value};
use tracing::warn;

use super::{
    BuildConfiguration, DarkMode, GlobPattern, LoadOptions, Mode, UnknownKeys,
    format::{Document, join_key},
    theme::GENERIC_FAMILIES,
};
use crate::{ConfigError, Result, Warning};

const ROOT_KEYS: [&str; 6] = ["mode", "content", "darkMode", "theme", "variants", "plugins"];
const CONTENT_KEYS: [&str; 1] = ["files"];
const THEME_KEYS: [&str; 2] = ["fontFamily", "extend"];
const VARIANTS_KEYS: [&str; 1] = ["extend"];

/// A configuration that passed validation, with the soft diagnostics raised on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    /// The typed record.
    pub config: BuildConfiguration,
    /// Non-fatal findings.
    pub warnings: Vec<Warning>,
}

/// Checks a parsed document against the configuration schema and converts it.
///
/// # Errors
///
/// Returns the first schema error found. Repeated keys are reported before
/// anything else, then unknown keys, then each section in schema order.
pub fn validate(document: Document, options: &LoadOptions) -> Result<Validated> {
    if let Some(key) = document.duplicates.into_iter().next() {
        return Err(ConfigError::DuplicateKey { key });
    }

    let mut validator = Validator {
        options,
        warnings: Vec::new(),
    };

    let root = expect_object(&document.root, "")?;
    validator.check_keys(root, "", &ROOT_KEYS)?;

    if let Some(mode) = root.get("mode") {
        check_enumerated(mode, "mode", &Mode::VALUES)?;
    }

    validator.check_content(root)?;

    if let Some(dark_mode) = root.get("darkMode") {
        check_enumerated(dark_mode, "darkMode", &DarkMode::VALUES)?;
    }

    if let Some(theme) = root.get("theme") {
        validator.check_theme(theme)?;
    }

    if let Some(variants) = root.get("variants") {
        let variants = expect_object(variants, "variants")?;
        validator.check_keys(variants, "variants", &VARIANTS_KEYS)?;
        if let Some(extend) = variants.get("extend") {
            expect_object(extend, "variants.extend")?;
        }
    }

    if let Some(plugins) = root.get("plugins") {
        expect_array(plugins, "plugins")?;
    }

    let config = serde_json::from_value(document.root).map_err(|e| ConfigError::InvalidType {
        key: "(root)".to_string(),
        expected: "build configuration".to_string(),
        actual: e.to_string(),
    })?;

    Ok(Validated {
        config,
        warnings: validator.warnings,
    })
}

struct Validator<'a> {
    options: &'a LoadOptions,
    warnings: Vec<Warning>,
}

impl Validator<'_> {
    fn check_keys(&mut self, object: &Map<String, Value>, path: &str, permitted: &[&str]) -> Result<()> {
        for key in object.keys() {
            if permitted.contains(&key.as_str()) {
                continue;
            }

            let key = join_key(path, key);
            match self.options.unknown_keys {
                UnknownKeys::Reject => {
                    return Err(ConfigError::UnknownKey {
                        key,
                        permitted: permitted.iter().map(|k| k.to_string()).collect(),
                    });
                }
                UnknownKeys::Warn => {
                    warn!(key = %key, "ignoring unknown configuration key");
                    self.warnings.push(Warning::UnknownKey { key });
                }
            }
        }
        Ok(())
    }

    fn check_content(&mut self, root: &Map<String, Value>) -> Result<()> {
        let content = root.get("content").ok_or_else(|| ConfigError::MissingKey {
            key: "content".to_string(),
        })?;
        let content = expect_object(content, "content")?;
        self.check_keys(content, "content", &CONTENT_KEYS)?;

        let files = content.get("files").ok_or_else(|| ConfigError::MissingKey {
            key: "content.files".to_string(),
        })?;
        let files = expect_array(files, "content.files")?;

        if files.is_empty() {
            return Err(ConfigError::EmptySequence {
                key: "content.files".to_string(),
            });
        }

        for (index, file) in files.iter().enumerate() {
            let key = format!("content.files.{index}");
            let pattern = GlobPattern::new(expect_str(file, &key)?);
            pattern.compile().map_err(|e| ConfigError::InvalidGlob {
                key,
                pattern: pattern.to_string(),
                details: e.to_string(),
            })?;
        }

        Ok(())
    }

    fn check_theme(&mut self, theme: &Value) -> Result<()> {
        let theme = expect_object(theme, "theme")?;
        self.check_keys(theme, "theme", &THEME_KEYS)?;

        if let Some(font_family) = theme.get("fontFamily") {
            for (token, stack) in expect_object(font_family, "theme.fontFamily")? {
                self.check_font_stack(token, stack)?;
            }
        }

        if let Some(extend) = theme.get("extend") {
            expect_object(extend, "theme.extend")?;
        }

        Ok(())
    }

    fn check_font_stack(&mut self, token: &str, stack: &Value) -> Result<()> {
        let key = format!("theme.fontFamily.{token}");
        let families = expect_array(stack, &key)?;

        let Some(last) = families.last() else {
            return Err(ConfigError::EmptySequence { key });
        };

        for (index, family) in families.iter().enumerate() {
            expect_str(family, &format!("{key}.{index}"))?;
        }

        if let Some(last) = last.as_str() {
            if self.options.check_font_fallbacks && !GENERIC_FAMILIES.contains(&last) {
                warn!(token, family = last, "font stack has no generic fallback");
                self.warnings.push(Warning::NonGenericFallback {
                    token: token.to_string(),
                    family: last.to_string(),
                });
            }
        }

        Ok(())
    }
}

fn check_enumerated(value: &Value, key: &str, domain: &[&str]) -> Result<()> {
    match value.as_str() {
        Some(name) if domain.contains(&name) => Ok(()),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            actual: value.to_string(),
            expected: domain.iter().map(|v| v.to_string()).collect(),
        }),
    }
}

fn expect_object<'v>(value: &'v Value, key: &str) -> Result<&'v Map<String, Value>> {
    value.as_object().ok_or_else(|| invalid_type(value, key, "object"))
}

fn expect_array<'v>(value: &'v Value, key: &str) -> Result<&'v Vec<Value>> {
    value.as_array().ok_or_else(|| invalid_type(value, key, "array"))
}

fn expect_str<'v>(value: &'v Value, key: &str) -> Result<&'v str> {
    value.as_str().ok_or_else(|| invalid_type(value, key, "string"))
}

fn invalid_type(value: &Value, key: &str, expected: &str) -> ConfigError {
    ConfigError::InvalidType {
        key: if key.is_empty() { "(root)" } else { key }.to_string(),
        expected: expected.to_string(),
        actual: kind(value).to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
