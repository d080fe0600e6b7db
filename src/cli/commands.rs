use std::path::Path;

use serde_json::Value;

use super::{
    CliError, CommandResult,
    formatting::{format_description, format_header, format_json_value, format_warning},
};
use crate::{
    config::{BuildConfiguration, ConfigFormat, ConfigPaths, LoadOptions, Loaded},
    docs,
};

fn load(location: Option<&Path>, options: &LoadOptions) -> Result<Loaded, CliError> {
    let path = ConfigPaths::resolve(location)?;
    Ok(BuildConfiguration::load_with_options(&path, options)?)
}

fn push_warnings<'a>(lines: &mut Vec<String>, warnings: impl IntoIterator<Item = &'a crate::Warning>) {
    lines.extend(warnings.into_iter().map(format_warning));
}

/// Validates a configuration and prints a summary of it.
pub(super) fn check(location: Option<&Path>, options: &LoadOptions) -> CommandResult {
    let loaded = load(location, options)?;
    let config = &loaded.config;

    let tokens: Vec<&str> = config.theme.font_family.iter().map(|(token, _)| token).collect();

    let mut lines = vec![
        format!(
            "{} {}",
            format_header(&loaded.path.display().to_string()),
            format_description(&format!("({})", loaded.format))
        ),
        format!("  mode: {}", config.mode),
        format!("  darkMode: {}", config.dark_mode),
        format!("  content.files: {} pattern(s)", config.content.files.len()),
        format!(
            "  theme.fontFamily: {} token(s){}",
            tokens.len(),
            if tokens.is_empty() {
                String::new()
            } else {
                format!(" ({})", tokens.join(", "))
            }
        ),
        format!("  theme.extend: {} entr(ies)", config.theme.extend.len()),
        format!("  variants.extend: {} entr(ies)", config.variants.extend.len()),
        format!("  plugins: {}", config.plugins.len()),
    ];

    push_warnings(&mut lines, &loaded.warnings);
    lines.push("ok".to_string());

    Ok(lines.join("\n"))
}

/// Lists the files matched by the content patterns.
pub(super) fn files(location: Option<&Path>, options: &LoadOptions) -> CommandResult {
    let loaded = load(location, options)?;
    let resolution = loaded.resolve_content()?;

    let mut lines: Vec<String> = resolution
        .files
        .iter()
        .map(|file| file.display().to_string())
        .collect();

    push_warnings(&mut lines, loaded.warnings.iter().chain(&resolution.warnings));
    lines.push(format_description(&format!(
        "{} file(s) matched by {} pattern(s)",
        resolution.files.len(),
        resolution.patterns.len()
    )));

    Ok(lines.join("\n"))
}

/// Prints the value at a dotted key of the normalized configuration.
pub(super) fn get(location: Option<&Path>, key: &str, options: &LoadOptions) -> CommandResult {
    let loaded = load(location, options)?;
    let root = serde_json::to_value(&loaded.config)
        .map_err(|e| CliError::OutputError(e.to_string()))?;

    let value = navigate_path(&root, key)?;
    Ok(format!("{}: {}", key, format_json_value(value)))
}

/// Loads `input` and writes it to `output` in the output's format.
pub(super) fn convert(input: &Path, output: &Path, options: &LoadOptions) -> CommandResult {
    if input == output {
        return Err(CliError::InvalidArguments(
            "input and output must be different files".to_string(),
        ));
    }

    let format = ConfigFormat::from_path(output)?;
    let loaded = BuildConfiguration::load_with_options(input, options)?;
    loaded.config.save(output)?;

    let mut lines = Vec::new();
    push_warnings(&mut lines, &loaded.warnings);
    lines.push(format!(
        "wrote {} ({} -> {})",
        output.display(),
        loaded.format,
        format
    ));
    Ok(lines.join("\n"))
}

/// Prints the JSON Schema or the markdown reference.
pub(super) fn schema(markdown: bool) -> CommandResult {
    if markdown {
        return Ok(docs::generate_reference());
    }

    serde_json::to_string_pretty(&docs::config_schema())
        .map_err(|e| CliError::OutputError(e.to_string()))
}

/// Navigates a JSON value following a dot-separated path
///
/// Object keys are matched literally and may themselves contain dots
/// (`theme.fontFamily.display.v2`); when several splits match, the longest
/// key wins. Array elements are addressed by index (e.g. `content.files.0`).
fn navigate_path<'v>(value: &'v Value, path: &str) -> Result<&'v Value, CliError> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = value;
    let mut i = 0;

    while i < parts.len() {
        let part = parts[i];
        let (next, consumed) = match current {
            Value::Object(map) => (i + 1..=parts.len())
                .rev()
                .find_map(|end| map.get(&parts[i..end].join(".")).map(|child| (child, end - i)))
                .ok_or_else(|| {
                    CliError::InvalidPath(format!(
                        "Key '{}' not found at path '{}'",
                        part,
                        parts[..i].join(".")
                    ))
                })?,
            Value::Array(items) => {
                let index = part.parse::<usize>().map_err(|_| {
                    CliError::InvalidPath(format!(
                        "Invalid array index '{}' at path '{}'",
                        part,
                        parts[..i].join(".")
                    ))
                })?;

                let item = items.get(index).ok_or_else(|| {
                    CliError::InvalidPath(format!(
                        "Array index '{}' out of bounds at path '{}'",
                        index,
                        parts[..i].join(".")
                    ))
                })?;
                (item, 1)
            }
            _ => {
                return Err(CliError::InvalidPath(format!(
                    "Cannot navigate into a scalar at path '{}'",
                    parts[..i].join(".")
                )));
            }
        };

        current = next;
        i += consumed;
    }

    Ok(current)
}
