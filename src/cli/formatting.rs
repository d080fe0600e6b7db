//! Formatting utilities for CLI output.

use serde_json::Value;

use crate::Warning;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats a soft diagnostic with a yellow `warning:` prefix
pub fn format_warning(warning: &Warning) -> String {
    format!("{}warning:{} {}", Colors::YELLOW, Colors::RESET, warning)
}

/// Formats a JSON value for human-readable CLI output.
///
/// Scalars print as they would be written in a configuration file;
/// arrays and objects print as compact JSON.
///
/// # Examples
///
/// ```
/// use twconfig::cli::formatting::format_json_value;
/// use serde_json::json;
///
/// assert_eq!(format_json_value(&json!("media")), "\"media\"");
/// assert_eq!(format_json_value(&json!(["Fira Sans", "sans-serif"])), "[\"Fira Sans\",\"sans-serif\"]");
/// ```
pub fn format_json_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn format_json_value_scalars() {
        assert_eq!(format_json_value(&json!("class")), "\"class\"");
        assert_eq!(format_json_value(&json!(42)), "42");
        assert_eq!(format_json_value(&json!(-2.5)), "-2.5");
        assert_eq!(format_json_value(&json!(true)), "true");
        assert_eq!(format_json_value(&json!(null)), "null");
    }

    #[test]
    fn format_json_value_containers() {
        assert_eq!(format_json_value(&json!([])), "[]");
        assert_eq!(format_json_value(&json!({ "files": ["a"] })), "{\"files\":[\"a\"]}");
    }

    #[test]
    fn warnings_are_prefixed() {
        let warning = Warning::UnmatchedPattern {
            pattern: "docs/**/*.md".to_string(),
        };

        let formatted = format_warning(&warning);

        assert!(formatted.contains("warning:"));
        assert!(formatted.ends_with("content pattern 'docs/**/*.md' matched no files"));
    }
}
