use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy for activating dark-mode variants.
///
/// `Media` follows the operating system or browser preference through the
/// `prefers-color-scheme` media query. `Class` activates the variants when a
/// `dark` class is present on a root element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Follow the user's color-scheme preference (default).
    #[default]
    Media,

    /// Toggle manually through a class on a root element.
    Class,
}

impl DarkMode {
    /// Every accepted spelling, in declaration order.
    pub const VALUES: [&'static str; 2] = ["media", "class"];

    /// Parses one of the accepted spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "media" => Some(DarkMode::Media),
            "class" => Some(DarkMode::Class),
            _ => None,
        }
    }

    /// The serialized spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            DarkMode::Media => "media",
            DarkMode::Class => "class",
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
