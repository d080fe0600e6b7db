use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Utility generation strategy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub enum Mode {
    /// Generate utilities on demand from scanned class usage.
    #[default]
    #[serde(rename = "jit", alias = "just-in-time")]
    Jit,
}

impl Mode {
    /// Every accepted spelling, including aliases.
    pub const VALUES: [&'static str; 2] = ["jit", "just-in-time"];

    /// Parses one of the accepted spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "jit" | "just-in-time" => Some(Mode::Jit),
            _ => None,
        }
    }

    /// The canonical serialized spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Jit => "jit",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
