//! Configuration schema definitions and validation.
//!
//! Defines the build configuration record read by the utility-CSS build
//! tool: which files to scan, the dark-mode strategy, font-family tokens and
//! the opaque extension points. Records load from JavaScript, JSON or TOML
//! files and serialize back to any of them.

mod content;
mod dark_mode;
mod extensions;
mod format;
mod loading;
mod mode;
mod options;
mod paths;
mod theme;
mod validation;

#[cfg(test)]
mod tests;

pub use content::{ContentConfig, ContentResolution, GlobPattern, PatternMatch};
pub use dark_mode::DarkMode;
pub use extensions::{Extensions, PluginRef, VariantsConfig};
pub use format::{ConfigFormat, Document};
pub use loading::Loaded;
pub use mode::Mode;
pub use options::{LoadOptions, UnknownKeys};
pub use paths::ConfigPaths;
pub use theme::{FontFamilies, FontStack, GENERIC_FAMILIES, ThemeConfig};
pub use validation::{Validated, validate};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// Mirrors the configuration file field for field. Only `content` is
/// required; every other section has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    /// Utility generation strategy.
    #[serde(default)]
    pub mode: Mode,

    /// Source files scanned for class usage.
    pub content: ContentConfig,

    /// How dark-mode variants are activated.
    #[serde(default)]
    pub dark_mode: DarkMode,

    /// Font-family tokens and theme overrides.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Variant overrides.
    #[serde(default)]
    pub variants: VariantsConfig,

    /// Plugin references, passed through to the build tool.
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
}

impl BuildConfiguration {
    /// Creates a configuration scanning `content` with every other section defaulted.
    pub fn new(content: ContentConfig) -> Self {
        Self {
            mode: Mode::default(),
            content,
            dark_mode: DarkMode::default(),
            theme: ThemeConfig::default(),
            variants: VariantsConfig::default(),
            plugins: Vec::new(),
        }
    }

    /// The reference configuration: Rust sources plus `index.html`, media
    /// dark mode and three web font tokens.
    pub fn example() -> Self {
        let font_family = [
            ("alfa-slab", ["Alfa Slab One", "sans-serif"]),
            ("fira-sans", ["Fira Sans", "sans-serif"]),
            ("work-sans", ["Work Sans", "sans-serif"]),
        ]
        .into_iter()
        .collect();

        Self {
            mode: Mode::Jit,
            dark_mode: DarkMode::Media,
            theme: ThemeConfig {
                font_family,
                extend: Extensions::new(),
            },
            ..Self::new(ContentConfig::new(["src/**/*.rs", "index.html"]))
        }
    }
}
