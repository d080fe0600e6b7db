//! twconfig - typed loader for utility-CSS build configurations.
//!
//! A build configuration declares which source files a utility-CSS build
//! tool scans for class usage, how dark-mode variants are activated, custom
//! font-family tokens and opaque extension points for the tool itself.
//! This crate models that record as Rust types and provides:
//!
//! - Loading from `tailwind.config.js`-style modules, JSON or TOML
//! - Schema validation with errors naming the offending key
//! - Re-serialization to any supported format
//! - Resolution of the content globs against a project directory
//! - JSON Schema and markdown reference generation
//!
//! # Quick Start
//!
//! ```rust
//! use twconfig::config::{BuildConfiguration, ConfigFormat, DarkMode};
//!
//! let text = r#"{
//!     "darkMode": "media",
//!     "content": { "files": ["src/**/*.rs"] },
//!     "theme": { "fontFamily": { "alfa-slab": ["Alfa Slab One", "sans-serif"] } }
//! }"#;
//!
//! let config = BuildConfiguration::from_str_as(text, ConfigFormat::Json)?;
//! assert_eq!(config.dark_mode, DarkMode::Media);
//! # Ok::<(), twconfig::ConfigError>(())
//! ```

/// Configuration schema definitions and validation.
pub mod config;

/// Error and warning types and the result alias.
pub mod error;

/// Documentation generation for the configuration schema.
pub mod docs;

/// Command-line interface.
pub mod cli;

/// Logging setup for the binary.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use error::{ConfigError, Result, Warning};
