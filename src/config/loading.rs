use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use super::{
    BuildConfiguration, ConfigFormat, ContentResolution, LoadOptions, Validated, validate,
};
use crate::{ConfigError, Result, Warning};

/// A configuration loaded from disk together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    /// The validated record.
    pub config: BuildConfiguration,
    /// File the record was read from.
    pub path: PathBuf,
    /// Format the file was parsed as.
    pub format: ConfigFormat,
    /// Soft diagnostics raised during validation.
    pub warnings: Vec<Warning>,
}

impl Loaded {
    /// Directory content patterns are relative to.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Resolves the content patterns against the configuration's directory.
    ///
    /// # Errors
    ///
    /// See [`crate::config::ContentConfig::resolve`].
    pub fn resolve_content(&self) -> Result<ContentResolution> {
        self.config.content.resolve(self.base_dir())
    }
}

impl BuildConfiguration {
    /// Loads and validates a configuration file with default options.
    ///
    /// The format follows the file extension. Warnings are logged and
    /// otherwise dropped; use [`BuildConfiguration::load_with_options`] to
    /// inspect them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The extension is not a supported format
    /// - The file cannot be read
    /// - The content is not syntactically valid
    /// - The document violates the schema
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use twconfig::config::BuildConfiguration;
    /// use std::path::Path;
    ///
    /// let config = BuildConfiguration::load(Path::new("tailwind.config.js"))?;
    /// println!("dark mode: {}", config.dark_mode);
    /// # Ok::<(), twconfig::ConfigError>(())
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_options(path, &LoadOptions::default()).map(|loaded| loaded.config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Same as [`BuildConfiguration::load`].
    #[instrument(skip(options))]
    pub fn load_with_options(path: &Path, options: &LoadOptions) -> Result<Loaded> {
        let format = ConfigFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|e| ConfigError::io(e, path))?;

        let document = format.parse(&text, Some(path))?;
        let Validated { config, warnings } = validate(document, options)?;

        info!(
            format = %format,
            files = config.content.files.len(),
            warnings = warnings.len(),
            "loaded configuration"
        );

        Ok(Loaded {
            config,
            path: path.to_path_buf(),
            format,
            warnings,
        })
    }

    /// Parses and validates an in-memory configuration.
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed text and a schema error for an
    /// invalid document.
    pub fn from_str_as(text: &str, format: ConfigFormat) -> Result<Self> {
        Self::from_str_with_options(text, format, &LoadOptions::default())
            .map(|validated| validated.config)
    }

    /// Parses and validates an in-memory configuration, keeping warnings.
    ///
    /// # Errors
    ///
    /// Same as [`BuildConfiguration::from_str_as`].
    pub fn from_str_with_options(
        text: &str,
        format: ConfigFormat,
        options: &LoadOptions,
    ) -> Result<Validated> {
        let document = format.parse(text, None)?;
        validate(document, options)
    }

    /// Serializes the configuration in the given format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Serialize` if the format cannot express a value.
    pub fn to_string_as(&self, format: ConfigFormat) -> Result<String> {
        format.render(self)
    }

    /// Writes the configuration to `path` in the format its extension names.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, serialization fails
    /// or the file cannot be written.
    #[instrument(skip(self))]
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;
        let text = self.to_string_as(format)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(e, parent))?;
        }

        fs::write(path, text).map_err(|e| ConfigError::io(e, path))?;
        debug!(format = %format, "saved configuration");
        Ok(())
    }
}
