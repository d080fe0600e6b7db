use std::{
    env,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{ConfigError, Result};

/// Utility struct for locating configuration files
pub struct ConfigPaths;

impl ConfigPaths {
    /// Conventional file names, in lookup order.
    pub const CANDIDATES: [&'static str; 5] = [
        "tailwind.config.js",
        "tailwind.config.cjs",
        "tailwind.config.mjs",
        "tailwind.config.json",
        "tailwind.config.toml",
    ];

    /// Finds the first conventional configuration file in `dir`.
    ///
    /// # Errors
    /// Returns `ConfigError::NotFound` if none of the candidates exists
    pub fn discover(dir: &Path) -> Result<PathBuf> {
        Self::CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
            .inspect(|found| debug!(path = %found.display(), "discovered configuration"))
            .ok_or_else(|| ConfigError::NotFound {
                dir: dir.to_path_buf(),
            })
    }

    /// Resolves an optional user-supplied location to a configuration file
    ///
    /// - A file path is returned as is
    /// - A directory is searched with [`ConfigPaths::discover`]
    /// - No path searches the current working directory
    ///
    /// # Errors
    /// Returns an error if the working directory is unavailable or discovery fails
    pub fn resolve(location: Option<&Path>) -> Result<PathBuf> {
        match location {
            Some(path) if path.is_dir() => Self::discover(path),
            Some(path) => Ok(path.to_path_buf()),
            None => {
                let cwd = env::current_dir().map_err(|e| ConfigError::io(e, Path::new(".")))?;
                Self::discover(&cwd)
            }
        }
    }
}
