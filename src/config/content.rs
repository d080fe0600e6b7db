mod resolve;

pub use resolve::{ContentResolution, PatternMatch};

use globset::{Glob, GlobBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source files scanned for utility-class usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ContentConfig {
    /// Glob patterns relative to the configuration file's directory.
    /// Patterns prefixed with `!` exclude matching files.
    pub files: Vec<GlobPattern>,
}

impl ContentConfig {
    /// Creates a content section from pattern strings.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: patterns.into_iter().map(GlobPattern::new).collect(),
        }
    }
}

/// A filesystem glob as written in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Wraps a pattern without compiling it.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// The pattern exactly as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `!`-prefixed exclusion patterns.
    pub fn is_negated(&self) -> bool {
        self.0.starts_with('!')
    }

    /// The pattern with any `!` and leading `./` removed.
    pub fn normalized(&self) -> &str {
        let pattern = self.0.strip_prefix('!').unwrap_or(&self.0);
        pattern.trim_start_matches("./")
    }

    /// Splits the normalized pattern into the literal directory it is rooted
    /// at and the glob below that directory.
    ///
    /// `../shared/**/*.html` splits into `../shared` and `**/*.html`; a
    /// pattern without a directory part has an empty root.
    pub fn split_root(&self) -> (&str, &str) {
        let pattern = self.normalized();
        let glob_start = pattern
            .find(['*', '?', '[', '{'])
            .unwrap_or(pattern.len());

        match pattern[..glob_start].rfind('/') {
            Some(0) => ("/", &pattern[1..]),
            Some(slash) => (&pattern[..slash], &pattern[slash + 1..]),
            None => ("", pattern),
        }
    }

    /// Compiles the pattern. `*` never crosses a path separator; `**` does.
    ///
    /// # Errors
    ///
    /// Returns the glob compiler error for malformed patterns.
    pub fn compile(&self) -> Result<Glob, globset::Error> {
        GlobBuilder::new(self.normalized())
            .literal_separator(true)
            .build()
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}
