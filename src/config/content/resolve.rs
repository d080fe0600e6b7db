use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::{debug, instrument, warn};

use super::{ContentConfig, GlobPattern};
use crate::{ConfigError, Result, Warning};

/// Files selected by the content patterns of a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentResolution {
    /// Directory the patterns were resolved against.
    pub base_dir: PathBuf,

    /// Matched files, sorted and de-duplicated. Paths are relative to
    /// `base_dir` (possibly through `..`); patterns rooted at an absolute
    /// directory yield absolute paths.
    pub files: Vec<PathBuf>,

    /// Match count for every inclusion pattern, in declaration order.
    pub patterns: Vec<PatternMatch>,

    /// Soft diagnostics, one per inclusion pattern that matched nothing.
    pub warnings: Vec<Warning>,
}

/// How many files one inclusion pattern selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// The pattern as written.
    pub pattern: GlobPattern,
    /// Number of files it matched, exclusions applied.
    pub matched: usize,
}

/// Inclusion pattern compiled against the directory it is rooted at.
struct Include {
    index: usize,
    matcher: GlobMatcher,
}

impl ContentConfig {
    /// Resolves the content patterns against `base_dir`.
    ///
    /// Each inclusion pattern is rooted at its literal directory prefix
    /// (`../shared` for `../shared/**/*.html`), which is walked once per
    /// distinct root. The walk honours `.gitignore`, `.ignore` and hidden
    /// files the way version-control aware tools do. Files matched by a
    /// `!`-prefixed exclusion are dropped. A pattern that selects nothing is
    /// reported as a warning, never as an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if `base_dir` is not a readable directory and
    /// `ConfigError::InvalidGlob` for a pattern that does not compile.
    #[instrument(skip(self), fields(patterns = self.files.len()))]
    pub fn resolve(&self, base_dir: &Path) -> Result<ContentResolution> {
        if !base_dir.is_dir() {
            return Err(ConfigError::io("not a directory", base_dir));
        }

        let (roots, excludes) = self.compile_patterns(base_dir)?;
        let mut counts = vec![0usize; self.files.len()];
        let mut files = BTreeSet::new();

        for (root, includes) in &roots {
            if !root.is_dir() {
                debug!(root = %root.display(), "pattern root does not exist");
                continue;
            }

            for entry in WalkBuilder::new(root).require_git(false).build() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        debug!(error = %e, "skipping unreadable entry");
                        continue;
                    }
                };

                if !entry.file_type().is_some_and(|kind| kind.is_file()) {
                    continue;
                }

                let Ok(below_root) = entry.path().strip_prefix(root) else {
                    continue;
                };

                let listed = entry
                    .path()
                    .strip_prefix(base_dir)
                    .map_or_else(|_| entry.path().to_path_buf(), Path::to_path_buf);

                if excludes.is_match(&listed) {
                    continue;
                }

                for include in includes {
                    if include.matcher.is_match(below_root) {
                        counts[include.index] += 1;
                        files.insert(listed.clone());
                    }
                }
            }
        }

        let patterns: Vec<PatternMatch> = self
            .files
            .iter()
            .zip(counts)
            .filter(|(pattern, _)| !pattern.is_negated())
            .map(|(pattern, matched)| PatternMatch {
                pattern: pattern.clone(),
                matched,
            })
            .collect();

        let warnings = patterns
            .iter()
            .filter(|p| p.matched == 0)
            .map(|p| {
                warn!(pattern = %p.pattern, "content pattern matched no files");
                Warning::UnmatchedPattern {
                    pattern: p.pattern.to_string(),
                }
            })
            .collect();

        debug!(files = files.len(), roots = roots.len(), "resolved content files");

        Ok(ContentResolution {
            base_dir: base_dir.to_path_buf(),
            files: files.into_iter().collect(),
            patterns,
            warnings,
        })
    }

    /// Groups inclusion patterns by the directory they are rooted at and
    /// collects exclusions into one set matched against listed paths.
    fn compile_patterns(&self, base_dir: &Path) -> Result<(BTreeMap<PathBuf, Vec<Include>>, GlobSet)> {
        let mut roots: BTreeMap<PathBuf, Vec<Include>> = BTreeMap::new();
        let mut excludes = GlobSetBuilder::new();

        for (index, pattern) in self.files.iter().enumerate() {
            let invalid = |e: globset::Error| ConfigError::InvalidGlob {
                key: format!("content.files.{index}"),
                pattern: pattern.to_string(),
                details: e.to_string(),
            };

            let glob = pattern.compile().map_err(invalid)?;
            if pattern.is_negated() {
                excludes.add(glob);
                continue;
            }

            let (root, tail) = pattern.split_root();
            let matcher = GlobBuilder::new(tail)
                .literal_separator(true)
                .build()
                .map_err(invalid)?
                .compile_matcher();

            let root = if root.is_empty() {
                base_dir.to_path_buf()
            } else {
                base_dir.join(root)
            };
            roots.entry(root).or_default().push(Include { index, matcher });
        }

        let excludes = excludes.build().map_err(|e| ConfigError::InvalidGlob {
            key: "content.files".to_string(),
            pattern: String::new(),
            details: e.to_string(),
        })?;

        Ok((roots, excludes))
    }
}
