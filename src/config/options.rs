/// What to do with keys the schema does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Fail with a schema error naming the key and the permitted keys.
    #[default]
    Reject,
    /// Ignore the key and report a warning.
    Warn,
}

/// Knobs for loading and validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Policy for keys outside the schema.
    pub unknown_keys: UnknownKeys,

    /// Warn when a font stack does not end in a generic family.
    pub check_font_fallbacks: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            unknown_keys: UnknownKeys::Reject,
            check_font_fallbacks: true,
        }
    }
}

impl LoadOptions {
    /// Options that only warn about unknown keys.
    pub fn lenient() -> Self {
        Self {
            unknown_keys: UnknownKeys::Warn,
            ..Self::default()
        }
    }
}
