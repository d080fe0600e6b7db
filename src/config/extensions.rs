use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open mapping whose entries are defined by the build tool, not by this crate.
///
/// Entries are kept verbatim and in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Extensions(Map<String, Value>);

impl Extensions {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of one entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is extended.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Variant configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct VariantsConfig {
    /// Additive variant overrides, interpreted by the build tool.
    #[serde(default)]
    pub extend: Extensions,
}

/// Reference to a build-tool plugin; its shape belongs to the plugin contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PluginRef(pub Value);

impl PluginRef {
    /// Plugin name: a bare string, or the module of a kept
    /// `require('...')` call.
    pub fn name(&self) -> Option<&str> {
        let text = self.0.as_str()?;
        let Some(rest) = text.strip_prefix("require(") else {
            return Some(text);
        };

        let argument = rest.split(')').next()?.trim();
        argument
            .strip_prefix(['\'', '"'])
            .and_then(|a| a.strip_suffix(['\'', '"']))
    }
}
