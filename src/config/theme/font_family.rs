use std::fmt;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

/// CSS generic family keywords accepted as the final fallback of a stack.
pub const GENERIC_FAMILIES: [&str; 13] = [
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "emoji",
    "math",
    "fangsong",
];

/// Ordered list of font family names, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FontStack(Vec<String>);

impl FontStack {
    /// Creates a stack from family names.
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(families.into_iter().map(Into::into).collect())
    }

    /// Family names in preference order.
    pub fn families(&self) -> &[String] {
        &self.0
    }

    /// True when the stack names no family at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The last family if it is a CSS generic family keyword.
    pub fn generic_fallback(&self) -> Option<&str> {
        self.0
            .last()
            .map(String::as_str)
            .filter(|family| GENERIC_FAMILIES.contains(family))
    }
}

impl PartialEq<[&str]> for FontStack {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a.as_str() == *b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for FontStack {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

/// Font-family tokens in the order they were declared.
///
/// Declaration order is kept so a loaded configuration serializes back
/// byte-for-byte in the same key order. A token declared twice is rejected
/// on deserialization.
#[derive(Debug, Clone, Default)]
pub struct FontFamilies(IndexMap<String, FontStack>);

/// Two tables are equal only when they declare the same tokens in the same order.
impl PartialEq for FontFamilies {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for FontFamilies {}

impl FontFamilies {
    /// Creates an empty token table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the stack it replaced.
    /// A replaced token keeps its original position.
    pub fn insert(&mut self, token: impl Into<String>, stack: FontStack) -> Option<FontStack> {
        self.0.insert(token.into(), stack)
    }

    /// Looks up the stack of a token.
    pub fn get(&self, token: &str) -> Option<&FontStack> {
        self.0.get(token)
    }

    /// Tokens and stacks in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FontStack)> {
        self.0.iter().map(|(token, stack)| (token.as_str(), stack))
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no token is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, S> FromIterator<(K, S)> for FontFamilies
where
    K: Into<String>,
    S: Into<FontStack>,
{
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let mut families = FontFamilies::new();
        for (token, stack) in iter {
            families.insert(token, stack.into());
        }
        families
    }
}

impl<const N: usize> From<[&str; N]> for FontStack {
    fn from(families: [&str; N]) -> Self {
        FontStack::new(families)
    }
}

impl Serialize for FontFamilies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (token, stack) in &self.0 {
            map.serialize_entry(token, stack)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FontFamilies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FontFamiliesVisitor)
    }
}

struct FontFamiliesVisitor;

impl<'de> Visitor<'de> for FontFamiliesVisitor {
    type Value = FontFamilies;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from font token to a list of family names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut families = FontFamilies::new();
        while let Some((token, stack)) = access.next_entry::<String, FontStack>()? {
            if families.0.contains_key(&token) {
                return Err(de::Error::custom(format_args!(
                    "duplicate font token `{token}`"
                )));
            }
            families.0.insert(token, stack);
        }
        Ok(families)
    }
}

impl JsonSchema for FontFamilies {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "FontFamilies".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        let stack = generator.subschema_for::<Vec<String>>();
        schemars::json_schema!({
            "type": "object",
            "description": "Map from font token to an ordered, non-empty list of family names.",
            "additionalProperties": stack,
        })
    }
}
