//! Schema generation and property extraction for JSON Schema documents.

use schemars::schema_for;
use serde_json::Value;

use crate::config::BuildConfiguration;

/// Represents information about a single property in a JSON Schema.
///
/// This struct captures the essential metadata of a schema property including
/// its name, type, description, and default value for documentation purposes.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    /// The name of the property as defined in the schema.
    pub name: String,
    /// The JSON Schema type of the property (e.g., "string", "array", or a definition name).
    pub type_name: String,
    /// Human-readable description of the property's purpose and usage.
    pub description: String,
    /// String representation of the property's default value, or "-" if not specified.
    pub default_value: String,
    /// Whether the property must be present.
    pub required: bool,
}

/// JSON Schema of [`BuildConfiguration`].
pub fn config_schema() -> Value {
    schema_for!(BuildConfiguration).to_value()
}

/// Extracts property information from a JSON Schema object.
///
/// Parses the "properties" object and transforms each property into a
/// structured `PropertyInfo`. Returns an empty vector if the schema has no
/// properties.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use twconfig::docs::extract_property_info;
///
/// let schema = json!({
///     "properties": {
///         "darkMode": {
///             "type": "string",
///             "description": "Dark-mode strategy",
///             "default": "media"
///         }
///     }
/// });
///
/// let properties = extract_property_info(&schema);
/// assert_eq!(properties[0].name, "darkMode");
/// assert_eq!(properties[0].default_value, "\"media\"");
/// ```
pub fn extract_property_info(schema: &Value) -> Vec<PropertyInfo> {
    let required: Vec<&str> = schema
        .get("required")
        .and_then(|r| r.as_array())
        .map(|names| names.iter().filter_map(|n| n.as_str()).collect())
        .unwrap_or_default();

    schema
        .get("properties")
        .and_then(|props| props.as_object())
        .map(|props| {
            props
                .iter()
                .map(|(name, property)| PropertyInfo {
                    name: name.clone(),
                    type_name: get_type(property),
                    description: get_description(property),
                    default_value: get_default_value(property),
                    required: required.contains(&name.as_str()),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Follows a local `$ref` (such as `#/$defs/ThemeConfig`) inside `root`.
pub fn resolve_ref<'a>(root: &'a Value, property: &'a Value) -> &'a Value {
    property
        .get("$ref")
        .and_then(|r| r.as_str())
        .and_then(|r| r.strip_prefix("#/"))
        .and_then(|pointer| root.pointer(&format!("/{pointer}")))
        .unwrap_or(property)
}

fn get_type(property: &Value) -> String {
    if let Some(type_of) = property.get("type") {
        return match type_of {
            Value::String(s) => s.clone(),
            Value::Array(types) => types
                .iter()
                .filter_map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(" | "),
            _ => "unknown".to_string(),
        };
    }

    if let Some(reference) = property.get("$ref").and_then(|r| r.as_str()) {
        return reference.rsplit('/').next().unwrap_or(reference).to_string();
    }

    let variants = property
        .get("oneOf")
        .or_else(|| property.get("anyOf"))
        .and_then(|v| v.as_array());

    match variants {
        Some(variants) => variants
            .iter()
            .map(|variant| match variant.get("const").or_else(|| variant.get("enum")) {
                Some(value) => value.to_string(),
                None => get_type(variant),
            })
            .collect::<Vec<_>>()
            .join(" | "),
        None => "any".to_string(),
    }
}

fn get_description(property: &Value) -> String {
    property
        .get("description")
        .and_then(|desc| desc.as_str())
        .map(|desc| desc.replace('\n', " "))
        .unwrap_or_else(|| "No description provided".to_string())
}

fn get_default_value(property: &Value) -> String {
    property
        .get("default")
        .map(|def_val| match def_val {
            Value::String(s) => format!("\"{s}\""),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            _ => def_val.to_string(),
        })
        .unwrap_or("-".to_string())
}
