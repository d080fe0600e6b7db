use serde_json::Value;

use super::{PropertyInfo, config_schema, extract_property_info, resolve_ref};

const TABLE_HEADER: &str = "| Property | Type | Required | Description | Default |\n|----------|------|----------|-------------|---------|";

/// Generates a markdown table documenting configuration properties.
///
/// Creates a formatted table with property names, types, descriptions,
/// and default values for display in documentation.
pub fn generate_property_table(
    section_title: &str,
    config_path: &str,
    properties: Vec<PropertyInfo>,
) -> String {
    if properties.is_empty() {
        return String::new();
    }

    let property_rows = properties
        .iter()
        .map(|prop| {
            format!(
                "| `{}` | `{}` | {} | {} | `{}` |",
                prop.name,
                prop.type_name,
                if prop.required { "yes" } else { "no" },
                prop.description,
                prop.default_value
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "## {}\n**Config path:** `{}`\n\n{}\n{}\n",
        section_title, config_path, TABLE_HEADER, property_rows
    )
}

/// Generates the markdown reference of the whole configuration schema.
///
/// One table for the top-level keys, followed by one table per section
/// whose schema declares its own properties.
pub fn generate_reference() -> String {
    let schema = config_schema();
    let mut content = String::from("# Build Configuration Reference\n\n");

    content.push_str(&generate_property_table(
        "Top-level Keys",
        "(root)",
        extract_property_info(&schema),
    ));

    if let Some(Value::Object(properties)) = schema.get("properties") {
        for (name, property) in properties {
            let section = resolve_ref(&schema, property);
            let section_properties = extract_property_info(section);

            if !section_properties.is_empty() {
                content.push('\n');
                content.push_str(&generate_property_table(
                    &title_case(name),
                    name,
                    section_properties,
                ));
            }
        }
    }

    content
}

fn title_case(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let mut chars = s.chars();
    chars
        .next()
        .unwrap_or_default()
        .to_uppercase()
        .chain(chars.as_str().chars())
        .collect()
}
