//! Unit tests for config module
//!
//! Tests configuration types, defaults, and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic)]

use serde_json::json;

use crate::{
    ConfigError,
    config::{BuildConfiguration, ConfigFormat, ContentConfig, DarkMode, FontStack, Mode, PluginRef},
};

const SCENARIO_A: &str = r#"{
    "darkMode": "media",
    "content": { "files": ["src/**/*.rs"] },
    "theme": { "fontFamily": { "alfa-slab": ["Alfa Slab One", "sans-serif"] } }
}"#;

#[test]
fn scenario_a_loads() {
    let config = BuildConfiguration::from_str_as(SCENARIO_A, ConfigFormat::Json).unwrap();

    assert_eq!(config.dark_mode, DarkMode::Media);
    assert_eq!(
        config.theme.font_family.get("alfa-slab"),
        Some(&FontStack::from(["Alfa Slab One", "sans-serif"]))
    );
}

#[test]
fn scenario_b_rejects_toggle() {
    let text = SCENARIO_A.replace("\"media\"", "\"toggle\"");

    let err = BuildConfiguration::from_str_as(&text, ConfigFormat::Json).unwrap_err();

    assert!(err.is_schema_error());
    assert_eq!(err.key(), Some("darkMode"));
    let message = err.to_string();
    assert!(message.contains("\"media\""));
    assert!(message.contains("\"class\""));
}

#[test]
fn scenario_c_rejects_empty_files() {
    let text = SCENARIO_A.replace(r#"["src/**/*.rs"]"#, "[]");

    let err = BuildConfiguration::from_str_as(&text, ConfigFormat::Json).unwrap_err();

    assert_eq!(
        err,
        ConfigError::EmptySequence {
            key: "content.files".to_string()
        }
    );
}

#[test]
fn dark_mode_accepts_exactly_two_values() {
    for (name, expected) in [("media", Some(DarkMode::Media)), ("class", Some(DarkMode::Class))] {
        let text = SCENARIO_A.replace("\"media\"", &format!("\"{name}\""));
        let config = BuildConfiguration::from_str_as(&text, ConfigFormat::Json).ok();
        assert_eq!(config.map(|c| c.dark_mode), expected);
    }

    for name in ["Media", "CLASS", "dark", ""] {
        let text = SCENARIO_A.replace("\"media\"", &format!("\"{name}\""));
        let err = BuildConfiguration::from_str_as(&text, ConfigFormat::Json).unwrap_err();
        assert_eq!(err.key(), Some("darkMode"), "accepted {name:?}");
    }
}

#[test]
fn duplicate_font_token_in_json_is_schema_error() {
    let text = r#"{
        "content": { "files": ["src/**/*.rs"] },
        "theme": {
            "fontFamily": {
                "sans": ["Inter", "sans-serif"],
                "sans": ["Roboto", "sans-serif"]
            }
        }
    }"#;

    let err = BuildConfiguration::from_str_as(text, ConfigFormat::Json).unwrap_err();

    assert_eq!(
        err,
        ConfigError::DuplicateKey {
            key: "theme.fontFamily.sans".to_string()
        }
    );
}

#[test]
fn duplicate_font_token_in_javascript_is_schema_error() {
    let text = "module.exports = { content: { files: ['src/**/*.rs'] }, theme: { fontFamily: { sans: ['Inter', 'sans-serif'], sans: ['Roboto', 'sans-serif'] } } };";

    let err = BuildConfiguration::from_str_as(text, ConfigFormat::JavaScript).unwrap_err();

    assert!(err.is_schema_error());
    assert_eq!(err.key(), Some("theme.fontFamily.sans"));
}

#[test]
fn duplicate_key_in_toml_fails_to_parse() {
    let text = r#"
[content]
files = ["src/**/*.rs"]

[theme.fontFamily]
sans = ["Inter", "sans-serif"]
sans = ["Roboto", "sans-serif"]
"#;

    let err = BuildConfiguration::from_str_as(text, ConfigFormat::Toml).unwrap_err();

    match err {
        ConfigError::Parse { details, .. } => assert!(details.contains("duplicate"), "{details}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn config_serialize_toml() {
    let toml_str = BuildConfiguration::example()
        .to_string_as(ConfigFormat::Toml)
        .unwrap();

    assert!(toml_str.contains("mode = \"jit\""));
    assert!(toml_str.contains("darkMode = \"media\""));
    assert!(toml_str.contains("[content]"));
    assert!(toml_str.contains("[theme.fontFamily]"));
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        mode = "just-in-time"
        darkMode = "class"

        [content]
        files = ["src/**/*.rs", "index.html"]

        [theme.fontFamily]
        work-sans = ["Work Sans", "sans-serif"]
    "#;

    let config = BuildConfiguration::from_str_as(toml_str, ConfigFormat::Toml).unwrap();

    assert_eq!(config.mode, Mode::Jit);
    assert_eq!(config.dark_mode, DarkMode::Class);
    assert_eq!(config.content, ContentConfig::new(["src/**/*.rs", "index.html"]));
    assert!(config.plugins.is_empty());
}

#[test]
fn config_serialize_roundtrip() {
    let mut original = BuildConfiguration::example();
    original.dark_mode = DarkMode::Class;
    original.theme.extend.insert("colors", json!({ "brand": "#0ea5e9" }));
    original.variants.extend.insert("opacity", json!(["disabled"]));
    original.plugins.push(PluginRef(json!("@tailwindcss/forms")));

    for format in [ConfigFormat::JavaScript, ConfigFormat::Json, ConfigFormat::Toml] {
        let text = original.to_string_as(format).unwrap();
        let reloaded = BuildConfiguration::from_str_as(&text, format).unwrap();

        assert_eq!(reloaded, original, "{format} round trip changed the record");
        assert_eq!(reloaded.to_string_as(format).unwrap(), text);
    }
}

#[test]
fn config_serialize_keeps_font_order() {
    let json = BuildConfiguration::example()
        .to_string_as(ConfigFormat::Json)
        .unwrap();

    let alfa = json.find("alfa-slab").unwrap();
    let fira = json.find("fira-sans").unwrap();
    let work = json.find("work-sans").unwrap();
    assert!(alfa < fira && fira < work);
}

#[test]
fn null_plugin_cannot_be_written_as_toml() {
    let mut config = BuildConfiguration::example();
    config.plugins.push(PluginRef(serde_json::Value::Null));

    let err = config.to_string_as(ConfigFormat::Toml).unwrap_err();

    assert!(matches!(err, ConfigError::Serialize { ref format, .. } if format == "TOML"));
}

#[test]
fn config_minimal_toml() {
    let minimal_toml = r#"
        [content]
        files = ["index.html"]
    "#;

    let config = BuildConfiguration::from_str_as(minimal_toml, ConfigFormat::Toml).unwrap();

    assert_eq!(config, BuildConfiguration::new(ContentConfig::new(["index.html"])));
}

#[test]
fn config_empty_toml() {
    let err = BuildConfiguration::from_str_as("", ConfigFormat::Toml).unwrap_err();

    assert_eq!(
        err,
        ConfigError::MissingKey {
            key: "content".to_string()
        }
    );
}

#[test]
fn config_invalid_toml() {
    let invalid_toml = r#"
        [content
        invalid syntax here
        missing closing bracket
    "#;

    let err = BuildConfiguration::from_str_as(invalid_toml, ConfigFormat::Toml).unwrap_err();

    assert!(!err.is_schema_error());
}

#[test]
fn example_matches_reference_module() {
    let reference = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
    mode: "jit",
    content: {
        files: ["src/**/*.rs", "index.html"],
    },
    darkMode: "media", // 'media' or 'class'
    theme: {
        fontFamily: {
            "alfa-slab": ["Alfa Slab One", "sans-serif"],
            "fira-sans": ["Fira Sans", "sans-serif"],
            "work-sans": ["Work Sans", "sans-serif"],
        },
        extend: {},
    },
    variants: {
        extend: {},
    },
    plugins: [],
};
"#;

    let config = BuildConfiguration::from_str_as(reference, ConfigFormat::JavaScript).unwrap();

    assert_eq!(config, BuildConfiguration::example());
}

#[test]
fn require_plugins_load_as_opaque_references() {
    let text = "module.exports = { content: { files: ['src/**/*.rs'] }, plugins: [require('@tailwindcss/forms')] };";

    let config = BuildConfiguration::from_str_as(text, ConfigFormat::JavaScript).unwrap();

    assert_eq!(config.plugins.len(), 1);
    assert_eq!(config.plugins[0].name(), Some("@tailwindcss/forms"));
}

#[test]
fn json_to_javascript_keeps_numbers_and_strings_exact() {
    let text = r#"{
        "content": { "files": ["src/**/*.rs"] },
        "theme": { "extend": {
            "zIndex": { "max": 18446744073709551615, "min": -9223372036854775808 },
            "opacity": { "half": 0.5, "tiny": 1e-7, "negative": -2.5 },
            "content": { "quoted": "say \"hi\"\\n\ttab \u0001 é" }
        } }
    }"#;

    let from_json = BuildConfiguration::from_str_as(text, ConfigFormat::Json).unwrap();
    let module = from_json.to_string_as(ConfigFormat::JavaScript).unwrap();
    let from_module = BuildConfiguration::from_str_as(&module, ConfigFormat::JavaScript).unwrap();

    assert_eq!(from_module, from_json);
    assert_eq!(from_module.theme.extend.get("zIndex"), Some(&json!({ "max": u64::MAX, "min": i64::MIN })));
}
