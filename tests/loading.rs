//! Integration tests for loading configurations from disk.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{fs, path::PathBuf};

use clap::Parser;
use tempfile::TempDir;
use twconfig::{
    ConfigError, Warning,
    cli::Cli,
    config::{BuildConfiguration, ConfigFormat, ConfigPaths, DarkMode, FontStack, LoadOptions},
};

const REFERENCE_MODULE: &str = r#"/** @type {import('tailwindcss').Config} */
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

fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("src/components")).unwrap();
    fs::write(temp_dir.path().join("index.html"), "<body class=\"font-alfa-slab\"></body>").unwrap();
    fs::write(temp_dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(temp_dir.path().join("src/components/app.rs"), "").unwrap();
    temp_dir
}

fn write_config(temp_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(filename);
    fs::write(&path, content).unwrap();
    path
}

mod loading {
    use super::*;

    #[test]
    fn loads_reference_module() {
        let project = setup_project();
        let path = write_config(&project, "tailwind.config.js", REFERENCE_MODULE);

        let config = BuildConfiguration::load(&path).unwrap();

        assert_eq!(config, BuildConfiguration::example());
    }

    #[test]
    fn loads_scenario_a_from_each_format() {
        let project = setup_project();
        let sources = [
            (
                "a.json",
                r#"{ "darkMode": "media", "content": { "files": ["src/**/*.rs"] }, "theme": { "fontFamily": { "alfa-slab": ["Alfa Slab One", "sans-serif"] } } }"#,
            ),
            (
                "a.toml",
                "darkMode = \"media\"\n[content]\nfiles = [\"src/**/*.rs\"]\n[theme.fontFamily]\nalfa-slab = [\"Alfa Slab One\", \"sans-serif\"]\n",
            ),
            (
                "a.mjs",
                "export default { darkMode: 'media', content: { files: ['src/**/*.rs'] }, theme: { fontFamily: { 'alfa-slab': ['Alfa Slab One', 'sans-serif'] } } }",
            ),
        ];

        for (name, text) in sources {
            let path = write_config(&project, name, text);
            let config = BuildConfiguration::load(&path).unwrap();

            assert_eq!(config.dark_mode, DarkMode::Media, "{name}");
            assert_eq!(
                config.theme.font_family.get("alfa-slab"),
                Some(&FontStack::from(["Alfa Slab One", "sans-serif"])),
                "{name}"
            );
        }
    }

    #[test]
    fn missing_file_is_io_error_with_path() {
        let project = setup_project();
        let path = project.path().join("tailwind.config.json");

        let err = BuildConfiguration::load(&path).unwrap_err();

        match err {
            ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unsupported_expression_points_at_file() {
        let project = setup_project();
        let path = write_config(
            &project,
            "tailwind.config.js",
            "module.exports = {\n  content: { files: ['src/**/*.rs'] },\n  darkMode: process.env.DARK_MODE,\n};\n",
        );

        let err = BuildConfiguration::load(&path).unwrap_err();

        match err {
            ConfigError::Parse {
                location,
                line,
                column,
                ..
            } => {
                assert_eq!(location, path.display().to_string());
                assert_eq!((line, column), (3, 13));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn loads_module_with_required_plugins() {
        let project = setup_project();
        let path = write_config(
            &project,
            "tailwind.config.cjs",
            "module.exports = {\n  content: { files: ['src/**/*.rs'] },\n  plugins: [require('@tailwindcss/forms'), require('@tailwindcss/typography')],\n};\n",
        );

        let config = BuildConfiguration::load(&path).unwrap();
        let names: Vec<_> = config.plugins.iter().filter_map(|plugin| plugin.name()).collect();

        assert_eq!(names, ["@tailwindcss/forms", "@tailwindcss/typography"]);
    }

    #[test]
    fn unsupported_extension() {
        let project = setup_project();
        let path = write_config(&project, "tailwind.config.ts", "export default {}");

        let err = BuildConfiguration::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn lenient_load_reports_unknown_keys() {
        let project = setup_project();
        let path = write_config(
            &project,
            "tailwind.config.json",
            r#"{ "content": { "files": ["index.html"] }, "prefix": "tw-" }"#,
        );

        assert!(BuildConfiguration::load(&path).is_err());

        let loaded = BuildConfiguration::load_with_options(&path, &LoadOptions::lenient()).unwrap();
        assert_eq!(
            loaded.warnings,
            vec![Warning::UnknownKey {
                key: "prefix".to_string()
            }]
        );
        assert_eq!(loaded.format, ConfigFormat::Json);
    }
}

mod content {
    use super::*;

    #[test]
    fn resolves_relative_to_config_directory() {
        let project = setup_project();
        let path = write_config(&project, "tailwind.config.js", REFERENCE_MODULE);

        let loaded = BuildConfiguration::load_with_options(&path, &LoadOptions::default()).unwrap();
        let resolution = loaded.resolve_content().unwrap();

        assert_eq!(resolution.base_dir, project.path());
        assert_eq!(
            resolution.files,
            vec![
                PathBuf::from("index.html"),
                PathBuf::from("src/components/app.rs"),
                PathBuf::from("src/main.rs"),
            ]
        );
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn unmatched_pattern_does_not_fail_the_build() {
        let project = setup_project();
        let path = write_config(
            &project,
            "tailwind.config.json",
            r#"{ "content": { "files": ["src/**/*.rs", "templates/**/*.html"] } }"#,
        );

        let loaded = BuildConfiguration::load_with_options(&path, &LoadOptions::default()).unwrap();
        let resolution = loaded.resolve_content().unwrap();

        assert_eq!(resolution.files.len(), 2);
        assert_eq!(
            resolution.warnings,
            vec![Warning::UnmatchedPattern {
                pattern: "templates/**/*.html".to_string()
            }]
        );
    }
}

mod saving {
    use super::*;

    #[test]
    fn save_then_load_is_stable_for_every_format() {
        let project = setup_project();
        let original = BuildConfiguration::example();

        for name in ["out/tailwind.config.js", "out/tailwind.config.json", "out/tailwind.config.toml"] {
            let path = project.path().join(name);
            original.save(&path).unwrap();

            assert_eq!(BuildConfiguration::load(&path).unwrap(), original, "{name}");
        }
    }

    #[test]
    fn discovery_finds_saved_file() {
        let project = setup_project();
        BuildConfiguration::example()
            .save(&project.path().join("tailwind.config.toml"))
            .unwrap();

        let found = ConfigPaths::discover(project.path()).unwrap();

        assert_eq!(found, project.path().join("tailwind.config.toml"));
    }
}

mod cli {
    use super::*;

    fn run(args: &[&str]) -> Result<String, twconfig::cli::CliError> {
        let mut argv = vec!["twconfig"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv).execute()
    }

    #[test]
    fn check_summarizes_configuration() {
        let project = setup_project();
        write_config(&project, "tailwind.config.js", REFERENCE_MODULE);

        let output = run(&["check", project.path().to_str().unwrap()]).unwrap();

        assert!(output.contains("darkMode: media"));
        assert!(output.contains("alfa-slab, fira-sans, work-sans"));
        assert!(output.ends_with("ok"));
    }

    #[test]
    fn check_fails_on_schema_error() {
        let project = setup_project();
        let path = write_config(
            &project,
            "tailwind.config.json",
            r#"{ "darkMode": "toggle", "content": { "files": ["src/**/*.rs"] } }"#,
        );

        let err = run(&["check", path.to_str().unwrap()]).unwrap_err();

        assert!(err.to_string().contains("darkMode"));
    }

    #[test]
    fn files_lists_matches() {
        let project = setup_project();
        write_config(&project, "tailwind.config.js", REFERENCE_MODULE);

        let output = run(&["files", project.path().to_str().unwrap()]).unwrap();

        assert!(output.contains("index.html"));
        assert!(output.contains("3 file(s) matched by 2 pattern(s)"));
    }

    #[test]
    fn get_prints_dotted_key() {
        let project = setup_project();
        write_config(&project, "tailwind.config.js", REFERENCE_MODULE);

        let output = run(&[
            "get",
            "theme.fontFamily.work-sans",
            "--config",
            project.path().to_str().unwrap(),
        ])
        .unwrap();

        assert_eq!(output, "theme.fontFamily.work-sans: [\"Work Sans\",\"sans-serif\"]");
    }

    #[test]
    fn convert_writes_target_format() {
        let project = setup_project();
        let input = write_config(&project, "tailwind.config.js", REFERENCE_MODULE);
        let output = project.path().join("tailwind.config.toml");

        run(&["convert", input.to_str().unwrap(), output.to_str().unwrap()]).unwrap();

        assert_eq!(
            BuildConfiguration::load(&output).unwrap(),
            BuildConfiguration::example()
        );
    }

    #[test]
    fn schema_prints_json_schema() {
        let output = run(&["schema"]).unwrap();
        let schema: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(schema["properties"]["darkMode"].is_object());
    }
}
