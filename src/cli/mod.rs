//! Command-line interface for inspecting and converting configurations.
//!
//! Every command loads the configuration the same way the library does,
//! so a file that passes `check` is exactly a file `load` accepts.

mod commands;
pub mod formatting;
mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use types::{CliError, CommandResult};

use crate::config::LoadOptions;

/// Top-level arguments of the `twconfig` binary.
#[derive(Debug, Parser)]
#[command(name = "twconfig")]
#[command(about = "Validate, inspect and convert utility-CSS build configurations")]
#[command(version)]
pub struct Cli {
    /// Warn about unknown keys instead of rejecting them.
    #[arg(long, global = true)]
    pub lenient: bool,

    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load and validate a configuration, then summarize it.
    Check {
        /// Configuration file or project directory (defaults to the working directory).
        path: Option<PathBuf>,
    },

    /// List the files selected by `content.files`.
    Files {
        /// Configuration file or project directory (defaults to the working directory).
        path: Option<PathBuf>,
    },

    /// Print the value at a dotted key, e.g. `theme.fontFamily.alfa-slab`.
    Get {
        /// Dotted key into the normalized configuration.
        key: String,

        /// Configuration file or project directory (defaults to the working directory).
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Rewrite a configuration in the format of the output extension.
    Convert {
        /// Configuration to read.
        input: PathBuf,
        /// File to write (.js, .cjs, .mjs, .json or .toml).
        output: PathBuf,
    },

    /// Print the configuration schema.
    Schema {
        /// Render a markdown reference instead of JSON Schema.
        #[arg(long)]
        markdown: bool,
    },
}

impl Cli {
    /// Load options selected by the global flags.
    pub fn load_options(&self) -> LoadOptions {
        if self.lenient {
            LoadOptions::lenient()
        } else {
            LoadOptions::default()
        }
    }

    /// Runs the selected command and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns `CliError` when the command fails; the caller decides how to
    /// report it and which exit code to use.
    pub fn execute(&self) -> CommandResult {
        let options = self.load_options();

        match &self.command {
            Commands::Check { path } => commands::check(path.as_deref(), &options),
            Commands::Files { path } => commands::files(path.as_deref(), &options),
            Commands::Get { key, config } => commands::get(config.as_deref(), key, &options),
            Commands::Convert { input, output } => commands::convert(input, output, &options),
            Commands::Schema { markdown } => commands::schema(*markdown),
        }
    }
}
