//! twconfig - validate, inspect and convert build configuration files.

use std::process;

use clap::Parser;
use twconfig::{
    cli::{Cli, formatting::format_error},
    tracing_config,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Warnings are part of command output; logs only carry errors unless RUST_LOG says otherwise.
    tracing_config::init("error")?;

    match cli.execute() {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
