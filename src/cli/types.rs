use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid arguments were provided to a command.
    ///
    /// Returned when argument values are well-formed for clap but make no
    /// sense for the command, such as converting a file onto itself.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A dotted key does not lead to a value.
    #[error("Invalid key path: {0}")]
    InvalidPath(String),

    /// Loading, validating or writing a configuration failed.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::ConfigError),

    /// Output could not be produced.
    #[error("Output error: {0}")]
    OutputError(String),
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either the text to print
/// on success or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;
