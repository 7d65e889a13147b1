//! Error handling for the cxxproject CLI.
//!
//! Every failure that reaches `main` is fatal: it is printed once to stderr
//! behind a `Fatal:` prefix, followed by suggestions, and the process exits
//! with [`FATAL_EXIT_CODE`]. Usage errors are handled by clap and never
//! become a [`CliError`].

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use cxxproject_core::error::{CoreError, ErrorCategory};

/// Exit status for every reported failure.
pub const FATAL_EXIT_CODE: u8 = 128;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `cxxproject-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Writing to the terminal or reading the environment failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { .. } => vec![
                "Check the files listed by `cxxproject config path` and .cxxproject.toml".into(),
                "Environment overrides use CXXPROJECT_<SECTION>__<KEY>".into(),
            ],

            Self::IoError { .. } => vec!["Check file permissions".into()],
        }
    }

    /// Failure kind, for logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => core.category(),
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Io,
        }
    }

    /// Exit code to pass to the OS. The same for every failure kind.
    pub fn exit_code(&self) -> u8 {
        FATAL_EXIT_CODE
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = format!("{} {}\n", "Fatal:".red().bold(), self.to_string().red());

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("Fatal: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Record the error for `-vv` runs; the user-facing report is printed
    /// separately by `main`.
    pub fn log(&self) {
        tracing::debug!(category = ?self.category(), "Operation failed: {}", self);

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}
