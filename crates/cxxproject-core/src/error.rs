//! Unified error handling for cxxproject-core.
//!
//! Wraps domain and application errors behind one type with user-actionable
//! suggestions. The CLI maps every variant to the same fatal exit status.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// Precondition violations, raised before any side effect.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Filesystem and external-command failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in cxxproject".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Precondition => ErrorCategory::Precondition,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories, mirroring the failure taxonomy of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Reserved name, existing target, ambiguous name.
    Precondition,
    /// Cannot read or write a file.
    Io,
    /// Version-control command exited non-zero.
    ExternalCommand,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_are_preconditions() {
        let err: CoreError = DomainError::ReservedName {
            name: "tests".into(),
            purpose: "test directory".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Precondition);
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn command_failures_keep_command_text() {
        let err: CoreError = ApplicationError::CommandFailed {
            command: "git commit -m Initial commit".into(),
            reason: "exit status: 1".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::ExternalCommand);
        assert!(err.to_string().contains("git commit"));
    }

    #[test]
    fn filesystem_errors_name_path_and_operation() {
        let err: CoreError = ApplicationError::FilesystemError {
            path: PathBuf::from("src/app/app.h"),
            operation: "write",
            reason: "Permission denied (os error 13)".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Io);
        let text = err.to_string();
        assert!(text.contains("src/app/app.h"));
        assert!(text.contains("os error 13"));
    }
}
