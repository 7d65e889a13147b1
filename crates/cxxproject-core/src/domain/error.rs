// ============================================================================
// domain/error.rs - PRECONDITION ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ProjectKind;

/// Root domain error type.
///
/// Every variant is a precondition violation: it is raised before any file
/// is written or any external command runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Name Errors
    // ========================================================================
    #[error("Project name cannot be empty")]
    EmptyName,

    #[error("Name '{name}' cannot be used: it is reserved for the generated {purpose}")]
    ReservedName { name: String, purpose: String },

    #[error("Invalid {} name: {name}", .kind.noun())]
    AmbiguousName { name: String, kind: ProjectKind },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // File Set Errors
    // ========================================================================
    #[error("Duplicate path in generated file set: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec!["Pass a non-empty name, e.g. `create executable hello`".into()],
            Self::ReservedName { name, purpose } => vec![
                format!("'{}' is already used by the generated {}", name, purpose),
                "Choose a different project name".into(),
            ],
            Self::AmbiguousName { name, kind } if *kind == ProjectKind::EmptyLibrary => vec![
                format!("'{}' contains a path separator", name),
                "Plain names create an empty library under the source root".into(),
                "To fetch a library from git: add library <name> <url> [branch]".into(),
            ],
            Self::AmbiguousName { name, kind } => vec![
                format!("'{}' contains a path separator", name),
                format!("A {} is created directly under the source root", kind.noun()),
            ],
            Self::InvalidName { reason, .. } => vec![
                format!("Name rejected: {}", reason),
                "Use letters, digits, '_' or '-'".into(),
            ],
            Self::InvalidLayout(msg) => vec![
                format!("Layout problem: {}", msg),
                "Check the [layout] section of your configuration".into(),
            ],
            _ => vec!["This appears to be a bug in cxxproject".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
            Self::InvalidLayout(_) => ErrorCategory::Configuration,
            _ => ErrorCategory::Precondition,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Configuration,
    Internal,
}
