//! Domain value objects: ProjectName, ProjectKind, IncludeGuardToken.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. The
//! only impurity is [`IncludeGuardToken::random`], which draws from a
//! non-cryptographic generator.

use crate::domain::error::DomainError;
use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::SmallRng};
use std::fmt;
use std::path::Path;

// ── ProjectName ──────────────────────────────────────────────────────────────

/// A validated project, library, executable or test-directory name.
///
/// The raw string is used for directory, file and target names; the derived
/// [`ProjectName::identifier`] and [`ProjectName::macro_token`] forms are used
/// where C++ or CMake need an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse a plain name (a single path component).
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_component(&name, &name)?;
        Ok(Self(name))
    }

    /// Parse a name that may be a relative path below the source root.
    ///
    /// Only externally fetched dependencies accept this form.
    pub fn parse_path(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        if Path::new(&name).is_absolute() || name.starts_with(['/', '\\']) {
            return Err(DomainError::InvalidName {
                name,
                reason: "must be relative to the source directory".into(),
            });
        }
        for part in name.split(['/', '\\']) {
            validate_component(&name, part)?;
        }
        Ok(Self(name))
    }

    /// Whether the raw name contains a path separator.
    pub fn has_separator(name: &str) -> bool {
        name.contains(['/', '\\'])
    }

    /// Fail if this name collides with `reserved`, a name the generator
    /// itself uses for `purpose`.
    pub fn ensure_not_reserved(&self, reserved: &str, purpose: &str) -> Result<(), DomainError> {
        if self.0 == reserved {
            return Err(DomainError::ReservedName {
                name: self.0.clone(),
                purpose: purpose.into(),
            });
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path component (equal to the name for plain names).
    pub fn leaf(&self) -> &str {
        self.0.rsplit(['/', '\\']).next().unwrap_or(&self.0)
    }

    /// C++ identifier form: every non-alphanumeric character becomes `_`,
    /// and a leading digit gets a `_` prefix.
    pub fn identifier(&self) -> String {
        let token = self.token();
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            format!("_{token}")
        } else {
            token
        }
    }

    /// Macro form, always used behind a prefix such as `PROJECT_`.
    pub fn macro_token(&self) -> String {
        self.token().to_ascii_uppercase()
    }

    fn token(&self) -> String {
        self.leaf()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn validate_component(full: &str, part: &str) -> Result<(), DomainError> {
    if part.is_empty() {
        return Err(DomainError::EmptyName);
    }
    if part == "." || part == ".." {
        return Err(DomainError::InvalidName {
            name: full.into(),
            reason: format!("'{part}' is not a directory name"),
        });
    }
    if ProjectName::has_separator(part) {
        return Err(DomainError::InvalidName {
            name: full.into(),
            reason: "must not contain a path separator".into(),
        });
    }
    if let Some(bad) = part
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(DomainError::InvalidName {
            name: full.into(),
            reason: format!("character {bad:?} is not allowed"),
        });
    }
    Ok(())
}

// ── ProjectKind ───────────────────────────────────────────────────────────────

/// What a single assembler invocation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    /// `create executable`: new root with a version-aware executable.
    Executable,
    /// `create library`: new root with a library, tests and aggregator.
    Library,
    /// `add library <name>`: empty library in an existing project.
    EmptyLibrary,
    /// `add executable`: runnable stub in an existing project.
    EmptyExecutable,
    /// `add tests`: bare test directory.
    TestDirectory,
    /// `add library <name> <url> [branch]`: fetched as a git submodule.
    ExternalDependency,
}

impl ProjectKind {
    /// Noun used in messages about a name of this kind.
    pub const fn noun(&self) -> &'static str {
        match self {
            Self::Executable | Self::EmptyExecutable => "executable",
            Self::Library | Self::EmptyLibrary | Self::ExternalDependency => "library",
            Self::TestDirectory => "test directory",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Executable => "executable",
            Self::Library => "library",
            Self::EmptyLibrary => "empty-library",
            Self::EmptyExecutable => "empty-executable",
            Self::TestDirectory => "tests",
            Self::ExternalDependency => "external-dependency",
        }
    }

    /// Whether this kind initialises a brand-new project root.
    pub const fn is_root(self) -> bool {
        matches!(self, Self::Executable | Self::Library)
    }

    /// Whether the generated target depends on the version-generation step.
    pub const fn has_version_header(self) -> bool {
        matches!(self, Self::Executable)
    }

    /// Whether the sub-project source stub has an entry point.
    pub const fn is_runnable(self) -> bool {
        matches!(self, Self::Executable | Self::EmptyExecutable)
    }

    /// Whether the kind produces a library target.
    pub const fn is_library(self) -> bool {
        matches!(self, Self::Library | Self::EmptyLibrary)
    }

    /// Whether the kind owns a paired test directory and enables the test runner.
    pub const fn owns_tests(self) -> bool {
        matches!(self, Self::Library)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── IncludeGuardToken ────────────────────────────────────────────────────────

/// Random suffix that makes a header's guard macro unique.
///
/// Collisions are only unlikely, not impossible; a small non-cryptographic
/// generator is enough for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeGuardToken(String);

impl IncludeGuardToken {
    pub const LEN: usize = 16;

    pub fn random() -> Self {
        let rng = SmallRng::from_os_rng();
        Self(
            rng.sample_iter(Alphanumeric)
                .take(Self::LEN)
                .map(|b| char::from(b).to_ascii_uppercase())
                .collect(),
        )
    }

    /// Fixed token, for reproducible output.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IncludeGuardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
