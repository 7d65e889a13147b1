//! Immutable project context.
//!
//! Every path fragment and tool setting the assembler needs is carried by a
//! [`ProjectContext`] value instead of process-wide constants. The three
//! settings groups are serde types so the CLI configuration can embed them.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::ProjectName};

/// Directory names of a generated project, relative to its root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Source root; every sub-project lives directly below it.
    pub source_dir: String,
    /// Test directory created by `create library`. Also the reserved name.
    pub tests_dir: String,
    /// Directory holding the version-injection descriptors.
    pub version_dir: String,
    /// Build output tree used by the wrapper.
    pub build_dir: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            source_dir: "src".into(),
            tests_dir: "tests".into(),
            version_dir: "version".into(),
            build_dir: "build".into(),
        }
    }
}

impl ProjectLayout {
    /// Relative path of a sub-project directory.
    pub fn subproject_dir(&self, name: &ProjectName) -> PathBuf {
        Path::new(&self.source_dir).join(name.as_str())
    }

    /// Forward-slash form of [`Self::subproject_dir`] for build descriptors.
    pub fn subproject_ref(&self, name: &str) -> String {
        format!("{}/{}", self.source_dir.trim_end_matches('/'), name)
    }

    pub fn tests_path(&self) -> PathBuf {
        Path::new(&self.source_dir).join(&self.tests_dir)
    }

    pub fn version_path(&self) -> PathBuf {
        PathBuf::from(&self.version_dir)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for (key, value) in [
            ("source_dir", &self.source_dir),
            ("version_dir", &self.version_dir),
            ("build_dir", &self.build_dir),
        ] {
            check_relative(key, value)?;
        }
        ProjectName::parse(self.tests_dir.as_str()).map_err(|e| {
            DomainError::InvalidLayout(format!("tests_dir '{}': {e}", self.tests_dir))
        })?;
        Ok(())
    }
}

fn check_relative(key: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::InvalidLayout(format!("{key} is empty")));
    }
    let path = Path::new(value);
    let ok = path
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !ok {
        return Err(DomainError::InvalidLayout(format!(
            "{key} '{value}' must be a plain relative path"
        )));
    }
    Ok(())
}

/// Values substituted into the generated CMake files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub cmake_minimum_version: String,
    pub cxx_standard: String,
    pub install_prefix: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            cmake_minimum_version: "3.13".into(),
            cxx_standard: "20".into(),
            install_prefix: "/usr/local".into(),
        }
    }
}

/// Version-control bookkeeping for a freshly created project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseSettings {
    pub initial_tag: String,
    pub commit_message: String,
}

impl Default for ReleaseSettings {
    fn default() -> Self {
        Self {
            initial_tag: "0.0.1".into(),
            commit_message: "Initial commit".into(),
        }
    }
}

/// Everything one assembler run needs to know about where and how to write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectContext {
    /// Project root; every generated path is joined onto it.
    pub root: PathBuf,
    pub layout: ProjectLayout,
    pub build: BuildSettings,
    pub release: ReleaseSettings,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: ProjectLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_build(mut self, build: BuildSettings) -> Self {
        self.build = build;
        self
    }

    pub fn with_release(mut self, release: ReleaseSettings) -> Self {
        self.release = release;
        self
    }

    /// Absolute (or cwd-relative) location of a project-relative path.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
