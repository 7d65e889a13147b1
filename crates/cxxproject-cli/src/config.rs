//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate only sees the [`ProjectContext`] built
//! from it.
//!
//! # Resolution order (lowest priority first)
//!
//! 1. Built-in defaults
//! 2. User config file (`config.toml` in the platform config directory)
//! 3. Project file `.cxxproject.toml` in the project root
//! 4. The file passed with `--config` (must exist)
//! 5. Environment variables `CXXPROJECT_<SECTION>__<KEY>`

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use cxxproject_core::domain::{BuildSettings, ProjectContext, ProjectLayout, ReleaseSettings};

use crate::error::{CliError, CliResult};

/// Name of the per-project override file.
pub const PROJECT_FILE: &str = ".cxxproject.toml";

const ENV_PREFIX: &str = "CXXPROJECT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory names inside generated projects.
    pub layout: ProjectLayout,
    /// Values written into the CMake files.
    pub build: BuildSettings,
    /// Initial commit and tag of `create`.
    pub release: ReleaseSettings,
    /// Version-control settings.
    pub vcs: VcsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    /// Executable run for every version-control command.
    pub program: String,
    /// Hide git's standard output.
    pub quiet: bool,
}

impl Default for VcsConfig {
    fn default() -> Self {
        Self {
            program: "git".into(),
            quiet: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Resolve configuration for a project rooted at `project_root`.
    ///
    /// `config_file` is the path passed via `--config`; unlike the other
    /// files it must exist.
    pub fn load(project_root: &Path, config_file: Option<&Path>) -> CliResult<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(toml_file(&Self::config_path()).required(false))
            .add_source(toml_file(&project_root.join(PROJECT_FILE)).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(toml_file(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<AppConfig>()?;

        tracing::debug!(?config, "Configuration resolved");
        Ok(config)
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cxxproject.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "cxxproject", "cxxproject")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(PROJECT_FILE))
    }

    /// Assembler context for a project rooted at `root`.
    pub fn to_context(&self, root: impl Into<PathBuf>) -> ProjectContext {
        ProjectContext::new(root)
            .with_layout(self.layout.clone())
            .with_build(self.build.clone())
            .with_release(self.release.clone())
    }

    /// Look up a dotted key such as `build.cxx_standard`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let mut value = toml::Value::try_from(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?;

        for part in key.split('.') {
            value = match value {
                toml::Value::Table(mut table) => table.remove(part),
                _ => None,
            }
            .ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })?;
        }

        Ok(match value {
            toml::Value::String(s) => s,
            other => other.to_string(),
        })
    }

    /// Whole configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
