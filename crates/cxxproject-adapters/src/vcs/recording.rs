//! Recording version-control adapter for testing.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cxxproject_core::{
    application::{ApplicationError, ports::VersionControl},
    error::CoreResult,
};

/// Records each command as the `git` argument line it stands for.
///
/// Clones share the log. A command whose text starts with the configured
/// failure prefix fails instead of being recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordingVcs {
    log: Arc<Mutex<Vec<String>>>,
    fail_on: Option<String>,
}

impl RecordingVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command starting with `prefix`, e.g. `"submodule add"`.
    pub fn failing_on(prefix: impl Into<String>) -> Self {
        Self {
            fail_on: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Commands recorded so far, oldest first.
    pub fn commands(&self) -> Vec<String> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn record(&self, command: String) -> CoreResult<()> {
        if let Some(prefix) = &self.fail_on {
            if command.starts_with(prefix.as_str()) {
                return Err(ApplicationError::CommandFailed {
                    command: format!("git {command}"),
                    reason: "exit status: 1".into(),
                }
                .into());
            }
        }
        if let Ok(mut log) = self.log.lock() {
            log.push(command);
        }
        Ok(())
    }
}

fn join(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl VersionControl for RecordingVcs {
    fn init(&self) -> CoreResult<()> {
        self.record("init".into())
    }

    fn add(&self, paths: &[PathBuf]) -> CoreResult<()> {
        self.record(format!("add {}", join(paths)))
    }

    fn commit(&self, message: &str) -> CoreResult<()> {
        self.record(format!("commit -m {message}"))
    }

    fn tag(&self, name: &str) -> CoreResult<()> {
        self.record(format!("tag {name}"))
    }

    fn submodule_add(&self, url: &str, path: &Path, branch: Option<String>) -> CoreResult<()> {
        let command = match branch {
            Some(branch) => format!("submodule add -b {branch} {url} {}", path.display()),
            None => format!("submodule add {url} {}", path.display()),
        };
        self.record(command)
    }

    fn submodule_update(&self, path: &Path) -> CoreResult<()> {
        self.record(format!(
            "submodule update --init --recursive {}",
            path.display()
        ))
    }
}
