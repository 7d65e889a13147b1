//! `git` executable adapter.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use cxxproject_core::{
    application::{ApplicationError, ports::VersionControl},
    error::CoreResult,
};
use tracing::debug;

/// Runs the `git` command line in the project root.
///
/// Each call blocks until git exits. Only the exit status is checked; git's
/// own output goes to the terminal unless `quiet` is set.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    workdir: PathBuf,
    quiet: bool,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            program: OsString::from("git"),
            workdir: workdir.into(),
            quiet: false,
        }
    }

    /// Use another executable, e.g. an absolute path to git.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Discard git's standard output.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn run<I, S>(&self, args: I) -> CoreResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<OsString> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
        let command = self.describe(&args);
        debug!(%command, workdir = %self.workdir.display(), "Running");

        let mut cmd = Command::new(&self.program);
        cmd.args(&args).current_dir(&self.workdir);
        if self.quiet {
            cmd.stdout(Stdio::null());
        }

        let status = cmd.status().map_err(|e| ApplicationError::CommandFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

        if !status.success() {
            return Err(ApplicationError::CommandFailed {
                command,
                reason: status.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn describe(&self, args: &[OsString]) -> String {
        let mut text = self.program.to_string_lossy().into_owned();
        for arg in args {
            text.push(' ');
            text.push_str(&arg.to_string_lossy());
        }
        text
    }
}

impl VersionControl for GitCli {
    fn init(&self) -> CoreResult<()> {
        self.run(["init"])
    }

    fn add(&self, paths: &[PathBuf]) -> CoreResult<()> {
        let mut args: Vec<&OsStr> = vec![OsStr::new("add")];
        args.extend(paths.iter().map(|p| p.as_os_str()));
        self.run(args)
    }

    fn commit(&self, message: &str) -> CoreResult<()> {
        self.run(["commit", "-m", message])
    }

    fn tag(&self, name: &str) -> CoreResult<()> {
        self.run(["tag", name])
    }

    fn submodule_add(&self, url: &str, path: &Path, branch: Option<String>) -> CoreResult<()> {
        let mut args: Vec<&OsStr> = vec![OsStr::new("submodule"), OsStr::new("add")];
        if let Some(branch) = branch.as_deref() {
            args.push(OsStr::new("-b"));
            args.push(OsStr::new(branch));
        }
        args.push(OsStr::new(url));
        args.push(path.as_os_str());
        self.run(args)
    }

    fn submodule_update(&self, path: &Path) -> CoreResult<()> {
        self.run([
            OsStr::new("submodule"),
            OsStr::new("update"),
            OsStr::new("--init"),
            OsStr::new("--recursive"),
            path.as_os_str(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cxxproject_core::error::CoreError;
    use tempfile::TempDir;

    #[test]
    fn missing_program_is_a_command_failure() {
        let dir = TempDir::new().unwrap();
        let git = GitCli::new(dir.path()).with_program("cxxproject-no-such-git");

        let err = git.init().unwrap_err();

        match err {
            CoreError::Application(ApplicationError::CommandFailed { command, .. }) => {
                assert_eq!(command, "cxxproject-no-such-git init");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn describe_includes_every_argument() {
        let git = GitCli::new(".");
        let args = [OsString::from("commit"), OsString::from("-m"), OsString::from("Initial commit")];
        assert_eq!(git.describe(&args), "git commit -m Initial commit");
    }
}
