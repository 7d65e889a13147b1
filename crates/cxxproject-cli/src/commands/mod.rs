//! Command handlers, one module per subcommand.

pub mod add;
pub mod completions;
pub mod config;
pub mod create;

use cxxproject_adapters::{GitCli, LocalFilesystem};
use cxxproject_core::prelude::{AssemblyReport, ProjectAssembler};

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Assembler over the real filesystem and `git`, rooted at `--directory`.
fn assembler(global: &GlobalArgs, config: &AppConfig, output: &OutputManager) -> ProjectAssembler {
    let root = &global.directory;
    let git = GitCli::new(root)
        .with_program(&config.vcs.program)
        .with_quiet(config.vcs.quiet || output.is_quiet());

    ProjectAssembler::new(
        Box::new(LocalFilesystem::new()),
        Box::new(git),
        config.to_context(root),
    )
}

/// Summarise what an operation wrote.
fn report(report: &AssemblyReport, output: &OutputManager) -> CliResult<()> {
    for path in &report.written {
        tracing::debug!(path = %path.display(), "Written");
    }
    for path in &report.skipped {
        output.warning(&format!("Kept existing {}", path.display()))?;
    }
    output.success(&format!(
        "{} {} in {}",
        report.kind,
        report.name,
        report.subdirectory.display()
    ))?;
    Ok(())
}
