//! `cxxproject create`: initialise a new project in the project root.

use tracing::instrument;

use crate::{
    cli::{CreateCommands, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    cmd: CreateCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let assembler = super::assembler(global, config, output);

    let report = match cmd {
        CreateCommands::Executable(args) => {
            output.header(&format!("Creating executable project {}", args.name))?;
            assembler.create_executable(&args.name)?
        }
        CreateCommands::Library(args) => {
            output.header(&format!("Creating library project {}", args.name))?;
            assembler.create_library(&args.name)?
        }
    };

    super::report(&report, output)?;
    output.info(&format!(
        "Tagged {} in {}",
        config.release.initial_tag,
        global.directory.display()
    ))?;
    if !output.is_quiet() {
        output.print("DONE!")?;
        output.print(&format!(
            "Enter `make` to build the project {}.",
            report.name
        ))?;
    }
    Ok(())
}
