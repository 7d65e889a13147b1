//! `cxxproject add`: register a sub-project in an existing project.

use tracing::instrument;

use crate::{
    cli::{AddCommands, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    cmd: AddCommands,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let assembler = super::assembler(global, config, output);

    let report = match cmd {
        AddCommands::Library(args) => match args.url {
            Some(url) => {
                output.header(&format!("Fetching {} from {url}", args.name))?;
                let report =
                    assembler.add_external_library(&args.name, &url, args.branch.as_deref())?;
                if !report.manifest_updated {
                    output.info(&format!(
                        "{} ships no library.cmake; add it to CMakeLists.txt by hand",
                        args.name
                    ))?;
                }
                report
            }
            None => {
                output.header(&format!("Adding library {}", args.name))?;
                assembler.add_library(&args.name)?
            }
        },
        AddCommands::Executable(args) => {
            output.header(&format!("Adding executable {}", args.name))?;
            assembler.add_executable(&args.name)?
        }
        AddCommands::Tests(args) => {
            output.header(&format!("Adding test directory {}", args.name))?;
            assembler.add_tests(&args.name)?
        }
    };

    super::report(&report, output)
}
