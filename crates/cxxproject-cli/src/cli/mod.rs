//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "cxxproject",
    bin_name = "cxxproject",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold and extend CMake C++ projects",
    long_about = "cxxproject creates a CMake project with a make wrapper, \
                  version stamping and a git repository, and later registers \
                  new libraries, executables, test directories and git \
                  submodules in its top-level CMakeLists.txt.",
    after_help = "EXAMPLES:\n\
        \x20 cxxproject create library mylib\n\
        \x20 cxxproject add executable demo\n\
        \x20 cxxproject add library fmt https://github.com/fmtlib/fmt.git master\n\
        \x20 cxxproject add tests integration",
    subcommand_required = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project in the project root.
    #[command(
        subcommand,
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 cxxproject create executable hello\n\
            \x20 cxxproject -C ../mylib create library mylib"
    )]
    Create(CreateCommands),

    /// Add a sub-project to an existing project.
    #[command(
        subcommand,
        about = "Add a sub-project",
        after_help = "EXAMPLES:\n\
            \x20 cxxproject add library util\n\
            \x20 cxxproject add library vendor/json https://github.com/nlohmann/json.git\n\
            \x20 cxxproject add executable tool\n\
            \x20 cxxproject add tests unit"
    )]
    Add(AddCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cxxproject completions bash > ~/.local/share/bash-completion/completions/cxxproject\n\
            \x20 cxxproject completions zsh  > ~/.zfunc/_cxxproject\n\
            \x20 cxxproject completions fish > ~/.config/fish/completions/cxxproject.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the resolved configuration.
    #[command(
        subcommand,
        about = "Configuration management",
        after_help = "EXAMPLES:\n\
            \x20 cxxproject config list\n\
            \x20 cxxproject config get build.cxx_standard\n\
            \x20 cxxproject config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Project kinds accepted by `cxxproject create`.
#[derive(Debug, Subcommand)]
pub enum CreateCommands {
    /// Executable project whose binary prints its version.
    Executable(NameArgs),
    /// Library project with a compile test and an aggregator file.
    Library(NameArgs),
}

/// A single sub-project name.
#[derive(Debug, Args)]
pub struct NameArgs {
    /// Sub-project name; becomes `src/<NAME>`.
    #[arg(value_name = "NAME")]
    pub name: String,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Sub-project kinds accepted by `cxxproject add`.
#[derive(Debug, Subcommand)]
pub enum AddCommands {
    /// Empty library, or a git submodule when a URL is given.
    #[command(
        long_about = "Add an empty library under src/<NAME>.\n\n\
                      With a URL the library is fetched as a git submodule \
                      instead, and its library.cmake is included when present. \
                      Only then may NAME contain '/'."
    )]
    Library(AddLibraryArgs),
    /// Empty executable.
    Executable(NameArgs),
    /// Test directory whose sources each become a test.
    Tests(NameArgs),
}

/// Arguments for `cxxproject add library`.
#[derive(Debug, Args)]
pub struct AddLibraryArgs {
    /// Library name, or submodule path below `src` when URL is given.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Remote repository to add as a submodule.
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Branch to track.
    #[arg(value_name = "BRANCH", requires = "url")]
    pub branch: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cxxproject completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cxxproject config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `layout.source_dir`.
        key: String,
    },
    /// Print all configuration values as TOML.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
