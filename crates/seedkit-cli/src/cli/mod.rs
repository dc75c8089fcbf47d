//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "seedkit",
    bin_name = "seedkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Bun monorepo starter generator",
    long_about = "Seedkit copies a monorepo template, moves every workspace \
                  package to your project's @scope, and pins placeholder \
                  dependency versions from the starter config.",
    after_help = "EXAMPLES:\n\
        \x20 seedkit new myapp\n\
        \x20 seedkit new myapp --template-dir ./templates/default --starter-config ./config.json\n\
        \x20 seedkit --output-format json new myapp\n\
        \x20 seedkit completions bash > /usr/share/bash-completion/completions/seedkit",
    arg_required_else_help = true,
    subcommand_required    = true,
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
    /// Generate a new project from the template.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 seedkit new myapp\n\
            \x20 seedkit new myapp --output-dir ~/code\n\
            \x20 seedkit new --yes            # use the default name"
    )]
    New(NewArgs),

    /// Write a default settings file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 seedkit init\n\
            \x20 seedkit init --force\n\
            \x20 seedkit --config ./seedkit.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 seedkit completions bash > ~/.local/share/bash-completion/completions/seedkit\n\
            \x20 seedkit completions zsh  > ~/.zfunc/_seedkit\n\
            \x20 seedkit completions fish > ~/.config/fish/completions/seedkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective settings.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 seedkit config get paths.template_dir\n\
            \x20 seedkit config list\n\
            \x20 seedkit config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `seedkit new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; also the root package name and the workspace scope.
    /// Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Project name (lowercase, e.g. myapp)")]
    pub name: Option<String>,

    /// Template to copy.
    #[arg(
        short = 't',
        long = "template-dir",
        value_name = "DIR",
        help = "Template directory (default: ../templates/default next to the binary)"
    )]
    pub template_dir: Option<PathBuf>,

    /// Starter `config.json` with the template scope and version table.
    #[arg(
        short = 's',
        long = "starter-config",
        value_name = "FILE",
        help = "Starter config.json (default: ../config.json next to the binary)"
    )]
    pub starter_config: Option<PathBuf>,

    /// Parent directory of the new project.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Directory to create the project in (default: current directory)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Use the default name instead of prompting.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Don't prompt; use the default name when NAME is omitted"
    )]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `seedkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing settings file.
    #[arg(long = "force", help = "Overwrite existing config")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `seedkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}

/// Supported shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `seedkit config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value.
    Get {
        /// Dotted key, e.g. `paths.template_dir`.
        key: String,
    },
    /// Print every value as TOML.
    List,
    /// Print the settings file location.
    Path,
}
