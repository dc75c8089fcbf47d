//! Flags shared by every `seedkit` subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// More log output on stderr (-v, -vv, -vvv)
    ///
    /// Without the flag only warnings and errors are logged. `-v` adds one
    /// line per pipeline stage, `-vv` one line per file rewritten, `-vvv`
    /// every file walked and copied. `RUST_LOG` overrides all of these.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour (also set by NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Seedkit settings file in TOML
    ///
    /// This is the tool's own settings file. The starter `config.json` with
    /// the package versions is passed to `new --starter-config`.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// What `new` prints on stdout
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped
    #[default]
    Auto,
    /// Status lines in colour, with a spinner while the pipeline runs
    Human,
    /// Status lines without colour
    Plain,
    /// Only the scaffold report, as a JSON document
    Json,
}

impl OutputFormat {
    /// Whether headers, `✓` lines, warnings and hints may go to stdout.
    /// JSON output is the report alone, so it can be piped into a parser.
    pub fn shows_status(self) -> bool {
        !matches!(self, Self::Json)
    }
}
