//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::theme::ThemeMode;

/// Dismake documentation theme CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: theme.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "theme.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default theme.toml
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Render theme output for one page
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Validate theme.toml
    #[command(visible_alias = "v")]
    Validate,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Page title supplied to the head hook
    #[arg(short, long)]
    pub title: String,

    /// Page source path, used for the edit link (e.g. guide/intro.mdx)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Resolved theme mode of the page
    #[arg(long, value_enum, default_value = "light")]
    pub theme: ThemeMode,

    /// Render as if the theme provider had not mounted yet
    #[arg(short, long)]
    pub unmounted: bool,

    /// Which extension point to print
    #[arg(long, value_enum, default_value = "all")]
    pub part: RenderPart,

    /// Print JSON instead of HTML
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderPart {
    All,
    Logo,
    Head,
    Banner,
    Footer,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
