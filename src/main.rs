//! dismake-docs - theme tooling for the Dismake documentation site.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use dismake_docs::{
    cli::{self, Cli, Commands},
    config::ThemeConfig,
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ThemeConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_config(name.as_deref(), *dry),
        Commands::Render { args } => {
            config.validate()?;
            cli::render::render_page(&config, args)
        }
        Commands::Validate => cli::validate::validate_config(&config),
    }
}
