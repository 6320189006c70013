//! seokit command-line entry point.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use seokit::{
    cli::{self, Cli, Commands},
    config::{SiteConfig, init_config},
    core,
    store::MockUserStore,
};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Serve { .. } => cli::serve::serve_site(),
        Commands::Head { path, full } => {
            cli::head::print_head(path, *full, &config, &MockUserStore::default())
        }
        Commands::Sitemap { output, lastmod } => {
            cli::artifact::generate_sitemap(&config, output, lastmod.as_deref())
        }
        Commands::Robots { output } => cli::artifact::generate_robots(&config, output),
    }
}
