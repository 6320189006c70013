//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Server-side rendering SEO toolkit CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seokit.toml)
    #[arg(short = 'C', long, global = true, default_value = "seokit.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the site URL (canonical links, sitemap, robots)
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

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
    /// Serve the demo site with rendered SEO metadata
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Simulated entity lookup latency in milliseconds
        #[arg(short, long)]
        latency: Option<u64>,
    },

    /// Print the rendered <head> of a route (e.g. `/users/1`)
    #[command(visible_alias = "h")]
    Head {
        /// Route path to render
        path: String,

        /// Print the full HTML document instead of the head only
        #[arg(short, long)]
        full: bool,
    },

    /// Generate sitemap.xml
    Sitemap {
        #[command(flatten)]
        output: OutputArgs,

        /// Fixed <lastmod> date (YYYY-MM-DD) instead of today
        #[arg(long)]
        lastmod: Option<String>,
    },

    /// Generate robots.txt
    Robots {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Where to write a generated artifact.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::parse_from(["seokit", "serve", "-p", "8080", "--latency", "200"]);
        match cli.command {
            Commands::Serve { port, latency, interface } => {
                assert_eq!(port, Some(8080));
                assert_eq!(latency, Some(200));
                assert!(interface.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_head_with_globals() {
        let cli = Cli::parse_from(["seokit", "head", "/users/1", "-U", "https://example.com", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.site_url.as_deref(), Some("https://example.com"));
        assert!(matches!(cli.command, Commands::Head { ref path, full: false } if path == "/users/1"));
    }

    #[test]
    fn test_parse_sitemap_output() {
        let cli = Cli::parse_from(["seokit", "sitemap", "-o", "out.xml", "--lastmod", "2024-01-01"]);
        match cli.command {
            Commands::Sitemap { output, lastmod } => {
                assert_eq!(output.output, Some(PathBuf::from("out.xml")));
                assert_eq!(lastmod.as_deref(), Some("2024-01-01"));
            }
            _ => panic!("expected sitemap"),
        }
    }
}
