//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use siteroot::config::DEFAULT_CONFIG_NAME;
use std::path::PathBuf;

/// Build site and static asset URLs from configured roots
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the site root from the config file
    #[arg(short = 'r', long = "site-root", global = true, value_hint = clap::ValueHint::Url)]
    pub site_root: Option<String>,

    /// Override the static root (defaults to <site root>static/)
    #[arg(short = 's', long = "static-root", global = true, value_hint = clap::ValueHint::Url)]
    pub static_root: Option<String>,

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
    /// Print URLs under the site root
    #[command(visible_alias = "u")]
    Site {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Print URLs under the static root
    #[command(visible_alias = "a")]
    Static {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Print the configured roots
    Roots {
        /// Output JSON instead of plain text
        #[arg(short, long)]
        json: bool,
    },
}

/// Shared arguments for Site and Static commands
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Relative paths to resolve. If omitted, prints the root itself.
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}
