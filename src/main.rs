//! siteroot - print site and static asset URLs from configured roots.

mod cli;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{
    Cli, Commands,
    resolve::{print_roots, print_urls},
};
use siteroot::{RootKind, UrlConfig, UrlResolver, debug, log, resolver::global};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    siteroot::logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log!("error"; "{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    global::install(load_resolver(cli)?);

    match &cli.command {
        Commands::Site { args } => print_urls(RootKind::Site, args),
        Commands::Static { args } => print_urls(RootKind::Static, args),
        Commands::Roots { json } => print_roots(*json),
    }
}

/// Build the resolver from `urls.toml` plus CLI overrides.
fn load_resolver(cli: &Cli) -> Result<UrlResolver> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let mut config = UrlConfig::load(&cwd, &cli.config)?;
    config.apply_overrides(cli.site_root.as_deref(), cli.static_root.as_deref());
    config.validate()?;

    let urls = config.to_resolver();
    debug!(
        "config";
        "site root = {:?}, static root = {:?}",
        urls.site_root().map(|r| r.as_str()),
        urls.static_root().map(|r| r.as_str())
    );
    Ok(urls)
}
