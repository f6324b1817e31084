//! `site`, `static` and `roots` commands.

use anyhow::{Context, Result};
use siteroot::{Root, RootKind, RootSource, UrlResolver, debug, resolver::global};
use std::io::{self, BufRead, Write};

use super::ResolveArgs;

/// Print one resolved URL per input path.
pub fn print_urls(kind: RootKind, args: &ResolveArgs) -> Result<()> {
    let paths = expand_paths(&args.paths, io::stdin().lock())?;
    let urls = resolve_all(kind, &paths)?;

    let mut stdout = io::stdout().lock();
    for url in urls {
        writeln!(stdout, "{url}")?;
    }
    Ok(())
}

/// Resolve every path against the global resolver, stopping at the first error.
fn resolve_all(kind: RootKind, paths: &[String]) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|path| -> Result<String> {
            let url = match kind {
                RootKind::Site => global::site_url(path),
                RootKind::Static => global::static_url(path),
            }
            .with_context(|| format!("cannot resolve `{path}`"))?;
            debug!("resolve"; "{} -> {}", path, url);
            Ok(url)
        })
        .collect()
}

/// Replace `-` with lines from `stdin`; no paths means the root itself.
fn expand_paths(paths: &[String], stdin: impl BufRead) -> Result<Vec<String>> {
    if paths.is_empty() {
        return Ok(vec![String::new()]);
    }

    if !paths.iter().any(|p| p == "-") {
        return Ok(paths.to_vec());
    }

    let from_stdin = read_paths(stdin)?;
    let mut expanded = Vec::with_capacity(paths.len() + from_stdin.len());
    for path in paths {
        if path == "-" {
            expanded.extend(from_stdin.iter().cloned());
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}

/// Read paths one per line, skipping blank lines
fn read_paths(reader: impl BufRead) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read paths from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(trimmed.to_string());
        }
    }
    Ok(paths)
}

// ============================================================================
// roots
// ============================================================================

/// Print the configured roots as text or JSON.
pub fn print_roots(json: bool) -> Result<()> {
    let urls = global::snapshot();
    let output = render_roots(&urls, json)?;
    writeln!(io::stdout().lock(), "{output}")?;
    Ok(())
}

fn render_roots(urls: &UrlResolver, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(urls)?);
    }

    let show = |root: Option<&Root>| root.map_or("(unset)".to_string(), Root::to_string);
    let source = match urls.static_source() {
        Some(RootSource::Derived) => " (derived)",
        Some(RootSource::Explicit) | None => "",
    };
    Ok(format!(
        "site:   {}\nstatic: {}{}",
        show(urls.site_root()),
        show(urls.static_root()),
        source
    ))
}
