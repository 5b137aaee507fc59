use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::Args;

/// Splits a domain list into entries, skipping comment lines.
///
/// Blank lines are kept; the normalizer drops them and counts them.
pub fn parse_domain_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_domain_file(path: &Path) -> Result<Vec<String>> {
    info!(action = "load", component = "domain_file", file_path = ?path, "Loading domains from file");
    if !path.exists() {
        anyhow::bail!("Domain list file not found: {:?}", path);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read domain list file: {}", path.display()))?;
    let domains = parse_domain_lines(&content);

    info!(action = "loaded", component = "domain_file", entry_count = domains.len(), file_path = ?path, "Loaded domains from file");
    Ok(domains)
}

fn read_stdin() -> Result<Vec<String>> {
    info!(action = "load", component = "stdin", "Reading domains from stdin");
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read domains from stdin")?;
    Ok(parse_domain_lines(&content))
}

/// Collects raw entries in command-line order: positional domains (with
/// stdin spliced in at "-"), then the domain file.
pub fn collect_domains(args: &Args) -> Result<Vec<String>> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "domain_input",
        "Collecting domain entries"
    );

    let mut domains = Vec::new();
    let mut stdin_read = false;

    for d in &args.domains {
        if d == "-" {
            if !stdin_read {
                domains.extend(read_stdin()?);
                stdin_read = true;
            }
        } else {
            domains.push(d.clone());
        }
    }

    if let Some(path) = args.file.as_deref() {
        domains.extend(load_domain_file(path)?);
    }

    if args.reads_stdin() && !stdin_read {
        domains.extend(read_stdin()?);
    }

    info!(
        action = "complete",
        component = "domain_input",
        entry_count = domains.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Collected domain entries"
    );
    Ok(domains)
}
