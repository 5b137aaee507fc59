use anyhow::{Context, Result};

use crate::args::OutputFormat;
use crate::stats::{PrepareStats, PreparedNames};

pub fn render_names(prepared: &PreparedNames, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Lines => prepared.names.join("\n"),
        OutputFormat::Comma => prepared.names.join(","),
        OutputFormat::Json => serde_json::to_string_pretty(prepared)
            .context("Failed to serialize prepared names")?,
    };
    Ok(rendered)
}

pub fn print_names(prepared: &PreparedNames, format: OutputFormat) -> Result<()> {
    let rendered = render_names(prepared, format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

pub fn print_stats(stats: &PrepareStats, name_count: usize) {
    eprintln!("\n--- Certificate Names ---");
    eprintln!("Input entries: {}", stats.input_entries);
    eprintln!("Names on request: {}", name_count);
    eprintln!("\"www\" variants added: {}", stats.www_added);
    eprintln!(
        "Skipped (blank / duplicate): {} / {}",
        stats.blank_skipped, stats.duplicates_skipped
    );
    if stats.wildcards > 0 {
        eprintln!(
            "Wildcards: {} (pruned {} covered names)",
            stats.wildcards, stats.pruned
        );
    }
}
