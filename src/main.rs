use anyhow::Result;
use certnames::{input, output, prepare_with_stats, utils, Args};
use clap::Parser;
use std::time::Instant;
use tracing::{error, info};

fn run(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    let domains = input::collect_domains(args)?;
    let prepared = prepare_with_stats(&domains);

    info!(
        action = "complete",
        component = "prepare",
        input_entries = prepared.stats.input_entries,
        name_count = prepared.names.len(),
        www_added = prepared.stats.www_added,
        pruned = prepared.stats.pruned,
        duration_ms = start_time.elapsed().as_millis(),
        "Prepared certificate names"
    );

    output::print_names(&prepared, args.format)?;
    if args.stats {
        output::print_stats(&prepared.stats, prepared.names.len());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose, args.quiet);

    if let Err(e) = utils::validate_args(&args).and_then(|_| run(&args)) {
        error!(error = ?e, "Failed to prepare certificate names");
        std::process::exit(1);
    }
    Ok(())
}
