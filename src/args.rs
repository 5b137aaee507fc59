use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "certnames",
    about = "Normalize domain names into the hostnames to request on a TLS certificate",
    version,
    long_about = None
)]
pub struct Args {
    /// Domain names to normalize ("-" reads from stdin)
    pub domains: Vec<String>,

    /// Read additional domain names from a file, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Print a summary of added and dropped names to stderr
    #[arg(long)]
    pub stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One name per line
    Lines,
    /// A single comma-separated line
    Comma,
    /// Names and counters as JSON
    Json,
}

impl Args {
    /// Whether the domain list should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.domains.iter().any(|d| d == "-") || (self.domains.is_empty() && self.file.is_none())
    }
}
