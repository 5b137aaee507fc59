use anyhow::Result;
use time::macros::format_description;
use tracing::Level;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the name list.
pub fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_timer(LocalTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .init();
}

pub fn validate_args(args: &crate::args::Args) -> Result<()> {
    if args.stats && args.format == crate::args::OutputFormat::Json {
        anyhow::bail!("--stats cannot be combined with --format json (stats are already included)");
    }

    if let Some(path) = &args.file {
        if path.is_dir() {
            anyhow::bail!("--file must point to a file, got directory {:?}", path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Args;
    use clap::Parser;

    #[test]
    fn test_validate_stats_with_json() {
        let args = Args::parse_from(["certnames", "--stats", "-o", "json", "abc.com"]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_file_is_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_string_lossy().to_string();
        let args = Args::parse_from(["certnames", "--file", path.as_str()]);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_ok() {
        let args = Args::parse_from(["certnames", "--stats", "abc.com"]);
        assert!(validate_args(&args).is_ok());
    }
}
