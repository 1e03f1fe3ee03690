use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use craftsim::{SimConfig, SimError};
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn print_usage() {
    println!("craftsim [input] [output]");
    println!("  input   starting items and CRAFT commands (default: input.txt)");
    println!("  output  report file, or - for stdout (default: output.txt)");
    println!("config: craftsim.toml, or the file named by $CRAFTSIM_CONFIG");
}

/// Log filter from `RUST_LOG`-style directives; `info` when none are given
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    // Logs go to stderr so a report on stdout stays clean
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&directives))
        .init();

    let args: Vec<String> = env::args().collect();
    let wants_help = |arg: &String| arg == "-h" || arg == "--help";
    if args.iter().skip(1).any(wants_help) {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let mut config = match SimConfig::load(&SimConfig::default_path()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(input) = args.get(1) {
        config.input = PathBuf::from(input);
    }
    if let Some(output) = args.get(2) {
        config.output = PathBuf::from(output);
    }

    match craftsim::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(SimError::Input { path, source }) => {
            eprintln!("Error opening file");
            error!("Failed to open {:?}: {}", path, source);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_directives() {
        let filter = log_filter("debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = log_filter("craftsim=trace");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));

        let filter = log_filter("warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
