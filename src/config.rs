//! Command line options and logging setup.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Step through Conway's Game of Life one generation per key press.
///
/// The starting grid is the number of rows and columns followed by one
/// symbol per cell, 'X' for alive and '.' for dead:
///
///     3 7
///     .X...X.
///     X.X.X.X
///     X...X.X
#[derive(Parser, Debug)]
#[command(name = "life_step", version, verbatim_doc_comment)]
pub struct Args {
    /// Read the starting grid from this file instead of standard input.
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Print this many generations to standard output and exit, without
    /// taking over the terminal.
    #[arg(long, short)]
    pub generations: Option<u64>,

    /// Log filter, e.g. `debug` or `life_step=trace`. Falls back to RUST_LOG, then `warn`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn filter(&self) -> EnvFilter {
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        }
    }
}

/// Logs go to stderr so they never mix with the grid on stdout.
pub fn init_logging(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["life_step"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.generations.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn headless_from_file() {
        let args = Args::try_parse_from(["life_step", "--input", "glider.txt", "-g", "4"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("glider.txt")));
        assert_eq!(args.generations, Some(4));
    }

    #[test]
    fn rejects_negative_generations() {
        assert!(Args::try_parse_from(["life_step", "--generations", "-1"]).is_err());
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
