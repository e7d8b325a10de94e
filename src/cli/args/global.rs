//! Global CLI options shared across all commands
//!
//! Collected once after parsing so handlers take a single options value
//! instead of each global flag separately.

use std::path::PathBuf;

use crate::cli::Cli;

/// Global CLI options passed to all command handlers.
///
/// Precedence for configurable values is CLI flag > environment variable >
/// config file > default. This struct holds the CLI/env layer; the config
/// file is resolved later in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Debug logging
    pub verbose: bool,

    /// No logging and no spinner
    pub quiet: bool,

    /// Write logs here instead of stderr
    pub log_file: Option<PathBuf>,

    /// Custom config file path
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            quiet: cli.quiet,
            log_file: cli.log_file.clone(),
            config: cli.config.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Log level implied by the verbosity flags. `--quiet` wins over `--verbose`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Off
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::parse_from([
            "github-repo-analyzer",
            "--verbose",
            "--config",
            "/custom/config.yaml",
            "--log-file",
            "/tmp/analyzer.log",
            "version",
        ]);
        let opts = GlobalOptions::from_cli(&cli);

        assert!(opts.verbose);
        assert!(!opts.quiet);
        assert_eq!(opts.config_ref(), Some("/custom/config.yaml"));
        assert_eq!(opts.log_file, Some(PathBuf::from("/tmp/analyzer.log")));
    }

    #[test]
    fn test_log_level() {
        let mut opts = GlobalOptions::default();
        assert_eq!(opts.log_level(), log::LevelFilter::Warn);

        opts.verbose = true;
        assert_eq!(opts.log_level(), log::LevelFilter::Debug);

        opts.quiet = true;
        assert_eq!(opts.log_level(), log::LevelFilter::Off);
    }
}
