//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

use crate::analysis::SortField;

pub mod analyze;
pub mod args;
pub mod cache;
pub mod context;
pub mod search;

pub use args::{FetchArgs, GlobalOptions, OutputFormat, SearchFilterArgs};
pub use context::CommandContext;

/// Analyze the repositories of a GitHub user or organization
#[derive(Parser, Debug)]
#[command(name = "github-repo-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress logging and progress output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Override config file location
    #[arg(long, global = true, env = "GHRA_CONFIG", hide_env = true)]
    pub config: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch repositories and show them as a table, JSON, or summary
    #[command(after_help = "EXAMPLES:\n  \
        github-repo-analyzer analyze octocat\n  \
        github-repo-analyzer analyze rust-lang --org --sort updated --limit 50\n  \
        github-repo-analyzer analyze octocat --output summary")]
    Analyze(AnalyzeArgs),

    /// Fetch repositories and keep those matching the filters
    #[command(after_help = "EXAMPLES:\n  \
        github-repo-analyzer search octocat --language rust\n  \
        github-repo-analyzer search rust-lang --org --min-stars 100 --public-only")]
    Search(SearchArgs),

    /// Manage local response cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Static completions (subcommands/flags only):
  bash:   github-repo-analyzer completion bash > /etc/bash_completion.d/github-repo-analyzer
  zsh:    github-repo-analyzer completion zsh > \"${fpath[1]}/_github-repo-analyzer\"
  fish:   github-repo-analyzer completion fish > ~/.config/fish/completions/github-repo-analyzer.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Field to sort by
    #[arg(short, long, value_enum, default_value_t = SortField::Stars)]
    pub sort: SortField,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub fetch: FetchArgs,

    #[command(flatten)]
    pub filter: SearchFilterArgs,

    /// Field to sort by
    #[arg(short, long, value_enum, default_value_t = SortField::Updated)]
    pub sort: SortField,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show cache statistics
    Status(CacheDirArg),
    /// Delete all cached responses
    Clear(CacheDirArg),
    /// Print cache directory path
    Path(CacheDirArg),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CacheDirArg {
    /// Cache directory (defaults to the configured one)
    #[arg(long)]
    pub cache_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from([&["github-repo-analyzer"][..], args].concat())
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_defaults() {
        let cli = parse(&["analyze", "octocat"]).unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };

        assert_eq!(args.fetch.account, "octocat");
        assert!(!args.fetch.org);
        assert_eq!(args.output, OutputFormat::Table);
        assert_eq!(args.sort, SortField::Stars);
        assert_eq!(args.fetch.limit, None);
    }

    #[test]
    fn test_search_defaults_to_updated() {
        let cli = parse(&["search", "octocat", "--language", "Rust"]).unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };

        assert_eq!(args.sort, SortField::Updated);
        assert_eq!(args.filter.language.as_deref(), Some("Rust"));
    }

    #[test]
    fn test_negative_limit_parses() {
        let cli = parse(&["analyze", "octocat", "--limit", "-1"]).unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };

        assert_eq!(args.fetch.limit, Some(-1));
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        assert!(parse(&["analyze", "octocat", "--sort", "popularity"]).is_err());
    }
}
