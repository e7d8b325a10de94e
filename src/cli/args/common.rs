//! Argument groups shared by the fetch commands

use clap::Args;

/// Output format for `analyze`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One row per repository
    #[default]
    Table,
    /// Repository records in a JSON envelope
    Json,
    /// Totals and top languages
    Summary,
}

/// Which account to read and how to fetch it
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// GitHub username or organization name
    pub account: String,

    /// Treat the account as an organization
    #[arg(long)]
    pub org: bool,

    /// GitHub personal access token
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Maximum repositories to fetch (-1 for the configured maximum)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Directory for cached API responses
    #[arg(long)]
    pub cache_dir: Option<String>,

    /// Cache entry lifetime in seconds
    #[arg(long)]
    pub cache_ttl: Option<u64>,

    /// Bypass the response cache
    #[arg(long)]
    pub no_cache: bool,
}

/// Criteria for `search`
#[derive(Debug, Clone, Default, Args)]
pub struct SearchFilterArgs {
    /// Only repositories in this language (case-insensitive)
    #[arg(long)]
    pub language: Option<String>,

    /// Minimum number of stars
    #[arg(long)]
    pub min_stars: Option<u64>,

    /// Minimum number of forks
    #[arg(long)]
    pub min_forks: Option<u64>,

    /// Only public repositories
    #[arg(long)]
    pub public_only: bool,

    /// Only private repositories
    #[arg(long)]
    pub private_only: bool,
}
