//! github-repo-analyzer - analyze the repositories of a GitHub user or organization

use std::fs::OpenOptions;

use clap::{CommandFactory, Parser};
use colored::Colorize;

mod analysis;
mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod progress;
mod validation;

use cli::{CacheCommands, Cli, Commands, GlobalOptions};
use error::{Error, Result};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        let context = err.context();
        log::debug!(
            "{:?}: {} (status {:?}, retry after {:?})",
            err.kind(),
            err,
            context.status_code,
            context.retry_after
        );
        eprintln!("{}", err.user_message().red());
        if let Some(tip) = err.tip() {
            eprintln!("{}", format!("Tip: {}", tip).yellow());
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let global = GlobalOptions::from_cli(&cli);
    init_logging(&global)?;

    match cli.command {
        Commands::Analyze(ref args) => cli::analyze::run(&global, args).await,
        Commands::Search(ref args) => cli::search::run(&global, args).await,
        Commands::Cache(ref cmd) => match cmd {
            CacheCommands::Status(args) => cli::cache::status(&global, args),
            CacheCommands::Clear(args) => cli::cache::clear(&global, args),
            CacheCommands::Path(args) => cli::cache::path(&global, args),
        },
        Commands::Version => {
            print_version();
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "github-repo-analyzer",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

/// Logger at the level implied by the global flags; `RUST_LOG` overrides it.
fn init_logging(global: &GlobalOptions) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(global.log_level()).parse_default_env();

    if let Some(ref path) = global.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::configuration(format!("Cannot open log file {}: {}", path.display(), e))
                    .with_cause(e)
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    let _ = builder.try_init();
    Ok(())
}

fn print_version() {
    println!("github-repo-analyzer {}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("API:     {}", client::API_BASE_URL);
    match config::Config::default_path() {
        Some(path) => println!("Config:  {}", path.display()),
        None => println!("Config:  (no config directory)"),
    }
    println!("Cache:   {}", config::default_cache_dir().display());
}
