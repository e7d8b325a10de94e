//! The `analyze` command

use log::debug;

use crate::cli::{AnalyzeArgs, CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::{NO_REPOSITORIES, format_json, format_repositories, format_summary};
use crate::progress::FetchSpinner;

/// Fetch, sort, and report on an account's repositories.
pub async fn run(global: &GlobalOptions, args: &AnalyzeArgs) -> Result<()> {
    let ctx = CommandContext::new(global, &args.fetch)?;
    debug!(
        "Analyzing {} {} (limit {}, sort {})",
        ctx.kind.label(),
        ctx.account,
        ctx.limit,
        args.sort
    );

    let spinner = FetchSpinner::start(
        format!("Fetching repositories for {}...", ctx.account),
        global.quiet,
    );
    let result = ctx
        .service
        .analyze(&ctx.account, ctx.kind, ctx.limit, args.sort)
        .await;
    spinner.finish();

    let output = match (args.output, result?) {
        (OutputFormat::Json, stats) => {
            let repos = stats.map(|s| s.repositories).unwrap_or_default();
            format_json(&repos)?
        }
        (_, None) => NO_REPOSITORIES.to_string(),
        (OutputFormat::Table, Some(stats)) => {
            format_repositories(&stats.repositories, &ctx.account, ctx.kind)
        }
        (OutputFormat::Summary, Some(stats)) => format_summary(
            &stats,
            &ctx.account,
            ctx.kind,
            ctx.config.output.summary_languages,
        ),
    };

    println!("{}", output);
    Ok(())
}
