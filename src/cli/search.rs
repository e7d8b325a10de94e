//! The `search` command

use log::debug;

use crate::analysis::RepoFilter;
use crate::cli::{CommandContext, GlobalOptions, SearchArgs, SearchFilterArgs};
use crate::error::Result;
use crate::output::format_repositories;
use crate::progress::FetchSpinner;
use crate::validation::{
    validate_language, validate_min_forks, validate_min_stars, validate_visibility,
};

/// Validate the filter flags into a [`RepoFilter`].
fn build_filter(args: &SearchFilterArgs) -> Result<RepoFilter> {
    validate_visibility(args.public_only, args.private_only)?;

    Ok(RepoFilter {
        language: validate_language(args.language.as_deref())?,
        min_stars: validate_min_stars(args.min_stars)?,
        min_forks: validate_min_forks(args.min_forks)?,
        public_only: args.public_only,
        private_only: args.private_only,
    })
}

/// Fetch an account's repositories and print those matching the filters.
pub async fn run(global: &GlobalOptions, args: &SearchArgs) -> Result<()> {
    let filter = build_filter(&args.filter)?;
    let ctx = CommandContext::new(global, &args.fetch)?;
    debug!(
        "Searching {} {} with {:?}",
        ctx.kind.label(),
        ctx.account,
        filter
    );

    let spinner = FetchSpinner::start(
        format!("Searching repositories for {}...", ctx.account),
        global.quiet,
    );
    let result = ctx
        .service
        .search(&ctx.account, ctx.kind, ctx.limit, args.sort, &filter)
        .await;
    spinner.finish();

    println!("{}", format_repositories(&result?, &ctx.account, ctx.kind));
    Ok(())
}
