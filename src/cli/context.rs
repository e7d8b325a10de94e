//! Command execution context
//!
//! Shared setup for the fetch commands: configuration, input validation,
//! the authenticated client, and the response cache.

use std::path::PathBuf;
use std::time::Duration;

use crate::analysis::RepositoryService;
use crate::cache::ResponseCache;
use crate::cli::{FetchArgs, GlobalOptions};
use crate::client::{AccountKind, GitHubClient, RepositoryLister, RetryPolicy};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::validation::{
    clamp_limit, validate_account, validate_cache_dir, validate_cache_ttl, validate_token,
};

/// Everything a fetch command needs once its inputs are validated.
pub struct CommandContext {
    pub config: Config,
    pub service: RepositoryService<GitHubClient>,
    /// Trimmed account name
    pub account: String,
    pub kind: AccountKind,
    /// Limit resolved against the configured bounds
    pub limit: usize,
}

impl CommandContext {
    /// Load config, validate the fetch arguments, and build the client.
    ///
    /// No request is made here; every validation error surfaces before the
    /// first API call.
    pub fn new(global: &GlobalOptions, args: &FetchArgs) -> Result<Self> {
        let config = Config::load(global.config_ref())?;

        let account = validate_account(&args.account)?;
        let limit = clamp_limit(
            args.limit,
            config.limits.default_limit,
            config.limits.max_limit,
        )?;
        let token = match args.token.as_deref() {
            Some(token) => validate_token(token)?,
            None => return Err(Error::authentication("GitHub token is required")),
        };
        let cache = resolve_cache(&config, args)?;

        let client = GitHubClient::new(
            &token,
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_seconds),
        )?;
        let lister = RepositoryLister::new(client, cache, RetryPolicy::from_config(&config.api))
            .with_page_size(config.api.page_size);

        Ok(Self {
            service: RepositoryService::new(lister),
            account,
            kind: AccountKind::from_is_org(args.org),
            limit,
            config,
        })
    }
}

/// Cache directory from `--cache-dir`, falling back to the config.
pub fn cache_dir(config: &Config, flag: Option<&str>) -> Result<PathBuf> {
    match flag {
        Some(dir) => validate_cache_dir(dir),
        None => Ok(config.cache_dir()),
    }
}

fn resolve_cache(config: &Config, args: &FetchArgs) -> Result<ResponseCache> {
    if args.no_cache || !config.cache.enabled {
        return Ok(ResponseCache::disabled());
    }

    let dir = cache_dir(config, args.cache_dir.as_deref())?;
    let ttl = validate_cache_ttl(args.cache_ttl.unwrap_or(config.cache.ttl_seconds))?;
    Ok(ResponseCache::new(dir, Duration::from_secs(ttl)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn fetch_args(account: &str) -> FetchArgs {
        FetchArgs {
            account: account.to_string(),
            org: false,
            token: Some("ghp_abcdefghijklmnopqrstuvwxyz".to_string()),
            limit: None,
            cache_dir: None,
            cache_ttl: None,
            no_cache: true,
        }
    }

    fn global_with_config(dir: &tempfile::TempDir) -> GlobalOptions {
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "limits:\n  default_limit: 25\n  max_limit: 50\n").unwrap();
        GlobalOptions {
            config: Some(path.display().to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_context_resolves_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = fetch_args("  octocat ");
        args.org = true;

        let ctx = CommandContext::new(&global_with_config(&dir), &args).unwrap();

        assert_eq!(ctx.account, "octocat");
        assert_eq!(ctx.kind, AccountKind::Organization);
        assert_eq!(ctx.limit, 25);
    }

    #[test]
    fn test_unlimited_uses_configured_maximum() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = fetch_args("octocat");
        args.limit = Some(-1);

        let ctx = CommandContext::new(&global_with_config(&dir), &args).unwrap();

        assert_eq!(ctx.limit, 50);
    }

    #[test]
    fn test_missing_token_is_authentication_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = fetch_args("octocat");
        args.token = None;

        let err = CommandContext::new(&global_with_config(&dir), &args)
            .err()
            .unwrap();

        assert_eq!(err.kind(), ErrorKind::Authentication);
    }

    #[test]
    fn test_short_token_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = fetch_args("octocat");
        args.token = Some("short".to_string());

        let err = CommandContext::new(&global_with_config(&dir), &args)
            .err()
            .unwrap();

        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_invalid_account_is_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let err = CommandContext::new(&global_with_config(&dir), &fetch_args("bad--name"))
            .err()
            .unwrap();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.context().field.as_deref(), Some("account"));
    }

    #[test]
    fn test_cache_dir_flag_overrides_config() {
        let config = Config::default();

        assert_eq!(
            cache_dir(&config, Some("/tmp/ghra")).unwrap(),
            PathBuf::from("/tmp/ghra")
        );
        assert_eq!(cache_dir(&config, None).unwrap(), config.cache_dir());
    }

    #[test]
    fn test_cache_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        let mut args = fetch_args("octocat");

        assert!(!resolve_cache(&config, &args).unwrap().is_enabled());

        args.no_cache = false;
        args.cache_dir = Some(dir.path().join("cache").display().to_string());
        assert!(resolve_cache(&config, &args).unwrap().is_enabled());

        args.cache_ttl = Some(86_400 * 31);
        assert_eq!(
            resolve_cache(&config, &args).err().unwrap().kind(),
            ErrorKind::Validation
        );
    }
}
