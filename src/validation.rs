//! Input validation for command-line arguments
//!
//! Everything here runs before any request is made, so bad input never costs
//! an API call.

use std::path::PathBuf;

use crate::error::{Error, Result};

const MAX_ACCOUNT_LEN: usize = 39;
const MAX_LANGUAGE_LEN: usize = 50;
const MAX_MIN_STARS: u64 = 1_000_000;
const MAX_MIN_FORKS: u64 = 100_000;
/// 30 days
const MAX_CACHE_TTL: u64 = 86_400 * 30;
const MAX_CACHE_DIR_LEN: usize = 500;
const MIN_TOKEN_LEN: usize = 20;
const MAX_TOKEN_LEN: usize = 200;

/// Validate a GitHub user or organization name, returning it trimmed.
pub fn validate_account(account: &str) -> Result<String> {
    let field = "account";
    let cleaned = account.trim();

    if cleaned.is_empty() {
        return Err(Error::validation(field, "Username or organization name cannot be empty"));
    }
    if cleaned.chars().count() > MAX_ACCOUNT_LEN {
        return Err(Error::validation(
            field,
            "Username or organization name cannot exceed 39 characters",
        ));
    }
    if !cleaned
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(Error::validation(
            field,
            "Username or organization name can only contain alphanumeric characters, \
             hyphens, and underscores",
        ));
    }
    if cleaned.starts_with('-') || cleaned.ends_with('-') {
        return Err(Error::validation(
            field,
            "Username or organization name cannot start or end with hyphens",
        ));
    }
    if cleaned.contains("--") {
        return Err(Error::validation(
            field,
            "Username or organization name cannot have consecutive hyphens",
        ));
    }

    log::debug!("Validated account: {}", cleaned);
    Ok(cleaned.to_string())
}

/// Resolve a requested limit against the configured bounds.
///
/// `None` gives `default`, `-1` gives `maximum`, other negatives are
/// rejected, and anything else is capped at `maximum`.
pub fn clamp_limit(limit: Option<i64>, default: usize, maximum: usize) -> Result<usize> {
    match limit {
        None => Ok(default),
        Some(-1) => Ok(maximum),
        Some(n) if n < 0 => {
            Err(Error::validation("limit", "limit must be -1 (unlimited) or non-negative"))
        }
        Some(n) => Ok(usize::try_from(n).unwrap_or(usize::MAX).min(maximum)),
    }
}

/// `--public-only` and `--private-only` cannot be combined.
pub fn validate_visibility(public_only: bool, private_only: bool) -> Result<()> {
    if public_only && private_only {
        return Err(Error::validation(
            "visibility",
            "Cannot specify both --public-only and --private-only flags",
        ));
    }
    Ok(())
}

/// Validate a language filter. Blank input means no filter.
pub fn validate_language(language: Option<&str>) -> Result<Option<String>> {
    let Some(cleaned) = language.map(str::trim).filter(|l| !l.is_empty()) else {
        return Ok(None);
    };

    if cleaned.chars().count() > MAX_LANGUAGE_LEN {
        return Err(Error::validation(
            "language",
            "Programming language name cannot exceed 50 characters",
        ));
    }
    if !cleaned
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || " -+.#/".contains(c))
    {
        return Err(Error::validation(
            "language",
            "Programming language name contains invalid characters",
        ));
    }

    Ok(Some(cleaned.to_string()))
}

pub fn validate_min_stars(min_stars: Option<u64>) -> Result<Option<u64>> {
    match min_stars {
        Some(n) if n > MAX_MIN_STARS => {
            Err(Error::validation("min_stars", "Minimum stars cannot exceed 1,000,000"))
        }
        other => Ok(other),
    }
}

pub fn validate_min_forks(min_forks: Option<u64>) -> Result<Option<u64>> {
    match min_forks {
        Some(n) if n > MAX_MIN_FORKS => {
            Err(Error::validation("min_forks", "Minimum forks cannot exceed 100,000"))
        }
        other => Ok(other),
    }
}

pub fn validate_cache_ttl(ttl: u64) -> Result<u64> {
    if ttl > MAX_CACHE_TTL {
        return Err(Error::validation(
            "cache_ttl",
            "Cache TTL cannot exceed 30 days (2,592,000 seconds)",
        ));
    }
    Ok(ttl)
}

pub fn validate_cache_dir(dir: &str) -> Result<PathBuf> {
    let cleaned = dir.trim();
    if cleaned.is_empty() {
        return Err(Error::validation("cache_dir", "Cache directory cannot be empty"));
    }
    if cleaned.chars().count() > MAX_CACHE_DIR_LEN {
        return Err(Error::validation(
            "cache_dir",
            "Cache directory path cannot exceed 500 characters",
        ));
    }
    Ok(PathBuf::from(cleaned))
}

/// Check a token's shape. Its validity is only known once the API answers.
pub fn validate_token(token: &str) -> Result<String> {
    let cleaned = token.trim();
    if cleaned.is_empty() {
        return Err(Error::validation("token", "GitHub token cannot be empty"));
    }
    if cleaned.len() < MIN_TOKEN_LEN {
        return Err(Error::validation("token", "GitHub token appears to be too short"));
    }
    if cleaned.len() > MAX_TOKEN_LEN {
        return Err(Error::validation("token", "GitHub token appears to be too long"));
    }
    Ok(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_valid_accounts() {
        for name in ["octocat", "rust-lang", "a", "user_name", "A1-b2_c3"] {
            assert_eq!(validate_account(name).unwrap(), name);
        }
        assert_eq!(validate_account("  octocat \n").unwrap(), "octocat");
        assert!(validate_account(&"a".repeat(39)).is_ok());
    }

    #[test]
    fn test_invalid_accounts() {
        let cases = [
            ("", "empty"),
            ("   ", "empty"),
            ("-octocat", "start or end"),
            ("octocat-", "start or end"),
            ("octo--cat", "consecutive"),
            ("octo cat", "alphanumeric"),
            ("octo/cat", "alphanumeric"),
            ("ünïcode", "alphanumeric"),
        ];
        for (input, expected) in cases {
            let err = validate_account(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "input {:?}", input);
            assert_eq!(err.context().field.as_deref(), Some("account"));
            assert!(
                err.message().contains(expected),
                "input {:?}: {}",
                input,
                err.message()
            );
        }
        assert!(validate_account(&"a".repeat(40)).is_err());
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(None, 100, 10_000).unwrap(), 100);
        assert_eq!(clamp_limit(Some(-1), 100, 10_000).unwrap(), 10_000);
        assert_eq!(clamp_limit(Some(0), 100, 10_000).unwrap(), 0);
        assert_eq!(clamp_limit(Some(50), 100, 10_000).unwrap(), 50);
        assert_eq!(clamp_limit(Some(20_000), 100, 10_000).unwrap(), 10_000);
    }

    #[test]
    fn test_clamp_limit_rejects_other_negatives() {
        let err = clamp_limit(Some(-5), 100, 10_000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.context().field.as_deref(), Some("limit"));
        assert!(clamp_limit(Some(i64::MIN), 100, 10_000).is_err());
    }

    #[test]
    fn test_visibility_flags() {
        assert!(validate_visibility(false, false).is_ok());
        assert!(validate_visibility(true, false).is_ok());
        assert!(validate_visibility(false, true).is_ok());
        let err = validate_visibility(true, true).unwrap_err();
        assert!(err.message().contains("--public-only"));
    }

    #[test]
    fn test_language() {
        assert_eq!(validate_language(None).unwrap(), None);
        assert_eq!(validate_language(Some("   ")).unwrap(), None);
        assert_eq!(
            validate_language(Some(" Rust ")).unwrap().as_deref(),
            Some("Rust")
        );
        for lang in [
            "C++",
            "C#",
            "Objective-C",
            "Vim Script",
            "F#",
            "Node.js",
            "ASP/VB",
        ] {
            assert!(validate_language(Some(lang)).is_ok(), "{}", lang);
        }
        assert!(validate_language(Some("Rust; DROP")).is_err());
        assert!(validate_language(Some(&"x".repeat(51))).is_err());
    }

    #[test]
    fn test_min_stars_and_forks_bounds() {
        assert_eq!(
            validate_min_stars(Some(1_000_000)).unwrap(),
            Some(1_000_000)
        );
        assert!(validate_min_stars(Some(1_000_001)).is_err());
        assert_eq!(validate_min_forks(None).unwrap(), None);
        assert!(validate_min_forks(Some(100_001)).is_err());
    }

    #[test]
    fn test_cache_settings() {
        assert_eq!(validate_cache_ttl(0).unwrap(), 0);
        assert_eq!(validate_cache_ttl(2_592_000).unwrap(), 2_592_000);
        assert!(validate_cache_ttl(2_592_001).is_err());

        assert_eq!(
            validate_cache_dir(" /tmp/c ").unwrap(),
            PathBuf::from("/tmp/c")
        );
        assert!(validate_cache_dir("  ").is_err());
        assert!(validate_cache_dir(&"d".repeat(501)).is_err());
    }

    #[test]
    fn test_token_shape() {
        assert!(validate_token("ghp_0123456789abcdefghij").is_ok());
        let short = validate_token("short").unwrap_err();
        assert!(short.message().contains("too short"));
        let long = validate_token(&"t".repeat(201)).unwrap_err();
        assert!(long.message().contains("too long"));
        assert!(validate_token("   ").is_err());
    }
}
