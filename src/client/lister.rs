//! Paginated, cached repository listing
//!
//! Walks the listing endpoint page by page, serving pages from the response
//! cache when possible and retrying rate-limited requests with backoff.

use serde_json::Value;

use super::RepoSource;
use super::classify::classify;
use super::pagination::{AccountKind, MAX_PER_PAGE, PageParams};
use super::retry::RetryPolicy;
use crate::cache::ResponseCache;
use crate::error::Result;
use crate::models::RepositoryRecord;

/// Lists the repositories of one account through a [`RepoSource`].
pub struct RepositoryLister<S: RepoSource> {
    source: S,
    cache: ResponseCache,
    retry: RetryPolicy,
    page_size: usize,
}

impl<S: RepoSource> RepositoryLister<S> {
    pub fn new(source: S, cache: ResponseCache, retry: RetryPolicy) -> Self {
        log::debug!(
            "Response cache enabled: {}, up to {} attempts per page",
            cache.is_enabled(),
            retry.max_attempts
        );
        Self {
            source,
            cache,
            retry,
            page_size: MAX_PER_PAGE,
        }
    }

    /// Records requested per page, capped at [`MAX_PER_PAGE`].
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Fetch up to `limit` repositories, most recently updated first.
    ///
    /// Stops at the first short page or once `limit` records are collected.
    /// A `limit` of zero makes no request.
    pub async fn list_repositories(
        &self,
        account: &str,
        kind: AccountKind,
        limit: usize,
    ) -> Result<Vec<RepositoryRecord>> {
        let mut repos = Vec::new();
        if limit == 0 {
            return Ok(repos);
        }

        let operation = format!(
            "listing repositories for {} {}",
            kind.label().to_lowercase(),
            account
        );
        let url = kind.repos_url(self.source.base_url(), account);
        let mut params = PageParams::new(self.page_size);

        loop {
            let query = params.to_query_params();
            let page = self.fetch_page(&url, &query, &operation).await?;
            let page_len = page.len();
            log::debug!("Page {} of {}: {} records", params.page, url, page_len);

            for raw in page {
                let record =
                    RepositoryRecord::from_raw(raw).map_err(|e| e.with_operation(&operation))?;
                repos.push(record);
            }

            if page_len < params.per_page || repos.len() >= limit {
                break;
            }
            params = params.next();
        }

        repos.truncate(limit);
        log::debug!("Fetched {} repositories for {}", repos.len(), account);
        Ok(repos)
    }

    /// One page, from the cache or the source.
    async fn fetch_page(
        &self,
        url: &str,
        query: &[(&'static str, String)],
        operation: &str,
    ) -> Result<Vec<Value>> {
        if let Some(cached) = self.cache.get(url, query) {
            return Ok(cached);
        }

        let mut attempt = 0;
        loop {
            match self.source.get_page(url, query).await {
                Ok(records) => {
                    self.cache.set(url, query, &records);
                    return Ok(records);
                }
                Err(failure) if failure.is_rate_limited() && self.retry.should_retry(attempt) => {
                    let delay = self.retry.delay_for(attempt);
                    log::warn!(
                        "Rate limited, waiting {:.1}s before retry ({}/{})",
                        delay.as_secs_f64(),
                        attempt + 1,
                        self.retry.max_attempts - 1
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(failure) => return Err(classify(failure, operation)),
            }
        }
    }
}
