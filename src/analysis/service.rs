//! Repository analysis and search operations

use super::{AggregateStats, RepoFilter, SortField, aggregate, sort_repositories};
use crate::client::{AccountKind, RepoSource, RepositoryLister};
use crate::error::Result;
use crate::models::RepositoryRecord;

/// Runs the fetch pipeline for the `analyze` and `search` commands.
pub struct RepositoryService<S: RepoSource> {
    lister: RepositoryLister<S>,
}

impl<S: RepoSource> RepositoryService<S> {
    pub fn new(lister: RepositoryLister<S>) -> Self {
        Self { lister }
    }

    /// Fetch up to `limit` repositories, sort them, and compute totals.
    ///
    /// `Ok(None)` when the account has no repositories.
    pub async fn analyze(
        &self,
        account: &str,
        kind: AccountKind,
        limit: usize,
        sort: SortField,
    ) -> Result<Option<AggregateStats>> {
        let repos = self.lister.list_repositories(account, kind, limit).await?;
        log::debug!("Analyzing {} repositories sorted by {}", repos.len(), sort);
        Ok(aggregate(sort_repositories(&repos, sort.as_str())))
    }

    /// Fetch up to `limit` repositories, keep those matching `filter`, and sort them.
    pub async fn search(
        &self,
        account: &str,
        kind: AccountKind,
        limit: usize,
        sort: SortField,
        filter: &RepoFilter,
    ) -> Result<Vec<RepositoryRecord>> {
        let repos = self.lister.list_repositories(account, kind, limit).await?;
        let filtered = filter.apply(&repos);
        log::debug!(
            "{} of {} repositories matched the search filters",
            filtered.len(),
            repos.len()
        );

        let mut sorted = sort_repositories(&filtered, sort.as_str());
        sorted.truncate(limit);
        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ResponseCache;
    use crate::client::{MockRepoSource, RemoteFailure, RetryPolicy};
    use crate::error::ErrorKind;
    use crate::models::repository::fixtures::raw_repo;
    use serde_json::Value;

    fn raw(name: &str, language: &str, stars: u64, private: bool) -> Value {
        let mut raw = raw_repo(name);
        raw["language"] = language.into();
        raw["stargazers_count"] = stars.into();
        raw["private"] = private.into();
        raw
    }

    fn service(mock: &MockRepoSource) -> RepositoryService<MockRepoSource> {
        RepositoryService::new(RepositoryLister::new(
            mock.clone(),
            ResponseCache::disabled(),
            RetryPolicy::immediate(3),
        ))
    }

    fn sample() -> MockRepoSource {
        MockRepoSource::new(vec![
            raw("small", "Rust", 1, false),
            raw("big", "Go", 100, true),
            raw("medium", "Rust", 10, false),
        ])
    }

    #[tokio::test]
    async fn test_analyze_sorts_repositories() {
        let stats = service(&sample())
            .analyze("octocat", AccountKind::User, 100, SortField::Stars)
            .await
            .unwrap()
            .unwrap();

        let names: Vec<_> = stats.repositories.iter().map(|r| &r.name).collect();
        assert_eq!(names, vec!["big", "medium", "small"]);
        assert_eq!(stats.total_stars, 111);
        assert_eq!(stats.private_repositories, 1);
        assert_eq!(stats.top_languages[0], ("Rust".to_string(), 2));
    }

    #[tokio::test]
    async fn test_analyze_empty_account() {
        let mock = MockRepoSource::new(Vec::new());

        let stats = service(&mock)
            .analyze("empty", AccountKind::User, 100, SortField::Stars)
            .await
            .unwrap();

        assert!(stats.is_none());
    }

    #[tokio::test]
    async fn test_analyze_respects_limit() {
        let mock = MockRepoSource::with_repo_count(30);

        let stats = service(&mock)
            .analyze("octocat", AccountKind::User, 7, SortField::Name)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stats.total_repositories, 7);
    }

    #[tokio::test]
    async fn test_search_filters_and_sorts() {
        let filter = RepoFilter {
            language: Some("rust".to_string()),
            ..Default::default()
        };

        let repos = service(&sample())
            .search("octocat", AccountKind::User, 100, SortField::Stars, &filter)
            .await
            .unwrap();

        let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["medium", "small"]);
    }

    #[tokio::test]
    async fn test_search_private_only() {
        let filter = RepoFilter {
            private_only: true,
            ..Default::default()
        };

        let repos = service(&sample())
            .search("octocat", AccountKind::User, 100, SortField::Name, &filter)
            .await
            .unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "big");
    }

    #[tokio::test]
    async fn test_search_propagates_classified_errors() {
        let mock = sample()
            .fail_next(RemoteFailure::status(401, "Bad credentials"))
            .await;

        let filter = RepoFilter::default();

        let err = service(&mock)
            .search("octocat", AccountKind::User, 100, SortField::Name, &filter)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Authentication);
    }
}
