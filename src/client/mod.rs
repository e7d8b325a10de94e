//! GitHub repository listing client

use async_trait::async_trait;
use serde_json::Value;

pub mod classify;
pub mod github;
pub mod lister;
#[cfg(test)]
pub mod mock;
pub mod pagination;
pub mod retry;

pub use classify::RemoteFailure;
pub use github::{API_BASE_URL, GitHubClient};
pub use lister::RepositoryLister;
#[cfg(test)]
pub use mock::MockRepoSource;
pub use pagination::AccountKind;
pub use retry::RetryPolicy;

/// Remote repository listing service
///
/// One call fetches one page of raw repository objects. Failures are returned
/// unclassified so the caller can decide whether to retry.
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Base URL that listing URLs are built on
    fn base_url(&self) -> &str;

    /// GET one page of raw records.
    async fn get_page(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> std::result::Result<Vec<Value>, RemoteFailure>;
}
