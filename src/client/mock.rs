//! Mock repository source for testing
//!
//! Serves a fixed set of raw records page by page, optionally preceded by
//! scripted failures, and records every request it receives.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::RepoSource;
use super::classify::RemoteFailure;
use crate::models::repository::fixtures::raw_repo;

/// Mock source for lister tests.
///
/// # Example
/// ```ignore
/// let mock = MockRepoSource::with_repo_count(250)
///     .fail_next(RemoteFailure::status(429, ""))
///     .await;
/// ```
#[derive(Clone)]
pub struct MockRepoSource {
    records: Arc<Vec<Value>>,
    failures: Arc<Mutex<VecDeque<RemoteFailure>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub page: usize,
    pub per_page: usize,
}

impl MockRepoSource {
    pub fn new(records: Vec<Value>) -> Self {
        Self {
            records: Arc::new(records),
            failures: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// `count` valid records named `repo-0`, `repo-1`, ...
    pub fn with_repo_count(count: usize) -> Self {
        let records = (0..count).map(|i| raw_repo(&format!("repo-{}", i)));
        Self::new(records.collect())
    }

    /// Queue a failure; queued failures are returned before any page.
    pub async fn fail_next(self, failure: RemoteFailure) -> Self {
        self.failures.lock().await.push_back(failure);
        self
    }

    /// Total number of `get_page` calls, failed ones included.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

fn param(params: &[(&'static str, String)], name: &str) -> Option<usize> {
    params
        .iter()
        .find(|(k, _)| *k == name)
        .and_then(|(_, v)| v.parse().ok())
}

#[async_trait]
impl RepoSource for MockRepoSource {
    fn base_url(&self) -> &str {
        "https://api.github.test"
    }

    async fn get_page(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> std::result::Result<Vec<Value>, RemoteFailure> {
        let page = param(params, "page").unwrap_or(1);
        let per_page = param(params, "per_page").unwrap_or(30);

        self.requests.lock().await.push(RecordedRequest {
            url: url.to_string(),
            page,
            per_page,
        });

        if let Some(failure) = self.failures.lock().await.pop_front() {
            return Err(failure);
        }

        let start = (page.saturating_sub(1) * per_page).min(self.records.len());
        let end = (start + per_page).min(self.records.len());
        Ok(self.records[start..end].to_vec())
    }
}
