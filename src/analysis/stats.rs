//! Aggregate statistics over a repository collection

use serde::Serialize;

use crate::models::RepositoryRecord;

/// Number of languages kept in [`AggregateStats::top_languages`]
pub const TOP_LANGUAGES: usize = 10;

/// Totals for one account's repositories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total_repositories: usize,
    pub public_repositories: usize,
    pub private_repositories: usize,
    pub archived_repositories: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    /// Total size in megabytes, rounded to two decimals
    pub total_size_mb: f64,
    /// `(language, repository count)`, most common first
    pub top_languages: Vec<(String, usize)>,
    pub repositories: Vec<RepositoryRecord>,
}

/// Reduce `repos` to totals. Returns `None` for an empty collection.
///
/// Languages with equal counts keep the order they were first seen in.
pub fn aggregate(repos: Vec<RepositoryRecord>) -> Option<AggregateStats> {
    if repos.is_empty() {
        return None;
    }

    let mut public_repositories = 0;
    let mut archived_repositories = 0;
    let mut total_stars = 0u64;
    let mut total_forks = 0u64;
    let mut total_size_kb = 0u64;
    let mut languages: Vec<(String, usize)> = Vec::new();

    for repo in &repos {
        if !repo.private {
            public_repositories += 1;
        }
        if repo.archived {
            archived_repositories += 1;
        }
        total_stars += repo.stargazers_count;
        total_forks += repo.forks_count;
        total_size_kb += repo.size;

        if let Some(ref lang) = repo.language {
            match languages.iter_mut().find(|(name, _)| name == lang) {
                Some((_, count)) => *count += 1,
                None => languages.push((lang.clone(), 1)),
            }
        }
    }

    // Stable, so ties stay in first-seen order
    languages.sort_by(|a, b| b.1.cmp(&a.1));
    languages.truncate(TOP_LANGUAGES);

    Some(AggregateStats {
        total_repositories: repos.len(),
        public_repositories,
        private_repositories: repos.len() - public_repositories,
        archived_repositories,
        total_stars,
        total_forks,
        total_size_mb: round2(total_size_kb as f64 / 1024.0),
        top_languages: languages,
        repositories: repos,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
