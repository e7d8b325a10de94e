//! Field filters over fetched repositories

use crate::models::RepositoryRecord;

/// Criteria for `search`. Each unset criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoFilter {
    /// Case-insensitive exact match; repositories without a language never match
    pub language: Option<String>,
    pub min_stars: Option<u64>,
    pub min_forks: Option<u64>,
    pub public_only: bool,
    pub private_only: bool,
}

impl RepoFilter {
    pub fn matches(&self, repo: &RepositoryRecord) -> bool {
        if let Some(ref wanted) = self.language {
            match repo.language {
                Some(ref lang) if lang.to_lowercase() == wanted.to_lowercase() => {}
                _ => return false,
            }
        }
        if self.min_stars.is_some_and(|n| repo.stargazers_count < n) {
            return false;
        }
        if self.min_forks.is_some_and(|n| repo.forks_count < n) {
            return false;
        }
        if self.public_only && repo.private {
            return false;
        }
        if self.private_only && !repo.private {
            return false;
        }
        true
    }

    /// Matching repositories in their original order.
    pub fn apply(&self, repos: &[RepositoryRecord]) -> Vec<RepositoryRecord> {
        repos.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::repository::fixtures::raw_repo;

    fn repo(
        name: &str,
        language: Option<&str>,
        stars: u64,
        forks: u64,
        private: bool,
    ) -> RepositoryRecord {
        let mut raw = raw_repo(name);
        raw["language"] = language.into();
        raw["stargazers_count"] = stars.into();
        raw["forks_count"] = forks.into();
        raw["private"] = private.into();
        RepositoryRecord::from_raw(raw).unwrap()
    }

    fn sample() -> Vec<RepositoryRecord> {
        vec![
            repo("alpha", Some("Rust"), 50, 5, false),
            repo("beta", Some("Python"), 5, 0, true),
            repo("gamma", None, 100, 20, false),
            repo("delta", Some("rust"), 10, 1, true),
        ]
    }

    fn names(repos: &[RepositoryRecord]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let repos = sample();
        assert_eq!(RepoFilter::default().apply(&repos), repos);
    }

    #[test]
    fn test_language_is_case_insensitive_and_skips_missing() {
        let filter = RepoFilter {
            language: Some("RUST".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&sample())), vec!["alpha", "delta"]);
    }

    #[test]
    fn test_min_stars_and_forks_are_inclusive() {
        let filter = RepoFilter {
            min_stars: Some(10),
            min_forks: Some(1),
            ..Default::default()
        };
        assert_eq!(
            names(&filter.apply(&sample())),
            vec!["alpha", "gamma", "delta"]
        );
    }

    #[test]
    fn test_visibility() {
        let public = RepoFilter {
            public_only: true,
            ..Default::default()
        };
        assert_eq!(names(&public.apply(&sample())), vec!["alpha", "gamma"]);

        let private = RepoFilter {
            private_only: true,
            ..Default::default()
        };
        assert_eq!(names(&private.apply(&sample())), vec!["beta", "delta"]);
    }

    #[test]
    fn test_combined_criteria() {
        let filter = RepoFilter {
            language: Some("rust".to_string()),
            min_stars: Some(20),
            public_only: true,
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(&sample())), vec!["alpha"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let repos = sample();
        let before = repos.clone();
        let filter = RepoFilter {
            min_stars: Some(1_000),
            ..Default::default()
        };

        assert!(filter.apply(&repos).is_empty());
        assert_eq!(repos, before);
    }
}
