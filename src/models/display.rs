//! Display model for table output
//!
//! Transforms repository records into CLI-friendly rows with the column
//! names shown by `analyze` and `search`.

use tabled::Tabled;

use super::repository::RepositoryRecord;

/// Repository display model for table output.
#[derive(Debug, Clone, Tabled)]
pub struct RepoDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "LANGUAGE")]
    pub language: String,

    #[tabled(rename = "STARS")]
    pub stars: u64,

    #[tabled(rename = "FORKS")]
    pub forks: u64,

    #[tabled(rename = "SIZE (MB)")]
    pub size_mb: String,

    #[tabled(rename = "PRIVATE")]
    pub private: String,

    #[tabled(rename = "ARCHIVED")]
    pub archived: String,

    /// Date part of the last update
    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

fn check_mark(flag: bool) -> String {
    let mark = if flag { "\u{2713}" } else { "\u{2717}" };
    mark.to_string()
}

impl From<&RepositoryRecord> for RepoDisplay {
    fn from(repo: &RepositoryRecord) -> Self {
        Self {
            name: repo.name.clone(),
            language: repo.language.clone().unwrap_or_else(|| "N/A".to_string()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            size_mb: format!("{:.1}", repo.size_mb()),
            private: check_mark(repo.private),
            archived: check_mark(repo.archived),
            updated: repo.updated_at.format("%Y-%m-%d").to_string(),
        }
    }
}
