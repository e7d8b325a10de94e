//! Ordering of repository collections

use std::cmp::Ordering;

use crate::models::RepositoryRecord;

/// Field to order repositories by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortField {
    /// Name, A to Z (case-insensitive)
    Name,
    /// Most stars first
    Stars,
    /// Most forks first
    Forks,
    /// Most recently updated first
    Updated,
    /// Most recently created first
    Created,
    /// Largest first
    Size,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Stars => "stars",
            SortField::Forks => "forks",
            SortField::Updated => "updated",
            SortField::Created => "created",
            SortField::Size => "size",
        }
    }

    /// Parse a field name; `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(SortField::Name),
            "stars" => Some(SortField::Stars),
            "forks" => Some(SortField::Forks),
            "updated" => Some(SortField::Updated),
            "created" => Some(SortField::Created),
            "size" => Some(SortField::Size),
            _ => None,
        }
    }

    fn compare(self, a: &RepositoryRecord, b: &RepositoryRecord) -> Ordering {
        match self {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Stars => b.stargazers_count.cmp(&a.stargazers_count),
            SortField::Forks => b.forks_count.cmp(&a.forks_count),
            SortField::Updated => b.updated_at.cmp(&a.updated_at),
            SortField::Created => b.created_at.cmp(&a.created_at),
            SortField::Size => b.size.cmp(&a.size),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorted copy of `repos`. Ties keep their input order.
fn sort_by(repos: &[RepositoryRecord], field: SortField) -> Vec<RepositoryRecord> {
    let mut sorted = repos.to_vec();
    sorted.sort_by(|a, b| field.compare(a, b));
    sorted
}

/// Sorted copy of `repos` by field name.
///
/// Unknown names return the input order unchanged.
pub fn sort_repositories(repos: &[RepositoryRecord], field: &str) -> Vec<RepositoryRecord> {
    match SortField::parse(field) {
        Some(field) => sort_by(repos, field),
        None => {
            log::debug!("Unknown sort field '{}', keeping input order", field);
            repos.to_vec()
        }
    }
}
