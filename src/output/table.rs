//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::client::AccountKind;
use crate::models::{RepoDisplay, RepositoryRecord};

/// Printed in place of an empty table
pub const NO_REPOSITORIES: &str = "No repositories found.";

/// Rounded table with centered headers.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Title line followed by one row per repository.
pub fn format_repositories(repos: &[RepositoryRecord], account: &str, kind: AccountKind) -> String {
    if repos.is_empty() {
        return NO_REPOSITORIES.to_string();
    }

    let rows: Vec<RepoDisplay> = repos.iter().map(RepoDisplay::from).collect();
    format!(
        "Repositories for {}: {}\n{}",
        kind.label(),
        account,
        format_table(&rows)
    )
}
