//! Plain-text summary of aggregate statistics

use std::fmt::Write;

use colored::Colorize;

use super::formatters::format_count;
use crate::analysis::AggregateStats;
use crate::client::AccountKind;

/// Summary block for `analyze --output summary`, listing at most
/// `languages` entries from the language tally.
pub fn format_summary(
    stats: &AggregateStats,
    account: &str,
    kind: AccountKind,
    languages: usize,
) -> String {
    let title = format!("Repository Summary for {}: {}", kind.label(), account);
    let repositories = stats.total_repositories.to_string();
    let size = format!("{:.1} MB", stats.total_size_mb);
    let private = stats.private_repositories.to_string();
    let archived = stats.archived_repositories.to_string();
    let totals = [
        ("Total Repositories:", repositories.yellow()),
        ("Total Stars:", format_count(stats.total_stars).yellow()),
        ("Total Forks:", format_count(stats.total_forks).yellow()),
        ("Total Size:", size.yellow()),
        ("Private:", private.red()),
        ("Archived:", archived.dimmed()),
    ];

    // Writing to a String cannot fail
    let mut out = String::new();
    let _ = writeln!(out, "{}", title.bold().cyan());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Statistics".bold());
    for (label, value) in totals {
        let _ = writeln!(out, "  {:<20}{}", label, value);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Top Languages".bold());

    if stats.top_languages.is_empty() {
        let _ = writeln!(out, "  No language data available");
    } else {
        for (language, count) in stats.top_languages.iter().take(languages) {
            let noun = if *count == 1 {
                "repository"
            } else {
                "repositories"
            };
            let count = count.to_string();
            let _ = writeln!(out, "  {}: {} {}", language, count.green(), noun);
        }
    }

    out.trim_end().to_string()
}
