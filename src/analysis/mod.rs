//! In-memory analysis of fetched repositories
//!
//! Filtering, ordering, and aggregate statistics, plus the service that runs
//! them after a fetch.

pub mod filter;
pub mod service;
pub mod sort;
pub mod stats;

pub use filter::RepoFilter;
pub use service::RepositoryService;
pub use sort::{SortField, sort_repositories};
pub use stats::{AggregateStats, aggregate};
