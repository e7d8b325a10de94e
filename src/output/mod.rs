//! Output formatting for CLI results

pub mod formatters;
pub mod json;
pub mod summary;
pub mod table;

pub use formatters::format_size;
pub use json::format_json;
pub use summary::format_summary;
pub use table::{NO_REPOSITORIES, format_repositories};
