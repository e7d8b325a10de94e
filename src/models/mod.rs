//! Repository data model
//!
//! Records parsed from the API, their sanitization, and the display rows
//! used for table output.

pub mod display;
pub mod repository;
pub mod sanitize;

pub use display::RepoDisplay;
pub use repository::RepositoryRecord;
