//! Shared CLI argument types
//!
//! Reusable argument structs flattened into commands with
//! `#[command(flatten)]`.

mod common;
mod global;

pub use common::{FetchArgs, OutputFormat, SearchFilterArgs};
pub use global::GlobalOptions;
