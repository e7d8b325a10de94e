//! Local cache for API responses
//!
//! Raw pages of repository records are stored as JSON files keyed by a hash
//! of the request, so repeated runs within the TTL skip the network.

pub mod key;
pub mod storage;

pub use storage::{CacheStats, ResponseCache};
