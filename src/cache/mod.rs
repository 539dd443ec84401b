//! Local cache of translation results.

mod sqlite;

pub use sqlite::{CacheKey, CacheManager};
