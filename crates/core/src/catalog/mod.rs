//! Video catalog - the immutable in-memory snapshot the whole engine reads.
//!
//! The catalog is loaded once at process start from a JSON feed and never
//! mutated afterwards. Queries see a consistent view without locking.

mod index;
mod loader;
mod types;

pub use index::CatalogIndex;
pub use loader::{load_index, load_index_from_str};
pub use types::*;
