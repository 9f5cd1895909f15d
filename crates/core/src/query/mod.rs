//! Catalog search: single-criterion lookups combined by set intersection.

mod criteria;
mod engine;

pub use criteria::SearchCriteria;
pub use engine::QueryEngine;
