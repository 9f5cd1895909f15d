pub mod catalog;
pub mod config;
pub mod cursor;
pub mod episodes;
pub mod metrics;
pub mod query;
pub mod service;
pub mod testing;

pub use catalog::{
    load_index, load_index_from_str, CatalogError, CatalogIndex, CategoryEntry, VideoEntry,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    DatabaseConfig, ServerConfig,
};
pub use cursor::{
    CursorRecord, CursorStore, CursorStoreError, ProgressRecord, ProgressStore, SqliteCursorStore,
    SqliteProgressStore, PAGE_CURSOR_TTL, PROGRESS_TTL,
};
pub use episodes::EpisodeNavigator;
pub use query::{QueryEngine, SearchCriteria};
pub use service::{CatalogService, Page, PageLookup};
