//! Prometheus metrics for the query and pagination engine.

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts, Registry};

/// Combined searches, labeled by whether anything matched.
pub static SEARCHES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("vodhound_searches_total", "Total combined catalog searches"),
        &["outcome"], // "hit", "empty"
    )
    .unwrap()
});

/// Pagination cursors created (one per overflowing result list).
pub static PAGES_CREATED_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "vodhound_pages_created_total",
            "Pagination cursors created for overflowing result lists",
        ),
        &["scope"],
    )
    .unwrap()
});

/// Next-page lookups, labeled by result.
pub static PAGE_LOOKUPS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("vodhound_page_lookups_total", "Next-page cursor lookups"),
        &["result"], // "found", "not_found", "store_unavailable"
    )
    .unwrap()
});

/// Cursor-store failures, labeled by operation. These are swallowed at the
/// facade, so the counter is the only place they stay visible.
pub static CURSOR_STORE_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "vodhound_cursor_store_errors_total",
            "Cursor store operation failures",
        ),
        &["operation"], // "get", "put"
    )
    .unwrap()
});

/// Register all core metrics with a registry.
pub fn register_metrics(registry: &Registry) {
    let _ = registry.register(Box::new(SEARCHES_TOTAL.clone()));
    let _ = registry.register(Box::new(PAGES_CREATED_TOTAL.clone()));
    let _ = registry.register(Box::new(PAGE_LOOKUPS_TOTAL.clone()));
    let _ = registry.register(Box::new(CURSOR_STORE_ERRORS_TOTAL.clone()));
}
