pub mod categories;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod search;
pub mod videos;

pub use routes::create_router;
