//! HTTP API module for the users, posts, health and admin endpoints.

pub mod body;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use routes::{create_router, RouteEntry, ROUTES};
