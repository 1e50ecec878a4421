//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{
    admin_stats, create_post, create_user, delete_user, get_post, get_user, health, list_posts,
    list_users, update_user, AppState,
};
use super::middleware::track_metrics;

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    /// HTTP method.
    pub method: &'static str,
    /// Path template, `:id` marks the captured segment.
    pub path: &'static str,
    /// Handler description.
    pub handler: &'static str,
}

/// Every route served by [`create_router`].
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { method: "GET", path: "/users", handler: "list users" },
    RouteEntry { method: "POST", path: "/users", handler: "create user" },
    RouteEntry { method: "GET", path: "/users/:id", handler: "get user" },
    RouteEntry { method: "PUT", path: "/users/:id", handler: "update user" },
    RouteEntry { method: "DELETE", path: "/users/:id", handler: "delete user" },
    RouteEntry { method: "GET", path: "/api/posts", handler: "list posts" },
    RouteEntry { method: "POST", path: "/api/posts", handler: "create post" },
    RouteEntry { method: "GET", path: "/api/posts/:id", handler: "get post" },
    RouteEntry { method: "GET", path: "/health", handler: "health check" },
    RouteEntry { method: "GET", path: "/admin/stats", handler: "admin stats" },
];

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // User routes
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user))
        // Post routes
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/:id", get(get_post))
        // Health and admin
        .route("/health", get(health))
        .route("/admin/stats", get(admin_stats))
        .route_layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
