//! Minimal users/posts HTTP service.
//!
//! Every handler is stateless: it reads a path segment and/or a JSON body,
//! builds a canned value and serializes it. Nothing is stored between
//! requests.
//!
//! ```text
//! GET    /users           list users (two fixed records)
//! POST   /users           create user (id forced to 123)
//! GET    /users/:id       get user ("User {id}")
//! PUT    /users/:id       update user (id taken from path)
//! DELETE /users/:id       delete user (204)
//! GET    /api/posts       list posts (empty)
//! POST   /api/posts       create post (id forced to 1)
//! GET    /api/posts/:id   get post ("Post {id}")
//! GET    /health          health check
//! GET    /admin/stats     admin stats
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`resources`]: User/post records and path id parsing
//! - [`api`]: Router, handlers and middleware
//! - [`metrics`]: Request metrics
//! - [`server`]: Listener binding and graceful shutdown
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod resources;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, AppError, Result};
