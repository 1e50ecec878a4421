//! Resource types served by the API.
//!
//! This module handles:
//! - User and post records
//! - Fixed health and stats bodies
//! - Path id parsing

pub mod id;
pub mod types;

pub use id::{IdPolicy, PathId};
pub use types::{HealthResponse, Post, Record, StatsResponse, User};
