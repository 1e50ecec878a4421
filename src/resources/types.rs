//! User, post and fixed response types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Id assigned to every created user.
pub const CREATED_USER_ID: i64 = 123;

/// Id assigned to every created post.
pub const CREATED_POST_ID: i64 = 1;

/// Author id reported for every fetched post.
pub const DEFAULT_POST_AUTHOR: i64 = 1;

/// A record decoded from a request body.
pub trait Record: DeserializeOwned + Default {
    /// JSON field names, used to match body keys case-insensitively.
    const FIELDS: &'static [&'static str];
}

/// A user record.
///
/// Missing fields decode to their zero value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl User {
    /// Create a user.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The fixed listing returned by `GET /users`.
    pub fn fixtures() -> Vec<User> {
        vec![User::new(1, "John Doe"), User::new(2, "Jane Smith")]
    }

    /// User synthesized from a path segment: name is `"User {raw}"`.
    pub fn from_path(id: i64, raw: &str) -> Self {
        Self::new(id, format!("User {raw}"))
    }
}

impl Record for User {
    const FIELDS: &'static [&'static str] = &["id", "name"];
}

/// A post record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Post id.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Author id.
    pub user_id: i64,
}

impl Post {
    /// Post synthesized from a path segment: title is `"Post {raw}"`.
    pub fn from_path(id: i64, raw: &str) -> Self {
        Self {
            id,
            title: format!("Post {raw}"),
            user_id: DEFAULT_POST_AUTHOR,
        }
    }
}

impl Record for Post {
    const FIELDS: &'static [&'static str] = &["id", "title", "user_id"];
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// Reported service name.
    pub service: String,
}

impl HealthResponse {
    /// Healthy response for the named service.
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status: "ok",
            service: service.into(),
        }
    }
}

/// Admin stats response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    /// User count.
    pub users: u64,
    /// Post count.
    pub posts: u64,
}

impl Default for StatsResponse {
    fn default() -> Self {
        Self {
            users: 100,
            posts: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn user_missing_fields_decode_to_zero_values() {
        let user: User = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(user, User::new(0, "Ann"));

        let empty: User = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, User::default());
    }

    #[test]
    fn user_wrong_field_type_is_an_error() {
        assert!(serde_json::from_str::<User>(r#"{"id":"seven","name":"Ann"}"#).is_err());
    }

    #[test]
    fn post_serializes_with_snake_case_author() {
        let post = Post::from_path(9, "9");
        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({"id": 9, "title": "Post 9", "user_id": 1})
        );
    }

    #[test]
    fn synthesized_names_keep_raw_segment() {
        assert_eq!(User::from_path(0, "abc").name, "User abc");
        assert_eq!(Post::from_path(0, "x1").title, "Post x1");
    }

    #[test]
    fn fixed_bodies_match_wire_shape() {
        assert_eq!(
            serde_json::to_value(HealthResponse::ok("gin-app")).unwrap(),
            json!({"status": "ok", "service": "gin-app"})
        );
        assert_eq!(
            serde_json::to_value(StatsResponse::default()).unwrap(),
            json!({"users": 100, "posts": 50})
        );
    }
}
