//! Request body decoding.
//!
//! Bodies are decoded as JSON whatever the `Content-Type` header says, with
//! the leniencies of a zero-value JSON binder:
//! - a `null` body, or a `null` field, leaves the zero value in place
//! - keys match field names case-insensitively, an exact match wins
//! - only the first JSON value is read; anything after it is ignored

use serde_json::{Deserializer, Map, Value};

use crate::error::ApiError;
use crate::resources::Record;

/// Decode a request body into a record.
pub fn decode_record<T: Record>(bytes: &[u8]) -> Result<T, ApiError> {
    let value = match Deserializer::from_slice(bytes).into_iter::<Value>().next() {
        Some(value) => value?,
        // Empty or whitespace-only body; let serde report the EOF.
        None => serde_json::from_slice::<Value>(bytes)?,
    };

    let value = match value {
        Value::Null => return Ok(T::default()),
        Value::Object(map) => Value::Object(canonical_keys(map, T::FIELDS)),
        other => other,
    };

    Ok(serde_json::from_value(value)?)
}

fn canonical_keys(map: Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    let mut out = Map::with_capacity(map.len());
    let mut exact = Vec::new();

    for (key, value) in map {
        match fields.iter().find(|field| field.eq_ignore_ascii_case(&key)) {
            Some(_) if value.is_null() => {}
            Some(field) if *field == key => exact.push((key, value)),
            Some(field) => {
                out.insert((*field).to_string(), value);
            }
            None => {
                out.insert(key, value);
            }
        }
    }

    for (key, value) in exact {
        out.insert(key, value);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Post, User};
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_plain_object() {
        let user: User = decode_record(br#"{"id":4,"name":"Ann"}"#).unwrap();
        assert_eq!(user, User::new(4, "Ann"));
    }

    #[test]
    fn null_body_is_zero_record() {
        let user: User = decode_record(b"null").unwrap();
        assert_eq!(user, User::default());
    }

    #[test]
    fn null_field_keeps_zero_value() {
        let post: Post = decode_record(br#"{"title":null,"user_id":3}"#).unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.user_id, 3);
    }

    #[test]
    fn keys_match_case_insensitively() {
        let user: User = decode_record(br#"{"NAME":"Ann","Id":2}"#).unwrap();
        assert_eq!(user, User::new(2, "Ann"));

        let post: Post = decode_record(br#"{"User_ID":9}"#).unwrap();
        assert_eq!(post.user_id, 9);
    }

    #[test]
    fn exact_key_wins_over_case_variant() {
        let user: User = decode_record(br#"{"Name":"Loose","name":"Exact"}"#).unwrap();
        assert_eq!(user.name, "Exact");
    }

    #[test]
    fn trailing_data_after_first_value_is_ignored() {
        let user: User = decode_record(br#"{"name":"Ann"} trailing"#).unwrap();
        assert_eq!(user.name, "Ann");
    }

    #[test]
    fn empty_body_is_an_error() {
        assert!(matches!(decode_record::<User>(b""), Err(ApiError::InvalidBody(_))));
        assert!(matches!(decode_record::<User>(b"  \n"), Err(ApiError::InvalidBody(_))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(decode_record::<User>(b"{\"name\":"), Err(ApiError::InvalidBody(_))));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(decode_record::<User>(b"[1,2]").is_err());
        assert!(decode_record::<User>(br#"{"id":"seven"}"#).is_err());
        assert!(decode_record::<Post>(br#"{"user_id":1.5}"#).is_err());
    }
}
