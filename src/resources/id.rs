//! Path id parsing.

use std::num::IntErrorKind;

use serde::Deserialize;
use strum::{Display, EnumString};
use tracing::warn;

use crate::error::ApiError;
use crate::metrics;

/// Handling of `{id}` segments that are not in-range integers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumString, Default,
)]
#[serde(try_from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IdPolicy {
    /// Non-numeric ids become `0`, out-of-range ids clamp to the `i64` bounds.
    #[default]
    Coerce,
    /// Answer `400 Bad Request`.
    Reject,
}

impl TryFrom<String> for IdPolicy {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A parsed `{id}` path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathId {
    /// Integer value; `0` or an `i64` bound when coerced.
    pub value: i64,
    /// Segment text as captured.
    pub raw: String,
}

impl PathId {
    /// Parse a raw segment under the given policy.
    pub fn parse(raw: String, policy: IdPolicy) -> Result<Self, ApiError> {
        let err = match raw.parse::<i64>() {
            Ok(value) => return Ok(Self { value, raw }),
            Err(err) => err,
        };

        if policy == IdPolicy::Reject {
            return Err(ApiError::InvalidPathId(raw));
        }

        let value = match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        };
        warn!(raw = %raw, value, "path id coerced");
        metrics::inc_path_id_coercions();

        Ok(Self { value, raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_parse_under_both_policies() {
        for policy in [IdPolicy::Coerce, IdPolicy::Reject] {
            let id = PathId::parse("42".to_string(), policy).unwrap();
            assert_eq!(id.value, 42);
            assert_eq!(id.raw, "42");
        }
    }

    #[test]
    fn signed_segments_parse() {
        assert_eq!(PathId::parse("-7".to_string(), IdPolicy::Reject).unwrap().value, -7);
        assert_eq!(PathId::parse("+7".to_string(), IdPolicy::Reject).unwrap().value, 7);
    }

    #[test]
    fn coerce_policy_maps_garbage_to_zero() {
        let id = PathId::parse("abc".to_string(), IdPolicy::Coerce).unwrap();
        assert_eq!(id.value, 0);
        assert_eq!(id.raw, "abc");
    }

    #[test]
    fn coerce_policy_clamps_overflow_to_bounds() {
        let id = PathId::parse("99999999999999999999".to_string(), IdPolicy::Coerce).unwrap();
        assert_eq!(id.value, i64::MAX);
        assert_eq!(id.raw, "99999999999999999999");

        let id = PathId::parse("-99999999999999999999".to_string(), IdPolicy::Coerce).unwrap();
        assert_eq!(id.value, i64::MIN);
    }

    #[test]
    fn reject_policy_errors_on_overflow() {
        assert!(PathId::parse("99999999999999999999".to_string(), IdPolicy::Reject).is_err());
    }

    #[test]
    fn empty_and_sign_only_segments_coerce_to_zero() {
        assert_eq!(PathId::parse("-".to_string(), IdPolicy::Coerce).unwrap().value, 0);
        assert_eq!(PathId::parse("12x".to_string(), IdPolicy::Coerce).unwrap().value, 0);
    }

    #[test]
    fn reject_policy_errors_on_garbage() {
        let err = PathId::parse("abc".to_string(), IdPolicy::Reject).unwrap_err();
        assert_eq!(err, ApiError::InvalidPathId("abc".to_string()));
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("REJECT".parse::<IdPolicy>().unwrap(), IdPolicy::Reject);
        assert_eq!("coerce".parse::<IdPolicy>().unwrap(), IdPolicy::Coerce);
        assert!("strict".parse::<IdPolicy>().is_err());
        assert_eq!(IdPolicy::Reject.to_string(), "reject");
    }

    #[test]
    fn policy_deserializes_case_insensitively() {
        let policy: IdPolicy = serde_json::from_str(r#""Reject""#).unwrap();
        assert_eq!(policy, IdPolicy::Reject);
        assert!(serde_json::from_str::<IdPolicy>(r#""strict""#).is_err());
    }
}
