//! Lenient field deserializers for CMS data.
//!
//! WPGraphQL returns `null` for unset ACF fields and is loose about numbers
//! vs. strings, so the record types accept both.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a rating as a number or numeric string; anything else is no rating.
pub(crate) fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let rating = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(rating.filter(|r| r.is_finite()))
}

/// Accept a text field that the CMS may also send as a number.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_rating")]
        rating: Option<f64>,
        #[serde(default, deserialize_with = "string_or_number")]
        limit: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_rating_number_and_string() {
        assert_eq!(probe(r#"{"rating": 8.5}"#).rating, Some(8.5));
        assert_eq!(probe(r#"{"rating": " 7 "}"#).rating, Some(7.0));
    }

    #[test]
    fn test_rating_garbage_is_none() {
        assert_eq!(probe(r#"{"rating": "great"}"#).rating, None);
        assert_eq!(probe(r#"{"rating": null}"#).rating, None);
        assert_eq!(probe(r#"{"rating": [9]}"#).rating, None);
        assert_eq!(probe(r#"{"rating": "NaN"}"#).rating, None);
        assert_eq!(probe("{}").rating, None);
    }

    #[test]
    fn test_string_or_number() {
        assert_eq!(probe(r#"{"limit": 5000}"#).limit.as_deref(), Some("5000"));
        assert_eq!(probe(r#"{"limit": "$10"}"#).limit.as_deref(), Some("$10"));
        assert_eq!(probe(r#"{"limit": null}"#).limit, None);
    }

    #[test]
    fn test_null_list_is_empty() {
        assert!(probe(r#"{"tags": null}"#).tags.is_empty());
        assert_eq!(probe(r#"{"tags": ["a"]}"#).tags, vec!["a".to_string()]);
    }
}
