//! Raw collection decoding and slot index parsing
//!
//! Collaborators hand over article collections either as a JSON array or as a
//! JSON object whose keys are numeric strings (`{"0": {...}, "3": {...}}`).
//! This module turns both shapes into index-addressed entries and parses
//! untyped slot indices coming from the outside world.

use crate::article::Article;
use crate::stack::{SlotError, MAX_SLOT_INDEX};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error type for raw payload decoding
#[derive(Debug, thiserror::Error)]
pub enum RawError {
    #[error("expected an array or an index-keyed object, got {0}")]
    NotACollection(&'static str),

    #[error("payload has no `articles` collection")]
    MissingArticles,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An article collection as received from a collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCollection {
    List(Vec<Value>),
    Keyed(Map<String, Value>),
}

impl Default for RawCollection {
    fn default() -> Self {
        RawCollection::List(Vec::new())
    }
}

impl RawCollection {
    /// Entries with a usable index, sorted by index.
    ///
    /// Keyed entries whose key is not a non-negative integer are dropped.
    pub fn into_indexed(self) -> Vec<(usize, Value)> {
        match self {
            RawCollection::List(values) => values.into_iter().enumerate().collect(),
            RawCollection::Keyed(map) => {
                let mut entries: Vec<(usize, Value)> = map
                    .into_iter()
                    .filter_map(|(key, value)| parse_index_key(&key).map(|index| (index, value)))
                    .collect();
                entries.sort_by_key(|(index, _)| *index);
                entries
            }
        }
    }

    /// Dense, ordered articles. Entries that are not objects are skipped.
    pub fn into_articles(self) -> Vec<Article> {
        self.into_indexed()
            .into_iter()
            .filter_map(|(_, value)| Article::from_value(value))
            .collect()
    }
}

/// Parse an object key into a slot index
///
/// Keys above [`MAX_SLOT_INDEX`] are treated like any other invalid key.
pub fn parse_index_key(key: &str) -> Option<usize> {
    let key = key.trim();
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<usize>().ok().filter(|index| *index <= MAX_SLOT_INDEX)
}

/// Parse an untyped slot index (JSON number or numeric string)
///
/// Missing, fractional, negative, non-numeric and out-of-range values are
/// rejected.
pub fn parse_slot_index(value: &Value) -> Result<usize, SlotError> {
    match value {
        Value::Number(number) => {
            let index = match (number.as_u64(), number.as_f64()) {
                (Some(index), _) => usize::try_from(index).ok(),
                (None, Some(float)) if float >= 0.0 && float.fract() == 0.0 => {
                    (float <= MAX_SLOT_INDEX as f64).then_some(float as usize)
                }
                _ => None,
            };
            index
                .filter(|index| *index <= MAX_SLOT_INDEX)
                .ok_or_else(|| SlotError::InvalidIndex(number.to_string()))
        }
        Value::String(text) => slot_index_from_str(text),
        Value::Null => Err(SlotError::InvalidIndex("missing".to_string())),
        other => Err(SlotError::InvalidIndex(other.to_string())),
    }
}

/// Parse a slot index typed by a user (e.g. a CLI argument)
pub fn slot_index_from_str(text: &str) -> Result<usize, SlotError> {
    parse_index_key(text).ok_or_else(|| SlotError::InvalidIndex(text.to_string()))
}

/// Extract the article collection from a response body.
///
/// Accepts `{"articles": ...}`, the wrapped `{"body": {"articles": ...}}` form,
/// or a bare collection.
pub fn articles_from_body(body: Value) -> Result<RawCollection, RawError> {
    match body {
        Value::Object(mut map) => {
            if let Some(articles) = map.remove("articles") {
                return collection_from_value(articles);
            }
            if let Some(inner) = map.remove("body") {
                return articles_from_body(inner);
            }
            if !map.is_empty() && !map.keys().any(|key| parse_index_key(key).is_some()) {
                return Err(RawError::MissingArticles);
            }
            Ok(RawCollection::Keyed(map))
        }
        Value::Array(values) => Ok(RawCollection::List(values)),
        other => Err(RawError::NotACollection(json_kind(&other))),
    }
}

/// Decode a value that must itself be a collection
pub fn collection_from_value(value: Value) -> Result<RawCollection, RawError> {
    match value {
        Value::Array(values) => Ok(RawCollection::List(values)),
        Value::Object(map) => Ok(RawCollection::Keyed(map)),
        Value::Null => Ok(RawCollection::default()),
        other => Err(RawError::NotACollection(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_index_key() {
        assert_eq!(parse_index_key("0"), Some(0));
        assert_eq!(parse_index_key("12"), Some(12));
        assert_eq!(parse_index_key(" 7 "), Some(7));
        assert_eq!(parse_index_key("-1"), None);
        assert_eq!(parse_index_key("1.5"), None);
        assert_eq!(parse_index_key("title"), None);
        assert_eq!(parse_index_key(""), None);
    }

    #[test]
    fn test_parse_index_key_ceiling() {
        assert_eq!(parse_index_key(&MAX_SLOT_INDEX.to_string()), Some(MAX_SLOT_INDEX));
        assert_eq!(parse_index_key(&(MAX_SLOT_INDEX + 1).to_string()), None);
        assert_eq!(parse_index_key("18446744073709551615"), None);
        assert_eq!(parse_index_key("99999999999999999999999"), None);
    }

    #[test]
    fn test_slot_index_above_ceiling_is_invalid() {
        assert_eq!(
            slot_index_from_str("18446744073709551615"),
            Err(SlotError::InvalidIndex("18446744073709551615".to_string()))
        );
        assert!(matches!(
            parse_slot_index(&json!(u64::MAX)),
            Err(SlotError::InvalidIndex(_))
        ));
        assert!(matches!(
            parse_slot_index(&json!(1e12)),
            Err(SlotError::InvalidIndex(_))
        ));
        assert_eq!(parse_slot_index(&json!(MAX_SLOT_INDEX)), Ok(MAX_SLOT_INDEX));
    }

    #[test]
    fn test_keyed_collection_sorted_and_filtered() {
        let raw: RawCollection =
            serde_json::from_value(json!({"3": {"ID": 3}, "-2": {"ID": -2}, "x": {}, "0": {"ID": 0}}))
                .unwrap();

        let indexes: Vec<usize> = raw.into_indexed().into_iter().map(|(i, _)| i).collect();
        assert_eq!(indexes, vec![0, 3]);
    }

    #[test]
    fn test_list_collection_keeps_positions() {
        let raw = RawCollection::List(vec![json!({"ID": 1}), json!(null), json!({"ID": 2})]);

        let entries = raw.into_indexed();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1], (1, json!(null)));
    }

    #[test]
    fn test_into_articles_densifies() {
        let raw = RawCollection::Keyed(
            json!({"5": {"ID": 5}, "1": {"ID": 1}, "2": null})
                .as_object()
                .cloned()
                .unwrap(),
        );

        let ids: Vec<Value> = raw
            .into_articles()
            .into_iter()
            .filter_map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![json!(1), json!(5)]);
    }

    #[test]
    fn test_parse_slot_index_accepts_integers() {
        assert_eq!(parse_slot_index(&json!(4)).unwrap(), 4);
        assert_eq!(parse_slot_index(&json!(4.0)).unwrap(), 4);
        assert_eq!(parse_slot_index(&json!("9")).unwrap(), 9);
    }

    #[test]
    fn test_parse_slot_index_rejects_invalid() {
        for value in [json!(-1), json!(1.5), json!(null), json!("two"), json!(true), json!([1])] {
            assert!(
                matches!(parse_slot_index(&value), Err(SlotError::InvalidIndex(_))),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_articles_from_body_shapes() {
        let plain = articles_from_body(json!({"articles": [{"ID": 1}]})).unwrap();
        assert_eq!(plain, RawCollection::List(vec![json!({"ID": 1})]));

        let wrapped = articles_from_body(json!({"body": {"articles": {"0": {"ID": 1}}}})).unwrap();
        assert!(matches!(wrapped, RawCollection::Keyed(_)));

        let bare = articles_from_body(json!({"2": {"ID": 2}})).unwrap();
        assert!(matches!(bare, RawCollection::Keyed(_)));

        let empty = articles_from_body(json!({})).unwrap();
        assert_eq!(empty.into_indexed().len(), 0);
    }

    #[test]
    fn test_articles_from_body_errors() {
        assert!(matches!(
            articles_from_body(json!({"error": "nope"})),
            Err(RawError::MissingArticles)
        ));
        assert!(matches!(
            articles_from_body(json!("text")),
            Err(RawError::NotACollection("a string"))
        ));
        assert!(matches!(
            articles_from_body(json!({"articles": 3})),
            Err(RawError::NotACollection("a number"))
        ));
    }
}
