use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Article content payload: string keys mapped to arbitrary JSON values
pub type Content = Map<String, Value>;

/// A content item managed by both the stack and the result set
///
/// Only the identifier and the `content` payload carry meaning for the models.
/// Every other top-level field is kept as-is so a layout file survives a
/// load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(
        rename = "ID",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(id: impl Into<Value>) -> Self {
        Self {
            id: Some(id.into()),
            content: Some(Content::new()),
            extra: Map::new(),
        }
    }

    /// An edit payload: content only, no identifier
    pub fn from_content(content: Content) -> Self {
        Self {
            id: None,
            content: Some(content),
            extra: Map::new(),
        }
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    /// Decode a raw collection entry.
    ///
    /// Only JSON objects are articles; `null`, `false` and every other scalar
    /// count as an empty slot. Any object is accepted: a `content` that is not
    /// an object stays in `extra` so it is written back unchanged.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut extra) = value else {
            return None;
        };

        let id = match extra.remove("ID") {
            Some(id) => Some(id),
            None => extra.remove("id"),
        }
        .filter(|id| !id.is_null());

        let content = match extra.remove("content") {
            Some(Value::Object(content)) => Some(content),
            Some(Value::Null) | None => None,
            Some(other) => {
                extra.insert("content".to_string(), other);
                None
            }
        };

        Some(Self { id, content, extra })
    }

    /// Content payload for merging, created if missing.
    ///
    /// A non-object `content` kept in `extra` is discarded in favour of the map.
    pub fn content_mut(&mut self) -> &mut Content {
        if self.content.is_none() {
            self.extra.remove("content");
        }
        self.content.get_or_insert_with(Content::new)
    }

    /// String `title` from the content payload, if any
    pub fn title(&self) -> Option<&str> {
        self.content
            .as_ref()
            .and_then(|content| content.get("title"))
            .and_then(Value::as_str)
    }
}
