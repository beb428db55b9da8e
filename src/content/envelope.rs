//! Wire types for backend responses
//!
//! The backend has shipped two record layouts. Older versions nest every
//! field under an `attributes` object:
//!
//! ```json
//! { "id": 1, "attributes": { "title": "...", "slug": "...", "category": { "data": { ... } } } }
//! ```
//!
//! Newer versions put the fields directly on the record:
//!
//! ```json
//! { "id": 1, "documentId": "abc", "title": "...", "slug": "...", "category": { ... } }
//! ```
//!
//! These types only live long enough to be normalized into [`Article`](super::Article).

use serde::Deserialize;
use serde_json::Value;

/// List or single-item response wrapper
#[derive(Debug, Default, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: EnvelopeData,

    #[serde(default)]
    pub meta: Meta,
}

/// `data` is an array for collection queries and an object (or null) for single items
///
/// Records stay untyped until [`into_records`](EnvelopeData::into_records) so
/// one malformed entry cannot fail the whole envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EnvelopeData {
    Many(Vec<Value>),
    One(Value),
}

impl Default for EnvelopeData {
    fn default() -> Self {
        EnvelopeData::Many(Vec::new())
    }
}

impl EnvelopeData {
    /// Records in backend order
    ///
    /// A record that does not decode becomes an empty one, which the
    /// displayability filter then drops.
    pub fn into_records(self) -> Vec<RawArticle> {
        let values = match self {
            EnvelopeData::Many(values) => values,
            EnvelopeData::One(Value::Null) => Vec::new(),
            EnvelopeData::One(value) => vec![value],
        };
        values.into_iter().map(RawArticle::decode_or_empty).collect()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    pub page_count: u64,
    pub total: u64,
}

/// A single article record in either schema version
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Value")]
pub enum RawArticle {
    /// Fields nested under `attributes`
    Legacy { id: Option<u64>, attributes: ArticleFields },
    /// Fields directly on the record
    Flattened(ArticleFields),
}

impl TryFrom<Value> for RawArticle {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut record = match value {
            Value::Object(record) => record,
            other => return Err(format!("expected article object, found {}", other)),
        };

        match record.remove("attributes") {
            Some(attributes) => {
                let id = record.get("id").and_then(Value::as_u64);
                let attributes = match attributes {
                    Value::Null => ArticleFields::default(),
                    other => serde_json::from_value(other).map_err(|e| e.to_string())?,
                };
                Ok(RawArticle::Legacy { id, attributes })
            }
            None => serde_json::from_value(Value::Object(record))
                .map(RawArticle::Flattened)
                .map_err(|e| e.to_string()),
        }
    }
}

impl RawArticle {
    fn decode_or_empty(value: Value) -> Self {
        let id = value.get("id").and_then(Value::as_u64);
        RawArticle::try_from(value).unwrap_or_else(|e| {
            tracing::debug!("Undecodable article record {:?}: {}", id, e);
            RawArticle::Flattened(ArticleFields {
                id,
                ..ArticleFields::default()
            })
        })
    }
}

/// Article fields shared by both layouts
///
/// `content` and `category` stay untyped here because their shape also
/// differs between versions; the normalizer resolves them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleFields {
    pub id: Option<u64>,
    pub document_id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<Value>,
    pub category: Option<Value>,
    pub published_at: Option<String>,
}
