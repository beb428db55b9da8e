//! Normalizes backend envelopes into canonical articles

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::envelope::{ArticleFields, Envelope, RawArticle};
use super::{Article, Block, Category};

/// Convert every record in the envelope, preserving backend order
///
/// Records missing a slug, title, content or category still produce an
/// article; dropping them is the caller's filtering decision.
pub fn normalize(envelope: Envelope) -> Vec<Article> {
    if let Some(pagination) = &envelope.meta.pagination {
        tracing::debug!(
            "Envelope page {}/{} ({} total)",
            pagination.page,
            pagination.page_count,
            pagination.total
        );
    }

    envelope
        .data
        .into_records()
        .into_iter()
        .map(normalize_record)
        .collect()
}

/// Convert one record of either layout
pub fn normalize_record(raw: RawArticle) -> Article {
    let (outer_id, fields) = match raw {
        RawArticle::Legacy { id, attributes } => (id, attributes),
        RawArticle::Flattened(fields) => (None, fields),
    };

    let ArticleFields {
        id,
        document_id: _,
        title,
        slug,
        content,
        category,
        published_at,
    } = fields;

    let id = outer_id.or(id).unwrap_or_default();

    Article {
        id,
        slug,
        title,
        content: content.map(|c| normalize_content(id, c)).unwrap_or_default(),
        category: category.and_then(normalize_category),
        published_at: published_at.as_deref().and_then(parse_timestamp),
    }
}

fn normalize_content(id: u64, value: Value) -> Vec<Block> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(_) => match serde_json::from_value(value) {
            Ok(blocks) => blocks,
            Err(e) => {
                tracing::debug!("Article {} has malformed content: {}", id, e);
                Vec::new()
            }
        },
        // Plain rich text fields arrive as a string
        Value::String(text) => vec![Block::new("paragraph").with_children(vec![Block::text(text)])],
        other => {
            tracing::debug!("Article {} has unsupported content: {}", id, other);
            Vec::new()
        }
    }
}

/// Resolve `{ data: { id, attributes } }`, `{ id, attributes }` or `{ id, name, slug }`
fn normalize_category(value: Value) -> Option<Category> {
    let Value::Object(mut map) = value else {
        return None;
    };

    if let Some(data) = map.remove("data") {
        return normalize_category(data);
    }

    let id = map.get("id").and_then(Value::as_u64).unwrap_or_default();
    let fields = match map.remove("attributes") {
        Some(Value::Object(attributes)) => attributes,
        Some(_) => return None,
        None => map,
    };

    let name = fields.get("name").and_then(Value::as_str)?.to_string();
    let slug = fields
        .get("slug")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(Category { id, name, slug })
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!("Unparseable publishedAt '{}': {}", s, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    fn legacy_envelope() -> Envelope {
        envelope(json!({
            "data": [
                {
                    "id": 1,
                    "attributes": {
                        "title": "Intro to X",
                        "slug": "intro-to-x",
                        "publishedAt": "2024-01-15T10:30:00.000Z",
                        "content": [
                            { "type": "paragraph", "children": [{ "type": "text", "text": "Hi" }] }
                        ],
                        "category": {
                            "data": { "id": 5, "attributes": { "name": "Guides", "slug": "guides" } }
                        }
                    }
                },
                {
                    "id": 2,
                    "attributes": {
                        "title": "Second",
                        "slug": "second",
                        "publishedAt": "2024-02-01T00:00:00.000Z",
                        "category": { "data": null }
                    }
                }
            ],
            "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 2 } }
        }))
    }

    fn flattened_envelope() -> Envelope {
        envelope(json!({
            "data": [
                {
                    "id": 1,
                    "documentId": "a1",
                    "title": "Intro to X",
                    "slug": "intro-to-x",
                    "publishedAt": "2024-01-15T10:30:00.000Z",
                    "content": [
                        { "type": "paragraph", "children": [{ "type": "text", "text": "Hi" }] }
                    ],
                    "category": { "id": 5, "documentId": "c5", "name": "Guides", "slug": "guides" }
                },
                {
                    "id": 2,
                    "documentId": "b2",
                    "title": "Second",
                    "slug": "second",
                    "publishedAt": "2024-02-01T00:00:00.000Z",
                    "category": null
                }
            ],
            "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 2 } }
        }))
    }

    #[test]
    fn test_both_layouts_normalize_identically() {
        let legacy = normalize(legacy_envelope());
        let flattened = normalize(flattened_envelope());
        assert_eq!(legacy, flattened);
        assert_eq!(legacy.len(), 2);
        assert_eq!(legacy[0].slug.as_deref(), Some("intro-to-x"));
        assert_eq!(legacy[1].slug.as_deref(), Some("second"));
    }

    #[test]
    fn test_category_and_timestamp() {
        let articles = normalize(flattened_envelope());
        let category = articles[0].category.as_ref().unwrap();
        assert_eq!(category.id, 5);
        assert_eq!(category.name, "Guides");
        assert_eq!(category.slug, "guides");
        assert!(articles[1].category.is_none());
        assert_eq!(
            articles[0].published_at.unwrap().to_rfc3339(),
            "2024-01-15T10:30:00+00:00"
        );
    }

    #[test]
    fn test_partial_records_are_kept() {
        let articles = normalize(envelope(json!({
            "data": [
                { "id": 7, "attributes": { "title": "No slug" } },
                { "id": 8 },
                { "id": 9, "attributes": null }
            ]
        })));
        assert_eq!(articles.len(), 3);
        assert!(articles[0].slug.is_none());
        assert!(articles[1].title.is_none());
        assert!(articles[1].content.is_empty());
        assert_eq!(articles[2].id, 9);
    }

    #[test]
    fn test_normalize_is_deterministic() {
        assert_eq!(normalize(legacy_envelope()), normalize(legacy_envelope()));
    }

    #[test]
    fn test_bad_timestamp_and_malformed_content() {
        let articles = normalize(envelope(json!({
            "data": [{
                "id": 1,
                "title": "T",
                "slug": "t",
                "publishedAt": "yesterday",
                "content": [{ "children": [] }]
            }]
        })));
        assert!(articles[0].published_at.is_none());
        assert!(articles[0].content.is_empty());
    }

    #[test]
    fn test_string_content_becomes_paragraph() {
        let articles = normalize(envelope(json!({
            "data": [{ "id": 1, "title": "T", "slug": "t", "content": "Just text" }]
        })));
        assert_eq!(articles[0].content.len(), 1);
        assert_eq!(articles[0].content[0].kind, "paragraph");
        assert_eq!(articles[0].content[0].plain_text(), "Just text");
    }
}
