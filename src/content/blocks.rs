//! Rich text block tree

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node of a rich text tree
///
/// Every node has a kind (`type` on the wire). Kind-specific fields such as
/// `level`, `format`, `url` or `bold` are kept in `fields` so unknown kinds
/// still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Block {
    /// Create a node without children or fields
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            children: None,
            fields: Map::new(),
        }
    }

    /// Create a `text` leaf
    pub fn text(text: impl Into<String>) -> Self {
        Self::new("text").with_field("text", Value::String(text.into()))
    }

    /// Attach children
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = Some(children);
        self
    }

    /// Attach a kind-specific field
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Child nodes, empty when absent
    pub fn children(&self) -> &[Block] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn bool_field(&self, key: &str) -> bool {
        self.fields.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn u64_field(&self, key: &str) -> Option<u64> {
        self.fields.get(key).and_then(Value::as_u64)
    }

    /// Concatenated text of this node and its descendants
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = self.str_field("text") {
            out.push_str(text);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }
}

/// Plain text of a whole document, one line per top-level block
pub fn plain_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::plain_text)
        .collect::<Vec<_>>()
        .join("\n")
}
