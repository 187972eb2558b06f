//! Typed item schema and the defaulting decode boundary
//!
//! Store documents arrive as untyped JSON maps. Everything past this module
//! works with the strict [`Item`] type: missing or wrong-typed fields take
//! type-appropriate defaults, and documents that are not objects are dropped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Document;

/// A task record as the UI sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub done: bool,
    pub deleted: bool,
}

impl Item {
    /// Create a fresh pending item with a client-generated identifier
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            done: false,
            deleted: false,
        }
    }
}

/// Decode one raw document, substituting defaults for missing or
/// wrong-typed fields. Returns `None` when the document is not an object.
pub fn decode_item(doc: &Document) -> Option<Item> {
    let map = doc.as_object()?;
    Some(Item {
        id: string_field(map, "_id"),
        title: string_field(map, "title"),
        done: bool_field(map, "done"),
        deleted: bool_field(map, "deleted"),
    })
}

/// Decode a full snapshot. Unparsable documents are skipped; soft-deleted
/// items are filtered out so they can never reach the rendered list.
pub fn decode_snapshot(docs: &[Document]) -> Vec<Item> {
    docs.iter()
        .filter_map(|doc| {
            let item = decode_item(doc);
            if item.is_none() {
                log::warn!("Dropping document that is not an object: {doc}");
            }
            item
        })
        .filter(|item| !item.deleted)
        .collect()
}

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key).and_then(Value::as_str).unwrap_or_default().to_string()
}

fn bool_field(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or_default()
}
