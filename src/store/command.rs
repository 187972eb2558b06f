//! Command templates dispatched to the store
//!
//! Statements are opaque to the event loop; only the store interprets them.
//! The bundled local backend speaks plain SQL, so the templates here are
//! written in that dialect.

use serde_json::{json, Map, Value};

use super::document::Item;

/// A mutating statement with named bindings
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub statement: String,
    pub bindings: Map<String, Value>,
}

impl Command {
    /// Insert a freshly created item
    pub fn insert_item(collection: &str, item: &Item) -> Self {
        Self {
            statement: format!(
                "INSERT INTO {collection} (_id, title, done, deleted) VALUES (:id, :title, :done, :deleted)"
            ),
            bindings: bindings([
                ("id", json!(item.id)),
                ("title", json!(item.title)),
                ("done", json!(item.done)),
                ("deleted", json!(item.deleted)),
            ]),
        }
    }

    /// Set the done flag of an existing item
    pub fn set_done(collection: &str, id: &str, done: bool) -> Self {
        Self {
            statement: format!("UPDATE {collection} SET done = :done WHERE _id = :id"),
            bindings: bindings([("done", json!(done)), ("id", json!(id))]),
        }
    }

    /// Replace the title of an existing item
    pub fn set_title(collection: &str, id: &str, title: &str) -> Self {
        Self {
            statement: format!("UPDATE {collection} SET title = :title WHERE _id = :id"),
            bindings: bindings([("title", json!(title)), ("id", json!(id))]),
        }
    }

    /// Mark an item deleted. Items are never physically removed here; the
    /// store owns persisted state.
    pub fn soft_delete(collection: &str, id: &str) -> Self {
        Self {
            statement: format!("UPDATE {collection} SET deleted = true WHERE _id = :id"),
            bindings: bindings([("id", json!(id))]),
        }
    }

    /// The query observed for the visible snapshot: non-deleted items,
    /// ordered by identifier.
    pub fn visible_items_query(collection: &str) -> String {
        format!("SELECT * FROM {collection} WHERE deleted = false ORDER BY _id")
    }
}

fn bindings<const N: usize>(pairs: [(&str, Value); N]) -> Map<String, Value> {
    pairs.into_iter().map(|(key, value)| (key.to_string(), value)).collect()
}
