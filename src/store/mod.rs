//! Document store gateway
//!
//! The event loop issues declarative commands against a document store and
//! receives whole result snapshots whenever the store's view of an observed
//! query changes. Everything behind this boundary (persistence, replication,
//! conflict resolution) belongs to the store implementation; the loop treats
//! statements and queries as opaque strings with named bindings.

use async_trait::async_trait;

pub mod command;
pub mod document;
pub mod local;

pub use command::Command;
pub use document::Item;

/// Raw document as delivered by the store
pub type Document = serde_json::Value;

/// Callback invoked with the full result set of an observed query
pub type SnapshotCallback = Box<dyn Fn(Vec<Document>) + Send + Sync>;

/// Common error types for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Handle returned by [`StoreGateway::observe`]. The registration stays
/// alive for as long as the handle is held; dropping it deregisters.
pub trait ObserverHandle: Send {}

/// Gateway trait that all store backends must implement.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Execute a mutating command. Implementations must tolerate concurrent
    /// callers; the caller never learns more than success or failure.
    async fn execute(&self, command: Command) -> Result<(), StoreError>;

    /// Register a snapshot observer for `query`. The callback receives the
    /// full matching result set at registration and again after every
    /// change, never deltas.
    async fn observe(
        &self,
        query: &str,
        on_change: SnapshotCallback,
    ) -> Result<Box<dyn ObserverHandle>, StoreError>;
}
