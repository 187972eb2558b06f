//! Bundled local store backend
//!
//! A single-connection SQLite replica that satisfies the gateway contract:
//! it executes command statements with named bindings and re-runs every
//! registered observer query after each successful write. A replicated
//! store would implement the same trait; nothing above the gateway knows
//! the difference.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, FromQueryResult,
    Statement, Value as DbValue,
};
use serde_json::Value;

use crate::config::StoreConfig;
use crate::entities::item;

use super::{Command, Document, ObserverHandle, SnapshotCallback, StoreError, StoreGateway};

struct Observer {
    id: u64,
    query: String,
    callback: Arc<SnapshotCallback>,
}

type ObserverList = Arc<Mutex<Vec<Observer>>>;

/// Local SQLite-backed store
pub struct LocalStore {
    db: DatabaseConnection,
    observers: ObserverList,
    next_observer_id: AtomicU64,
}

impl LocalStore {
    /// Open (or create) the local database and its task collection
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let url = match &config.database_url {
            Some(url) => url.clone(),
            None => default_database_url()?,
        };

        let mut options = ConnectOptions::new(url);
        // A single connection keeps writes and observer re-queries ordered,
        // and keeps in-memory databases coherent.
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .context("Failed to open local store database")?;

        let store = Self {
            db,
            observers: Arc::new(Mutex::new(Vec::new())),
            next_observer_id: AtomicU64::new(0),
        };
        store.init_schema(&config.collection).await?;
        Ok(store)
    }

    async fn init_schema(&self, collection: &str) -> Result<()> {
        self.db
            .execute_unprepared(&format!(
                "CREATE TABLE IF NOT EXISTS {collection} (
                    _id TEXT PRIMARY KEY,
                    title TEXT NOT NULL DEFAULT '',
                    done BOOLEAN NOT NULL DEFAULT FALSE,
                    deleted BOOLEAN NOT NULL DEFAULT FALSE
                )"
            ))
            .await
            .context("Failed to initialize local store schema")?;
        Ok(())
    }

    async fn run_query(&self, query: &str) -> Result<Vec<Document>, StoreError> {
        let rows = item::Model::find_by_statement(Statement::from_string(DbBackend::Sqlite, query))
            .all(&self.db)
            .await
            .map_err(|err| StoreError::Query(err.to_string()))?;

        rows.iter()
            .map(|row| serde_json::to_value(row).map_err(|err| StoreError::InvalidData(err.to_string())))
            .collect()
    }

    async fn notify_observers(&self) {
        let registered: Vec<(String, Arc<SnapshotCallback>)> = {
            let Ok(observers) = self.observers.lock() else {
                return;
            };
            observers
                .iter()
                .map(|observer| (observer.query.clone(), Arc::clone(&observer.callback)))
                .collect()
        };

        for (query, callback) in registered {
            match self.run_query(&query).await {
                Ok(docs) => callback(docs),
                Err(err) => log::error!("Observer query failed: {err}"),
            }
        }
    }
}

#[async_trait]
impl StoreGateway for LocalStore {
    async fn execute(&self, command: Command) -> Result<(), StoreError> {
        let (sql, values) = bind_named(&command.statement, &command.bindings)?;
        self.db
            .execute(Statement::from_sql_and_values(DbBackend::Sqlite, sql, values))
            .await
            .map_err(|err| StoreError::Query(err.to_string()))?;

        self.notify_observers().await;
        Ok(())
    }

    async fn observe(
        &self,
        query: &str,
        on_change: SnapshotCallback,
    ) -> Result<Box<dyn ObserverHandle>, StoreError> {
        let callback = Arc::new(on_change);
        let id = self.next_observer_id.fetch_add(1, Ordering::Relaxed);

        // Deliver the current result set up front so the first snapshot
        // never depends on a later write.
        let docs = self.run_query(query).await?;
        callback(docs);

        if let Ok(mut observers) = self.observers.lock() {
            observers.push(Observer {
                id,
                query: query.to_string(),
                callback,
            });
        }

        Ok(Box::new(LocalObserverHandle {
            id,
            observers: Arc::clone(&self.observers),
        }))
    }
}

struct LocalObserverHandle {
    id: u64,
    observers: ObserverList,
}

impl ObserverHandle for LocalObserverHandle {}

impl Drop for LocalObserverHandle {
    fn drop(&mut self) {
        if let Ok(mut observers) = self.observers.lock() {
            observers.retain(|observer| observer.id != self.id);
        }
    }
}

/// Rewrite `:name` placeholders to positional binds, resolving each name
/// against the command's bindings in order of appearance.
fn bind_named(
    statement: &str,
    bindings: &serde_json::Map<String, Value>,
) -> Result<(String, Vec<DbValue>), StoreError> {
    let mut sql = String::with_capacity(statement.len());
    let mut values = Vec::new();
    let mut rest = statement;

    while let Some(pos) = rest.find(':') {
        sql.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let end = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        if end == 0 {
            sql.push(':');
            rest = after;
            continue;
        }

        let name = &after[..end];
        let value = bindings
            .get(name)
            .ok_or_else(|| StoreError::InvalidData(format!("missing binding :{name}")))?;
        values.push(json_to_db_value(value)?);
        sql.push('?');
        rest = &after[end..];
    }
    sql.push_str(rest);

    Ok((sql, values))
}

fn json_to_db_value(value: &Value) -> Result<DbValue, StoreError> {
    match value {
        Value::String(s) => Ok(DbValue::from(s.as_str())),
        Value::Bool(b) => Ok(DbValue::from(*b)),
        Value::Number(n) if n.is_i64() => Ok(DbValue::from(n.as_i64().unwrap_or_default())),
        Value::Number(n) => Ok(DbValue::from(n.as_f64().unwrap_or_default())),
        Value::Null => Ok(DbValue::String(None)),
        other => Err(StoreError::InvalidData(format!(
            "unsupported binding type: {other}"
        ))),
    }
}

fn default_database_url() -> Result<String> {
    let dir = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
        .join("taskmesh");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    Ok(format!("sqlite://{}?mode=rwc", dir.join("tasks.db").display()))
}
