//! Data store selection and connection

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr, sync::Arc};

use crate::config::required_env;
use crate::storage::errors::StorageError;

use super::types::{DataStore, PostgresDataStore, SqliteDataStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataStoreType {
    Sqlite,
    Postgres,
}

impl FromStr for DataStoreType {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(StorageError::UnsupportedStore(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataStoreConfig {
    pub store_type: DataStoreType,
    pub url: String,
}

impl DataStoreConfig {
    /// Reads `GENERIC_DATA_STORE_TYPE` and `GENERIC_DATA_STORE_URL`
    pub fn from_env() -> Result<Self, StorageError> {
        Ok(Self {
            store_type: required_env("GENERIC_DATA_STORE_TYPE")?.parse()?,
            url: required_env("GENERIC_DATA_STORE_URL")?,
        })
    }

    /// Creates a lazily connecting pool; no connection is opened until first use
    pub fn connect(&self) -> Result<Arc<dyn DataStore>, StorageError> {
        tracing::info!(
            store_type = ?self.store_type,
            url = %self.url,
            "Initializing data store"
        );

        let store: Arc<dyn DataStore> = match self.store_type {
            DataStoreType::Sqlite if self.url.contains(":memory:") => {
                Arc::new(SqliteDataStore::in_memory())
            }
            DataStoreType::Sqlite => {
                let opts = SqliteConnectOptions::from_str(&self.url)?.create_if_missing(true);
                Arc::new(SqliteDataStore {
                    pool: sqlx::sqlite::SqlitePool::connect_lazy_with(opts),
                })
            }
            DataStoreType::Postgres => Arc::new(PostgresDataStore {
                pool: sqlx::PgPool::connect_lazy(&self.url)?,
            }),
        };

        Ok(store)
    }
}

impl SqliteDataStore {
    /// A private in-memory database that lives as long as the returned store
    ///
    /// The pool is pinned to a single connection that never expires, since every
    /// new SQLite connection to `:memory:` opens an empty database.
    pub fn in_memory() -> Self {
        let opts = SqliteConnectOptions::new().in_memory(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_lazy_with(opts);
        Self { pool }
    }
}
