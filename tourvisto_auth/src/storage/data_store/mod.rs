mod config;
mod types;

pub use config::{DataStoreConfig, DataStoreType};
pub use types::{DataStore, PostgresDataStore, SqliteDataStore};
