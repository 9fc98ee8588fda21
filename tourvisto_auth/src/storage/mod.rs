mod config;
mod data_store;
mod errors;
mod schema_validation;
mod types;

pub use data_store::{
    DataStore, DataStoreConfig, DataStoreType, PostgresDataStore, SqliteDataStore,
};
pub use errors::StorageError;
pub use types::Page;

pub(crate) use config::{DB_TABLE_TRIPS, DB_TABLE_USERS, is_valid_table_name};
pub(crate) use schema_validation::{validate_postgres_table_schema, validate_sqlite_table_schema};
