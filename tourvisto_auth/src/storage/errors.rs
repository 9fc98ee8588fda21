use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error, Clone)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unsupported store type: {0}. Supported types are 'sqlite' and 'postgres'")]
    UnsupportedStore(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::Storage("Connection failed".to_string());
        assert_eq!(error.to_string(), "Storage error: Connection failed");

        let error = StorageError::UnsupportedStore("mongodb".to_string());
        assert_eq!(
            error.to_string(),
            "Unsupported store type: mongodb. Supported types are 'sqlite' and 'postgres'"
        );
    }

    #[test]
    fn test_from_sqlx_error() {
        let error = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, StorageError::Storage(msg) if msg.contains("no rows")));
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<StorageError>();
    }
}
