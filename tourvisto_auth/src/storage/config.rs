//! Database table configuration

use std::{env, sync::LazyLock};

/// Table prefix from environment variable
pub(crate) static DB_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "tv_".to_string()));

/// Users table name
pub(crate) static DB_TABLE_USERS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_USERS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "users"))
});

/// Trips table name
pub(crate) static DB_TABLE_TRIPS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_TRIPS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "trips"))
});

/// Table names are interpolated into SQL, so only plain identifiers are accepted
pub(crate) fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 63
        && name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_names() {
        assert!(is_valid_table_name("tv_users"));
        assert!(is_valid_table_name("_trips2"));
    }

    #[test]
    fn test_invalid_table_names() {
        assert!(!is_valid_table_name(""));
        assert!(!is_valid_table_name("2users"));
        assert!(!is_valid_table_name("users; DROP TABLE users"));
        assert!(!is_valid_table_name("tv-users"));
        assert!(!is_valid_table_name(&"a".repeat(64)));
    }
}
