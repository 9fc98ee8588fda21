use sqlx::{Pool, Postgres, Row, Sqlite};

fn compare_columns<E>(
    table_name: &str,
    actual_columns: &[(String, String)],
    expected_columns: &[(&str, &str)],
    error_mapper: &impl Fn(String) -> E,
) -> Result<(), E> {
    if actual_columns.is_empty() {
        return Err(error_mapper(format!(
            "Schema validation failed: Table '{table_name}' does not exist"
        )));
    }

    for (expected_name, expected_type) in expected_columns {
        match actual_columns.iter().find(|(name, _)| name == expected_name) {
            Some((_, actual_type)) if actual_type.eq_ignore_ascii_case(expected_type) => {}
            Some((_, actual_type)) => {
                return Err(error_mapper(format!(
                    "Schema validation failed: Column '{expected_name}' in '{table_name}' has type '{actual_type}' but expected '{expected_type}'"
                )));
            }
            None => {
                return Err(error_mapper(format!(
                    "Schema validation failed: Missing column '{expected_name}' in '{table_name}'"
                )));
            }
        }
    }

    Ok(())
}

/// Validates that a SQLite table has the expected columns and declared types
pub(crate) async fn validate_sqlite_table_schema<E>(
    pool: &Pool<Sqlite>,
    table_name: &str,
    expected_columns: &[(&str, &str)],
    error_mapper: impl Fn(String) -> E,
) -> Result<(), E> {
    let rows = sqlx::query(&format!("PRAGMA table_info({table_name})"))
        .fetch_all(pool)
        .await
        .map_err(|e| error_mapper(e.to_string()))?;

    let actual_columns: Vec<(String, String)> = rows
        .iter()
        .map(|row| (row.get::<String, _>("name"), row.get::<String, _>("type")))
        .collect();

    compare_columns(table_name, &actual_columns, expected_columns, &error_mapper)
}

/// Validates that a PostgreSQL table has the expected columns and data types
pub(crate) async fn validate_postgres_table_schema<E>(
    pool: &Pool<Postgres>,
    table_name: &str,
    expected_columns: &[(&str, &str)],
    error_mapper: impl Fn(String) -> E,
) -> Result<(), E> {
    let rows = sqlx::query(
        "SELECT column_name, data_type FROM information_schema.columns
         WHERE table_name = $1 ORDER BY column_name",
    )
    .bind(table_name)
    .fetch_all(pool)
    .await
    .map_err(|e| error_mapper(e.to_string()))?;

    let actual_columns: Vec<(String, String)> = rows
        .iter()
        .map(|row| {
            (
                row.get::<String, _>("column_name"),
                row.get::<String, _>("data_type"),
            )
        })
        .collect();

    compare_columns(table_name, &actual_columns, expected_columns, &error_mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteDataStore;
    use crate::storage::DataStore;

    #[tokio::test]
    async fn test_sqlite_schema_validation() {
        let store = SqliteDataStore::in_memory();
        let pool = store.as_sqlite().expect("sqlite pool");
        sqlx::query("CREATE TABLE things (id TEXT NOT NULL, created_at TIMESTAMP NOT NULL)")
            .execute(pool)
            .await
            .expect("create table");

        let ok = validate_sqlite_table_schema(
            pool,
            "things",
            &[("id", "TEXT"), ("created_at", "TIMESTAMP")],
            |e| e,
        )
        .await;
        assert!(ok.is_ok());

        let wrong_type =
            validate_sqlite_table_schema(pool, "things", &[("id", "INTEGER")], |e| e).await;
        assert!(wrong_type.is_err_and(|e| e.contains("has type 'TEXT'")));

        let missing =
            validate_sqlite_table_schema(pool, "things", &[("name", "TEXT")], |e| e).await;
        assert!(missing.is_err_and(|e| e.contains("Missing column 'name'")));

        let no_table = validate_sqlite_table_schema(pool, "nothing", &[("id", "TEXT")], |e| e).await;
        assert!(no_table.is_err_and(|e| e.contains("does not exist")));
    }
}
