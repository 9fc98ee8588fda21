use sqlx::{Pool, Sqlite};

use crate::storage::{Page, validate_sqlite_table_schema};
use crate::userdb::{
    errors::UserError,
    types::{NewUserRecord, UserProfile, UserRecord},
};

pub(super) async fn create_tables_sqlite(
    pool: &Pool<Sqlite>,
    table_name: &str,
) -> Result<(), UserError> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            sequence_number INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            account_id TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL,
            name TEXT NOT NULL,
            image_url TEXT,
            joined_at TIMESTAMP NOT NULL,
            status TEXT
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn validate_user_tables_sqlite(
    pool: &Pool<Sqlite>,
    table_name: &str,
) -> Result<(), UserError> {
    let expected_columns = [
        ("sequence_number", "INTEGER"),
        ("id", "TEXT"),
        ("account_id", "TEXT"),
        ("email", "TEXT"),
        ("name", "TEXT"),
        ("image_url", "TEXT"),
        ("joined_at", "TIMESTAMP"),
        ("status", "TEXT"),
    ];

    validate_sqlite_table_schema(pool, table_name, &expected_columns, UserError::Storage).await
}

pub(super) async fn get_user_by_id_sqlite(
    pool: &Pool<Sqlite>,
    table_name: &str,
    id: &str,
) -> Result<Option<UserRecord>, UserError> {
    Ok(sqlx::query_as::<_, UserRecord>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn get_user_by_account_id_sqlite(
    pool: &Pool<Sqlite>,
    table_name: &str,
    account_id: &str,
) -> Result<Option<UserRecord>, UserError> {
    Ok(sqlx::query_as::<_, UserRecord>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE account_id = ? LIMIT 1
        "#
    ))
    .bind(account_id)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn get_profile_by_account_id_sqlite(
    pool: &Pool<Sqlite>,
    table_name: &str,
    account_id: &str,
) -> Result<Option<UserProfile>, UserError> {
    Ok(sqlx::query_as::<_, UserProfile>(&format!(
        r#"
        SELECT name, email, image_url, joined_at, account_id
        FROM {table_name} WHERE account_id = ? LIMIT 1
        "#
    ))
    .bind(account_id)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn insert_user_sqlite(
    pool: &Pool<Sqlite>,
    table_name: &str,
    user: NewUserRecord,
) -> Result<UserRecord, UserError> {
    Ok(sqlx::query_as::<_, UserRecord>(&format!(
        r#"
        INSERT INTO {table_name} (id, account_id, email, name, image_url, joined_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING *
        "#
    ))
    .bind(&user.id)
    .bind(&user.account_id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.image_url)
    .bind(user.joined_at)
    .fetch_one(pool)
    .await?)
}

pub(super) async fn list_users_sqlite(
    pool: &Pool<Sqlite>,
    table_name: &str,
    limit: u32,
    offset: u32,
) -> Result<Page<UserRecord>, UserError> {
    let users = sqlx::query_as::<_, UserRecord>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY sequence_number ASC LIMIT ? OFFSET ?
        "#
    ))
    .bind(i64::from(limit))
    .bind(i64::from(offset))
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table_name}"))
        .fetch_one(pool)
        .await?;

    Ok(Page::from_count(users, total))
}
