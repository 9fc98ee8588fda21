use sqlx::{Pool, Postgres, types::Json};

use crate::storage::{Page, validate_postgres_table_schema};
use crate::trips::{
    errors::TripError,
    types::{NewTrip, Trip, TripRow},
};

pub(super) async fn create_tables_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
) -> Result<(), TripError> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id TEXT PRIMARY KEY NOT NULL,
            trip_detail JSONB NOT NULL,
            image_urls JSONB NOT NULL,
            payment_link TEXT,
            user_id TEXT,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_{table_name}_created_at ON {table_name}(created_at)"
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn validate_trip_tables_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
) -> Result<(), TripError> {
    let expected_columns = [
        ("id", "text"),
        ("trip_detail", "jsonb"),
        ("image_urls", "jsonb"),
        ("payment_link", "text"),
        ("user_id", "text"),
        ("created_at", "timestamp with time zone"),
    ];

    validate_postgres_table_schema(pool, table_name, &expected_columns, TripError::Storage).await
}

pub(super) async fn insert_trip_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    trip: NewTrip,
) -> Result<Trip, TripError> {
    let row = sqlx::query_as::<_, TripRow>(&format!(
        r#"
        INSERT INTO {table_name} (id, trip_detail, image_urls, payment_link, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#
    ))
    .bind(&trip.id)
    .bind(Json(&trip.trip_detail))
    .bind(Json(&trip.image_urls))
    .bind(&trip.payment_link)
    .bind(&trip.user_id)
    .bind(trip.created_at)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

pub(super) async fn list_trips_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    limit: u32,
    offset: u32,
) -> Result<Page<Trip>, TripError> {
    let rows = sqlx::query_as::<_, TripRow>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY created_at DESC, id ASC LIMIT $1 OFFSET $2
        "#
    ))
    .bind(i64::from(limit))
    .bind(i64::from(offset))
    .fetch_all(pool)
    .await?;

    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table_name}"))
        .fetch_one(pool)
        .await?;

    Ok(Page::from_count(
        rows.into_iter().map(Trip::from).collect(),
        total,
    ))
}

pub(super) async fn get_trip_by_id_postgres(
    pool: &Pool<Postgres>,
    table_name: &str,
    id: &str,
) -> Result<Option<Trip>, TripError> {
    let row = sqlx::query_as::<_, TripRow>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Trip::from))
}
