use async_trait::async_trait;
use std::sync::Arc;

use crate::storage::{DB_TABLE_TRIPS, DataStore, Page, is_valid_table_name};
use crate::trips::{
    errors::TripError,
    types::{NewTrip, Trip, TripStore},
};

use super::postgres::*;
use super::sqlite::*;

#[derive(Clone)]
pub struct SqlTripStore {
    store: Arc<dyn DataStore>,
    table_name: String,
}

impl SqlTripStore {
    /// Uses the table named by `DB_TABLE_TRIPS` (default `tv_trips`)
    pub fn new(store: Arc<dyn DataStore>) -> Result<Self, TripError> {
        Self::with_table(store, DB_TABLE_TRIPS.as_str())
    }

    pub fn with_table(store: Arc<dyn DataStore>, table_name: &str) -> Result<Self, TripError> {
        if !is_valid_table_name(table_name) {
            return Err(TripError::InvalidData(format!(
                "Invalid table name: {table_name}"
            )));
        }
        Ok(Self {
            store,
            table_name: table_name.to_string(),
        })
    }

    pub async fn init(&self) -> Result<(), TripError> {
        let table = self.table_name.as_str();

        match (self.store.as_sqlite(), self.store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool, table).await?;
                validate_trip_tables_sqlite(pool, table).await
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool, table).await?;
                validate_trip_tables_postgres(pool, table).await
            }
            _ => Err(TripError::Storage("Unsupported database type".to_string())),
        }
    }
}

#[async_trait]
impl TripStore for SqlTripStore {
    #[tracing::instrument(skip(self, trip), fields(trip_id = %trip.id))]
    async fn insert(&self, trip: NewTrip) -> Result<Trip, TripError> {
        let table = self.table_name.as_str();

        if let Some(pool) = self.store.as_sqlite() {
            insert_trip_sqlite(pool, table, trip).await
        } else if let Some(pool) = self.store.as_postgres() {
            insert_trip_postgres(pool, table, trip).await
        } else {
            Err(TripError::Storage("Unsupported database type".to_string()))
        }
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Page<Trip>, TripError> {
        let table = self.table_name.as_str();

        if let Some(pool) = self.store.as_sqlite() {
            list_trips_sqlite(pool, table, limit, offset).await
        } else if let Some(pool) = self.store.as_postgres() {
            list_trips_postgres(pool, table, limit, offset).await
        } else {
            Err(TripError::Storage("Unsupported database type".to_string()))
        }
    }

    #[tracing::instrument(skip(self), fields(trip_id = %id))]
    async fn get_by_id(&self, id: &str) -> Result<Option<Trip>, TripError> {
        let table = self.table_name.as_str();

        let result = if let Some(pool) = self.store.as_sqlite() {
            get_trip_by_id_sqlite(pool, table, id).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_trip_by_id_postgres(pool, table, id).await
        } else {
            Err(TripError::Storage("Unsupported database type".to_string()))
        };

        if let Ok(None) = &result {
            tracing::debug!("Trip not found");
        }

        result
    }
}
