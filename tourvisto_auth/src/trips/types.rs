use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

use crate::storage::Page;

use super::errors::TripError;

/// A generated trip as served to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    /// Itinerary document, stored opaque
    pub trip_detail: serde_json::Value,
    pub image_urls: Vec<String>,
    pub payment_link: Option<String>,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub(super) struct TripRow {
    pub(super) id: String,
    pub(super) trip_detail: Json<serde_json::Value>,
    pub(super) image_urls: Json<Vec<String>>,
    pub(super) payment_link: Option<String>,
    pub(super) user_id: Option<String>,
    pub(super) created_at: DateTime<Utc>,
}

impl From<TripRow> for Trip {
    fn from(row: TripRow) -> Self {
        Self {
            id: row.id,
            trip_detail: row.trip_detail.0,
            image_urls: row.image_urls.0,
            payment_link: row.payment_link,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

/// Trip to insert, timestamped at construction
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub id: String,
    pub trip_detail: serde_json::Value,
    pub image_urls: Vec<String>,
    pub payment_link: Option<String>,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewTrip {
    pub fn new(id: impl Into<String>, trip_detail: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            trip_detail,
            image_urls: Vec::new(),
            payment_link: None,
            user_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_image_urls(mut self, image_urls: Vec<String>) -> Self {
        self.image_urls = image_urls;
        self
    }

    pub fn with_payment_link(mut self, payment_link: impl Into<String>) -> Self {
        self.payment_link = Some(payment_link.into());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn into_trip(self) -> Trip {
        Trip {
            id: self.id,
            trip_detail: self.trip_detail,
            image_urls: self.image_urls,
            payment_link: self.payment_link,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}

/// Persisted trip collection, read-only for the session workflow
#[async_trait]
pub trait TripStore: Send + Sync {
    async fn insert(&self, trip: NewTrip) -> Result<Trip, TripError>;

    /// Newest trips first
    async fn list(&self, limit: u32, offset: u32) -> Result<Page<Trip>, TripError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Trip>, TripError>;
}
