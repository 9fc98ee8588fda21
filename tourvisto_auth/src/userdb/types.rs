use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::storage::Page;

use super::errors::UserError;

/// Application-level user record, one per identity provider account
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Database-assigned sequence number, gives the insertion order; kept out of JSON
    #[serde(default, skip_serializing)]
    pub sequence_number: Option<i64>,
    pub id: String,
    /// Identity provider account id, unique across the directory
    pub account_id: String,
    pub email: String,
    pub name: String,
    pub image_url: Option<String>,
    pub joined_at: DateTime<Utc>,
    /// Role marker provisioned outside this crate
    pub status: Option<String>,
}

/// Fields written when a record is first created
///
/// Records are write-once: nothing here is updated after the insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserRecord {
    pub id: String,
    pub account_id: String,
    pub email: String,
    pub name: String,
    pub image_url: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl NewUserRecord {
    pub fn new(
        id: String,
        account_id: String,
        email: String,
        name: String,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            account_id,
            email,
            name,
            image_url,
            joined_at: Utc::now(),
        }
    }

    /// The record as stored; the role is left unset
    pub fn into_record(self, sequence_number: Option<i64>) -> UserRecord {
        UserRecord {
            sequence_number,
            id: self.id,
            account_id: self.account_id,
            email: self.email,
            name: self.name,
            image_url: self.image_url,
            joined_at: self.joined_at,
            status: None,
        }
    }
}

/// The projection served to the signed-in user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub account_id: String,
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        Self {
            name: record.name,
            email: record.email,
            image_url: record.image_url,
            joined_at: record.joined_at,
            account_id: record.account_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Admin,
    User,
    Guest,
}

impl UserStatus {
    /// Unknown or missing markers fall back to `Guest`
    pub fn parse(status: Option<&str>) -> Self {
        match status.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("admin") => Self::Admin,
            Some(s) if s.eq_ignore_ascii_case("user") => Self::User,
            _ => Self::Guest,
        }
    }
}

impl UserRecord {
    pub fn role(&self) -> UserStatus {
        UserStatus::parse(self.status.as_deref())
    }

    pub fn is_admin(&self) -> bool {
        self.role() == UserStatus::Admin
    }
}

/// Persisted collection of user records
///
/// Lookups return `Ok(None)` for a missing record; `Err` is reserved for the
/// store itself failing.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, UserError>;

    async fn find_by_account_id(&self, account_id: &str)
    -> Result<Option<UserRecord>, UserError>;

    /// Same lookup as `find_by_account_id`, reading only the profile columns
    async fn find_profile_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Option<UserProfile>, UserError>;

    /// Fails with `UserError::Conflict` if the id or account id is taken
    async fn create(&self, user: NewUserRecord) -> Result<UserRecord, UserError>;

    /// Records in insertion order
    async fn list(&self, limit: u32, offset: u32) -> Result<Page<UserRecord>, UserError>;
}
