use async_trait::async_trait;
use std::sync::Arc;

use crate::storage::{DB_TABLE_USERS, DataStore, Page, is_valid_table_name};
use crate::userdb::{
    errors::UserError,
    types::{NewUserRecord, UserDirectory, UserProfile, UserRecord},
};

use super::postgres::*;
use super::sqlite::*;

/// User directory backed by the configured SQL data store
#[derive(Clone)]
pub struct SqlUserDirectory {
    store: Arc<dyn DataStore>,
    table_name: String,
}

impl SqlUserDirectory {
    /// Uses the table named by `DB_TABLE_USERS` (default `tv_users`)
    pub fn new(store: Arc<dyn DataStore>) -> Result<Self, UserError> {
        Self::with_table(store, DB_TABLE_USERS.as_str())
    }

    pub fn with_table(store: Arc<dyn DataStore>, table_name: &str) -> Result<Self, UserError> {
        if !is_valid_table_name(table_name) {
            return Err(UserError::InvalidData(format!(
                "Invalid table name: {table_name}"
            )));
        }
        Ok(Self {
            store,
            table_name: table_name.to_string(),
        })
    }

    /// Create the users table if needed and check its columns
    pub async fn init(&self) -> Result<(), UserError> {
        let table = self.table_name.as_str();

        match (self.store.as_sqlite(), self.store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool, table).await?;
                validate_user_tables_sqlite(pool, table).await
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool, table).await?;
                validate_user_tables_postgres(pool, table).await
            }
            _ => Err(UserError::Storage("Unsupported database type".to_string())),
        }
    }
}

#[async_trait]
impl UserDirectory for SqlUserDirectory {
    #[tracing::instrument(skip(self), fields(user_id = %id))]
    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, UserError> {
        let table = self.table_name.as_str();

        if let Some(pool) = self.store.as_sqlite() {
            get_user_by_id_sqlite(pool, table, id).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_user_by_id_postgres(pool, table, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    #[tracing::instrument(skip(self), fields(account_id = %account_id))]
    async fn find_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Option<UserRecord>, UserError> {
        let table = self.table_name.as_str();

        let result = if let Some(pool) = self.store.as_sqlite() {
            get_user_by_account_id_sqlite(pool, table, account_id).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_user_by_account_id_postgres(pool, table, account_id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(Some(_)) => tracing::info!(found = true, "User lookup completed"),
            Ok(None) => tracing::info!(found = false, "User lookup completed - not found"),
            Err(e) => tracing::error!(error = %e, "User lookup failed"),
        }

        result
    }

    #[tracing::instrument(skip(self), fields(account_id = %account_id))]
    async fn find_profile_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Option<UserProfile>, UserError> {
        let table = self.table_name.as_str();

        if let Some(pool) = self.store.as_sqlite() {
            get_profile_by_account_id_sqlite(pool, table, account_id).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_profile_by_account_id_postgres(pool, table, account_id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    #[tracing::instrument(skip(self, user), fields(user_id = %user.id, account_id = %user.account_id))]
    async fn create(&self, user: NewUserRecord) -> Result<UserRecord, UserError> {
        let table = self.table_name.as_str();

        let result = if let Some(pool) = self.store.as_sqlite() {
            insert_user_sqlite(pool, table, user).await
        } else if let Some(pool) = self.store.as_postgres() {
            insert_user_postgres(pool, table, user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(user) => tracing::info!(
                sequence_number = user.sequence_number,
                "User record created"
            ),
            Err(UserError::Conflict(msg)) => {
                tracing::info!(reason = %msg, "User record already exists")
            }
            Err(e) => tracing::error!(error = %e, "User record creation failed"),
        }

        result
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Page<UserRecord>, UserError> {
        let table = self.table_name.as_str();

        if let Some(pool) = self.store.as_sqlite() {
            list_users_sqlite(pool, table, limit, offset).await
        } else if let Some(pool) = self.store.as_postgres() {
            list_users_postgres(pool, table, limit, offset).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteDataStore;

    async fn directory() -> SqlUserDirectory {
        let directory = SqlUserDirectory::with_table(Arc::new(SqliteDataStore::in_memory()), "users")
            .expect("valid table name");
        directory.init().await.expect("Failed to initialize users table");
        directory
    }

    fn new_user(n: usize) -> NewUserRecord {
        NewUserRecord::new(
            format!("user-{n}"),
            format!("acc-{n}"),
            format!("user{n}@example.com"),
            format!("User {n}"),
            None,
        )
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let directory = directory().await;
        assert!(directory.init().await.is_ok());
    }

    #[test]
    fn test_rejects_invalid_table_name() {
        let result = SqlUserDirectory::with_table(
            Arc::new(SqliteDataStore::in_memory()),
            "users; DROP TABLE users",
        );
        assert!(matches!(result, Err(UserError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_create_and_find_by_account_id() {
        let directory = directory().await;

        let mut new = new_user(1);
        new.image_url = Some("https://example.com/1.png".to_string());
        let created = directory.create(new.clone()).await.expect("create");

        assert_eq!(created.id, "user-1");
        assert_eq!(created.account_id, "acc-1");
        assert_eq!(created.image_url.as_deref(), Some("https://example.com/1.png"));
        assert_eq!(created.status, None);
        assert!(created.sequence_number.is_some());

        let found = directory
            .find_by_account_id("acc-1")
            .await
            .expect("lookup")
            .expect("record should exist");
        assert_eq!(found, created);
        assert_eq!(found.joined_at, new.joined_at);

        assert_eq!(directory.find_by_account_id("acc-2").await.expect("lookup"), None);
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let directory = directory().await;
        let created = directory.create(new_user(1)).await.expect("create");

        assert_eq!(
            directory.get_user("user-1").await.expect("lookup"),
            Some(created)
        );
        assert_eq!(directory.get_user("missing").await.expect("lookup"), None);
    }

    #[tokio::test]
    async fn test_find_profile_projection() {
        let directory = directory().await;
        let created = directory.create(new_user(3)).await.expect("create");

        let profile = directory
            .find_profile_by_account_id("acc-3")
            .await
            .expect("lookup")
            .expect("profile should exist");
        assert_eq!(profile, UserProfile::from(created));

        assert_eq!(
            directory
                .find_profile_by_account_id("acc-missing")
                .await
                .expect("lookup"),
            None
        );
    }

    #[tokio::test]
    async fn test_duplicate_account_id_is_conflict() {
        let directory = directory().await;
        directory.create(new_user(1)).await.expect("create");

        let mut duplicate = new_user(2);
        duplicate.account_id = "acc-1".to_string();
        let result = directory.create(duplicate).await;
        assert!(matches!(result, Err(UserError::Conflict(_))));

        let page = directory.list(10, 0).await.expect("list");
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_list_empty_directory() {
        let directory = directory().await;
        let page = directory.list(10, 0).await.expect("list");
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_list_pagination_in_insertion_order() {
        let directory = directory().await;
        for n in 0..7 {
            directory.create(new_user(n)).await.expect("create");
        }

        let first = directory.list(3, 0).await.expect("list");
        let ids: Vec<&str> = first.items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["user-0", "user-1", "user-2"]);
        assert_eq!(first.total, 7);

        let last = directory.list(3, 6).await.expect("list");
        let ids: Vec<&str> = last.items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["user-6"]);
        assert_eq!(last.total, 7);

        let beyond = directory.list(3, 20).await.expect("list");
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 7);
    }

    #[tokio::test]
    async fn test_status_is_read_back() {
        let directory = directory().await;
        directory.create(new_user(1)).await.expect("create");

        let pool = directory.store.as_sqlite().expect("sqlite pool");
        sqlx::query("UPDATE users SET status = 'admin' WHERE account_id = 'acc-1'")
            .execute(pool)
            .await
            .expect("provision role");

        let found = directory
            .find_by_account_id("acc-1")
            .await
            .expect("lookup")
            .expect("record should exist");
        assert!(found.is_admin());
    }
}
