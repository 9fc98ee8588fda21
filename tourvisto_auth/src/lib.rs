//! tourvisto_auth - session reconciliation for the Tourvisto travel client
//!
//! Authenticates the caller against an Appwrite-style identity provider,
//! keeps one local user record per provider account, and serves paginated
//! reads of users and trips.

mod config;
mod coordination;
mod identity;
mod profile;
mod storage;
mod trips;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

pub use config::{AuthConfig, ConfigError, DEFAULT_SIGN_IN_ROUTE};

pub use coordination::{
    AuthCoordinator, CoordinationError, LoaderOutcome, Reconciled, RedirectSignal,
};

pub use identity::{
    Account, AppwriteAccountClient, AppwriteConfig, IdentityError, IdentityProvider,
    OAuthProvider, ProviderSession,
};

pub use profile::{GooglePeopleClient, ProfileError, ProfileProvider};

pub use storage::{
    DataStore, DataStoreConfig, DataStoreType, Page, PostgresDataStore, SqliteDataStore,
    StorageError,
};

pub use trips::{NewTrip, SqlTripStore, Trip, TripError, TripStore};

pub use userdb::{
    NewUserRecord, SqlUserDirectory, UserDirectory, UserError, UserProfile, UserRecord,
    UserStatus,
};

pub use utils::UtilError;

/// Create and validate the user and trip tables on `store`
pub async fn init(
    store: Arc<dyn DataStore>,
) -> Result<(SqlUserDirectory, SqlTripStore), Box<dyn std::error::Error + Send + Sync>> {
    let users = SqlUserDirectory::new(store.clone())?;
    users.init().await?;

    let trips = SqlTripStore::new(store)?;
    trips.init().await?;

    Ok((users, trips))
}
