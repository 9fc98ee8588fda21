//! Fakes for the injected collaborators and a local HTTP mock server

use async_trait::async_trait;
use axum::Router;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::config::AuthConfig;
use crate::coordination::AuthCoordinator;
use crate::identity::{Account, IdentityError, IdentityProvider, OAuthProvider, ProviderSession};
use crate::profile::ProfileProvider;
use crate::storage::Page;
use crate::trips::{NewTrip, Trip, TripError, TripStore};
use crate::userdb::{NewUserRecord, UserDirectory, UserError, UserProfile, UserRecord};

/// Serve `router` on an ephemeral local port and return its base URL
pub(crate) async fn spawn_mock_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    format!("http://{addr}")
}

pub(crate) fn test_config() -> AuthConfig {
    AuthConfig::new("http://localhost:5173").expect("valid origin")
}

pub(crate) struct FakeIdentityProvider {
    account: Result<Account, IdentityError>,
    session: Result<ProviderSession, IdentityError>,
    delete_result: Result<(), IdentityError>,
    pub(crate) account_calls: AtomicUsize,
    pub(crate) deleted: AtomicUsize,
}

impl FakeIdentityProvider {
    pub(crate) fn signed_in(account_id: &str, token: Option<&str>) -> Self {
        Self {
            account: Ok(Account {
                id: account_id.to_string(),
                email: format!("{account_id}@example.com"),
                name: format!("Traveler {account_id}"),
            }),
            session: Ok(ProviderSession {
                id: "current".to_string(),
                provider: "google".to_string(),
                provider_access_token: token.map(str::to_string),
            }),
            delete_result: Ok(()),
            account_calls: AtomicUsize::new(0),
            deleted: AtomicUsize::new(0),
        }
    }

    pub(crate) fn signed_out() -> Self {
        Self::failing(IdentityError::NoSession)
    }

    pub(crate) fn failing(err: IdentityError) -> Self {
        Self {
            account: Err(err.clone()),
            session: Err(err.clone()),
            delete_result: Err(err),
            account_calls: AtomicUsize::new(0),
            deleted: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_session_error(mut self, err: IdentityError) -> Self {
        self.session = Err(err);
        self
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn get_current_account(&self) -> Result<Account, IdentityError> {
        self.account_calls.fetch_add(1, Ordering::SeqCst);
        self.account.clone()
    }

    async fn get_current_session(&self) -> Result<ProviderSession, IdentityError> {
        self.session.clone()
    }

    async fn create_oauth2_session(
        &self,
        provider: OAuthProvider,
        success_url: &str,
        failure_url: &str,
    ) -> Result<String, IdentityError> {
        Ok(format!(
            "https://idp.example.com/oauth2/{provider}?success={success_url}&failure={failure_url}"
        ))
    }

    async fn delete_current_session(&self) -> Result<(), IdentityError> {
        self.deleted.fetch_add(1, Ordering::SeqCst);
        self.delete_result.clone()
    }
}

/// Returns a fixed avatar and records the tokens it was given
pub(crate) struct StaticProfileProvider {
    avatar: Option<String>,
    pub(crate) tokens: Mutex<Vec<String>>,
}

impl StaticProfileProvider {
    pub(crate) fn new(avatar: Option<&str>) -> Self {
        Self {
            avatar: avatar.map(str::to_string),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn seen_tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileProvider for StaticProfileProvider {
    async fn fetch_avatar(&self, access_token: &str) -> Option<String> {
        self.tokens.lock().unwrap().push(access_token.to_string());
        self.avatar.clone()
    }
}

#[derive(Default)]
pub(crate) struct MemoryUserDirectory {
    records: Mutex<Vec<UserRecord>>,
    fail: bool,
    /// Lookups never see stored records, as if another request created them concurrently
    stale_reads: bool,
    pub(crate) creates: AtomicUsize,
}

impl MemoryUserDirectory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_stale_reads() -> Self {
        Self {
            stale_reads: true,
            ..Self::default()
        }
    }

    pub(crate) fn records(&self) -> Vec<UserRecord> {
        self.records.lock().unwrap().clone()
    }

    pub(crate) fn insert(&self, record: UserRecord) {
        self.records.lock().unwrap().push(record);
    }

    fn check(&self) -> Result<(), UserError> {
        if self.fail {
            return Err(UserError::Storage("directory unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, UserError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Option<UserRecord>, UserError> {
        self.check()?;
        if self.stale_reads {
            return Ok(None);
        }
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.account_id == account_id).cloned())
    }

    async fn find_profile_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Option<UserProfile>, UserError> {
        Ok(self
            .find_by_account_id(account_id)
            .await?
            .map(UserProfile::from))
    }

    async fn create(&self, user: NewUserRecord) -> Result<UserRecord, UserError> {
        self.check()?;
        self.creates.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        if records
            .iter()
            .any(|r| r.account_id == user.account_id || r.id == user.id)
        {
            return Err(UserError::Conflict("UNIQUE constraint failed".to_string()));
        }
        let sequence_number = Some(records.len() as i64 + 1);
        let record = user.into_record(sequence_number);
        records.push(record.clone());
        Ok(record)
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Page<UserRecord>, UserError> {
        self.check()?;
        let records = self.records.lock().unwrap();
        let items = records
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(Page {
            items,
            total: records.len() as u64,
        })
    }
}

#[derive(Default)]
pub(crate) struct MemoryTripStore {
    trips: Mutex<Vec<Trip>>,
    fail: bool,
}

impl MemoryTripStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), TripError> {
        if self.fail {
            return Err(TripError::Storage("trip store unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TripStore for MemoryTripStore {
    async fn insert(&self, trip: NewTrip) -> Result<Trip, TripError> {
        self.check()?;
        let trip = trip.into_trip();
        self.trips.lock().unwrap().push(trip.clone());
        Ok(trip)
    }

    async fn list(&self, limit: u32, offset: u32) -> Result<Page<Trip>, TripError> {
        self.check()?;
        let mut trips = self.trips.lock().unwrap().clone();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = trips.len() as u64;
        let items = trips
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok(Page { items, total })
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Trip>, TripError> {
        self.check()?;
        let trips = self.trips.lock().unwrap();
        Ok(trips.iter().find(|t| t.id == id).cloned())
    }
}

/// Handles to the fakes behind a coordinator, for assertions
pub(crate) struct Harness {
    pub(crate) coordinator: AuthCoordinator,
    pub(crate) identity: Arc<FakeIdentityProvider>,
    pub(crate) profiles: Arc<StaticProfileProvider>,
    pub(crate) users: Arc<MemoryUserDirectory>,
    pub(crate) trips: Arc<MemoryTripStore>,
}

impl Harness {
    pub(crate) fn new(
        identity: FakeIdentityProvider,
        profiles: StaticProfileProvider,
        users: MemoryUserDirectory,
        trips: MemoryTripStore,
    ) -> Self {
        let identity = Arc::new(identity);
        let profiles = Arc::new(profiles);
        let users = Arc::new(users);
        let trips = Arc::new(trips);
        let coordinator = AuthCoordinator::new(
            identity.clone(),
            profiles.clone(),
            users.clone(),
            trips.clone(),
            test_config(),
        );
        Self {
            coordinator,
            identity,
            profiles,
            users,
            trips,
        }
    }

    pub(crate) fn with_identity(identity: FakeIdentityProvider) -> Self {
        Self::new(
            identity,
            StaticProfileProvider::new(Some("https://lh3.example.com/avatar.png")),
            MemoryUserDirectory::new(),
            MemoryTripStore::new(),
        )
    }
}
