use std::sync::Arc;

use crate::config::AuthConfig;
use crate::identity::IdentityProvider;
use crate::profile::ProfileProvider;
use crate::trips::TripStore;
use crate::userdb::UserDirectory;

/// Entry point for the session loaders, holding every collaborator it calls
///
/// Nothing here is global; build one per application and rebind the identity
/// client per request with [`AuthCoordinator::with_identity`].
#[derive(Clone)]
pub struct AuthCoordinator {
    pub(super) identity: Arc<dyn IdentityProvider>,
    pub(super) profiles: Arc<dyn ProfileProvider>,
    pub(super) users: Arc<dyn UserDirectory>,
    pub(super) trips: Arc<dyn TripStore>,
    pub(super) config: AuthConfig,
}

impl AuthCoordinator {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfileProvider>,
        users: Arc<dyn UserDirectory>,
        trips: Arc<dyn TripStore>,
        config: AuthConfig,
    ) -> Self {
        Self {
            identity,
            profiles,
            users,
            trips,
            config,
        }
    }

    /// Same collaborators, different identity client
    pub fn with_identity(&self, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            identity,
            ..self.clone()
        }
    }
}
