use std::sync::Arc;

use tourvisto_auth::{AppwriteAccountClient, AuthCoordinator, IdentityProvider};

/// Produces an identity client acting for one caller
pub trait SessionBinder: Send + Sync {
    /// `secret` is the session cookie value, if the request carried one
    fn bind(&self, secret: Option<&str>) -> Arc<dyn IdentityProvider>;
}

impl SessionBinder for AppwriteAccountClient {
    fn bind(&self, secret: Option<&str>) -> Arc<dyn IdentityProvider> {
        match secret {
            Some(secret) => Arc::new(self.with_session(secret)),
            None => Arc::new(self.clone()),
        }
    }
}

/// Router state: the shared coordinator plus the per-request session binding
#[derive(Clone)]
pub struct AuthState {
    coordinator: AuthCoordinator,
    binder: Arc<dyn SessionBinder>,
}

impl AuthState {
    pub fn new(coordinator: AuthCoordinator, binder: Arc<dyn SessionBinder>) -> Self {
        Self {
            coordinator,
            binder,
        }
    }

    /// Coordinator whose identity client acts for the given session
    pub fn coordinator_for(&self, secret: Option<&str>) -> AuthCoordinator {
        self.coordinator.with_identity(self.binder.bind(secret))
    }
}
