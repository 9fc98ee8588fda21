use crate::identity::{Account, IdentityError, OAuthProvider};
use crate::userdb::{NewUserRecord, UserError, UserProfile, UserRecord};

use super::coordinator::AuthCoordinator;
use super::errors::CoordinationError;
use super::outcome::{LoaderOutcome, Reconciled, RedirectSignal};
use super::user::gen_new_user_id;

impl AuthCoordinator {
    /// Make sure the signed-in account has a user record
    ///
    /// Without a session this redirects to sign-in and touches nothing else.
    /// Failures after the session check are logged and reported as
    /// `Unavailable`; they never propagate.
    #[tracing::instrument(skip(self))]
    pub async fn reconcile_and_store(&self) -> LoaderOutcome<Reconciled> {
        let account = match self.current_account().await {
            Ok(account) => account,
            Err(outcome) => return outcome,
        };

        match self.store_account(&account).await {
            Ok(reconciled) => LoaderOutcome::Ready(reconciled),
            Err(err) => LoaderOutcome::Unavailable(err),
        }
    }

    /// Profile of the signed-in user
    ///
    /// A session without a stored record redirects to sign-in as well.
    #[tracing::instrument(skip(self))]
    pub async fn get_current_user(&self) -> LoaderOutcome<UserProfile> {
        let account = match self.current_account().await {
            Ok(account) => account,
            Err(outcome) => return outcome,
        };

        match self.users.find_profile_by_account_id(&account.id).await {
            Ok(Some(profile)) => LoaderOutcome::Ready(profile),
            Ok(None) => {
                tracing::info!(account_id = %account.id, "Signed in without a user record");
                self.config.sign_in_redirect().into()
            }
            Err(err) => LoaderOutcome::Unavailable(err.into()),
        }
    }

    /// Full stored record of the signed-in user, used to gate dashboard reads
    ///
    /// Redirects to sign-in like [`Self::get_current_user`] when there is no
    /// session or no record.
    #[tracing::instrument(skip(self))]
    pub async fn current_user_record(&self) -> LoaderOutcome<UserRecord> {
        let account = match self.current_account().await {
            Ok(account) => account,
            Err(outcome) => return outcome,
        };

        match self.users.find_by_account_id(&account.id).await {
            Ok(Some(record)) => LoaderOutcome::Ready(record),
            Ok(None) => {
                tracing::info!(account_id = %account.id, "Signed in without a user record");
                self.config.sign_in_redirect().into()
            }
            Err(err) => LoaderOutcome::Unavailable(err.into()),
        }
    }

    /// URL that starts the Google OAuth2 login at the identity provider
    pub async fn login_with_google(&self) -> LoaderOutcome<String> {
        match self
            .identity
            .create_oauth2_session(
                OAuthProvider::Google,
                &self.config.oauth_success_url(),
                &self.config.oauth_failure_url(),
            )
            .await
        {
            Ok(url) => LoaderOutcome::Ready(url),
            Err(err) => LoaderOutcome::Unavailable(err.into()),
        }
    }

    /// End the current session; the caller always lands on sign-in
    pub async fn logout(&self) -> RedirectSignal {
        match self.identity.delete_current_session().await {
            Ok(()) => tracing::info!("Session deleted"),
            Err(IdentityError::NoSession) => tracing::debug!("Logout without an active session"),
            Err(err) => {
                CoordinationError::IdentityError(err).log();
            }
        }
        self.config.sign_in_redirect()
    }

    async fn current_account<T>(&self) -> Result<Account, LoaderOutcome<T>> {
        match self.identity.get_current_account().await {
            Ok(account) => Ok(account),
            Err(IdentityError::NoSession) => {
                tracing::debug!("No active session, redirecting to sign-in");
                Err(self.config.sign_in_redirect().into())
            }
            Err(err) => Err(LoaderOutcome::Unavailable(err.into())),
        }
    }

    async fn store_account(&self, account: &Account) -> Result<Reconciled, CoordinationError> {
        let image_url = self.fetch_image_url().await;

        if self.users.find_by_account_id(&account.id).await?.is_some() {
            tracing::debug!(account_id = %account.id, "User record already stored");
            return Ok(Reconciled::AlreadyStored {
                account_id: account.id.clone(),
            });
        }

        let new_user = NewUserRecord::new(
            gen_new_user_id(self.users.as_ref()).await?,
            account.id.clone(),
            account.email.clone(),
            account.name.clone(),
            image_url,
        );

        match self.users.create(new_user).await {
            Ok(record) => {
                tracing::info!(user_id = %record.id, account_id = %record.account_id, "Created user record");
                Ok(Reconciled::Created(record))
            }
            Err(UserError::Conflict(msg)) => {
                tracing::info!(account_id = %account.id, reason = %msg, "User record created concurrently");
                Ok(Reconciled::AlreadyStored {
                    account_id: account.id.clone(),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Avatar from the provider access token; any failure yields `None`
    async fn fetch_image_url(&self) -> Option<String> {
        let session = match self.identity.get_current_session().await {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "Could not read the current session token");
                return None;
            }
        };

        match session.access_token() {
            Some(token) => self.profiles.fetch_avatar(token).await,
            None => {
                tracing::debug!(provider = %session.provider, "Session has no provider access token");
                None
            }
        }
    }
}
