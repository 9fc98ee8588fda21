use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::IdentityError;

/// The identity provider's answer to "who am I"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// The session record backing the current login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSession {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub provider: String,
    /// Access token issued by the upstream OAuth2 provider, empty for password sessions
    #[serde(default)]
    pub provider_access_token: Option<String>,
}

impl ProviderSession {
    pub fn access_token(&self) -> Option<&str> {
        self.provider_access_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account service the reconciler talks to
///
/// Implementations are bound to one caller's session, so a fresh instance is
/// usually created per request.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns `IdentityError::NoSession` when nobody is signed in
    async fn get_current_account(&self) -> Result<Account, IdentityError>;

    async fn get_current_session(&self) -> Result<ProviderSession, IdentityError>;

    /// Returns the URL the browser must visit to start the OAuth2 login
    async fn create_oauth2_session(
        &self,
        provider: OAuthProvider,
        success_url: &str,
        failure_url: &str,
    ) -> Result<String, IdentityError>;

    async fn delete_current_session(&self) -> Result<(), IdentityError>;
}
