//! Central configuration for the tourvisto_auth crate

use std::env;
use thiserror::Error;
use url::Url;

use crate::coordination::RedirectSignal;

/// Route the client is sent to whenever a loader needs an authenticated user
pub const DEFAULT_SIGN_IN_ROUTE: &str = "/sign-in";

const DEFAULT_OAUTH_SUCCESS_PATH: &str = "/";
const DEFAULT_OAUTH_FAILURE_PATH: &str = "/404";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

pub(crate) fn required_env(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

pub(crate) fn parse_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

/// Where the web client lives and where the auth flows send it
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Public origin of the web client, without a trailing slash
    pub origin: String,
    pub sign_in_route: String,
    /// Path the identity provider returns to after a successful OAuth2 login
    pub oauth_success_path: String,
    /// Path the identity provider returns to after a failed OAuth2 login
    pub oauth_failure_path: String,
}

impl AuthConfig {
    pub fn new(origin: &str) -> Result<Self, ConfigError> {
        let parsed = parse_url("ORIGIN", origin)?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::Invalid {
                name: "ORIGIN",
                reason: format!("'{origin}' is not an http(s) origin"),
            });
        }

        Ok(Self {
            origin: origin.trim_end_matches('/').to_string(),
            sign_in_route: DEFAULT_SIGN_IN_ROUTE.to_string(),
            oauth_success_path: DEFAULT_OAUTH_SUCCESS_PATH.to_string(),
            oauth_failure_path: DEFAULT_OAUTH_FAILURE_PATH.to_string(),
        })
    }

    /// Reads `ORIGIN` (required) and `TOURVISTO_SIGN_IN_ROUTE` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(&required_env("ORIGIN")?)?;
        if let Ok(route) = env::var("TOURVISTO_SIGN_IN_ROUTE") {
            if !route.starts_with('/') {
                return Err(ConfigError::Invalid {
                    name: "TOURVISTO_SIGN_IN_ROUTE",
                    reason: "must start with '/'".to_string(),
                });
            }
            config.sign_in_route = route;
        }
        Ok(config)
    }

    pub fn sign_in_redirect(&self) -> RedirectSignal {
        RedirectSignal::to(&self.sign_in_route)
    }

    pub fn oauth_success_url(&self) -> String {
        format!("{}{}", self.origin, self.oauth_success_path)
    }

    pub fn oauth_failure_url(&self) -> String {
        format!("{}{}", self.origin, self.oauth_failure_path)
    }
}
