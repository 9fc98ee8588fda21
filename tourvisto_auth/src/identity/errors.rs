use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum IdentityError {
    /// No active session, or the provider rejected the session as unauthorized
    #[error("No active session")]
    NoSession,

    #[error("Identity provider returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serde error: {0}")]
    Serde(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl From<reqwest::Error> for IdentityError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_error_display() {
        let error = IdentityError::Service {
            status: 503,
            message: "Service unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Identity provider returned 503: Service unavailable"
        );
        assert_eq!(IdentityError::NoSession.to_string(), "No active session");
    }
}
