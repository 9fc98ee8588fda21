//! Error types for the coordination layer

use thiserror::Error;

use crate::identity::IdentityError;
use crate::trips::TripError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Failures the coordinator absorbs into a degraded outcome
#[derive(Error, Debug, Clone)]
pub enum CoordinationError {
    #[error("Coordination error: {0}")]
    Coordination(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Identity error: {0}")]
    IdentityError(IdentityError),

    #[error("User error: {0}")]
    UserError(UserError),

    #[error("Trip error: {0}")]
    TripError(TripError),

    #[error("Utils error: {0}")]
    UtilsError(UtilError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Coordination(msg) => tracing::error!("Coordination error: {}", msg),
            Self::Database(msg) => tracing::error!("Database error: {}", msg),
            Self::IdentityError(IdentityError::NoSession) => {
                tracing::debug!("Identity error: no active session")
            }
            Self::IdentityError(err) => tracing::error!("Identity error: {}", err),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::TripError(err) => tracing::error!("Trip error: {}", err),
            Self::UtilsError(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}

// Conversions log once, at the point the error enters this layer

impl From<IdentityError> for CoordinationError {
    fn from(err: IdentityError) -> Self {
        Self::IdentityError(err).log()
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        Self::UserError(err).log()
    }
}

impl From<TripError> for CoordinationError {
    fn from(err: TripError) -> Self {
        Self::TripError(err).log()
    }
}

impl From<UtilError> for CoordinationError {
    fn from(err: UtilError) -> Self {
        Self::UtilsError(err).log()
    }
}
