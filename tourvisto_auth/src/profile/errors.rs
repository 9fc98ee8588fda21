use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum ProfileError {
    #[error("Fetch profile error: {0}")]
    Fetch(String),

    #[error("Profile API returned status {0}")]
    Status(u16),

    #[error("Serde error: {0}")]
    Serde(String),

    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl From<reqwest::Error> for ProfileError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}
