use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum TripError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for TripError {
    fn from(err: sqlx::Error) -> Self {
        TripError::Storage(err.to_string())
    }
}
