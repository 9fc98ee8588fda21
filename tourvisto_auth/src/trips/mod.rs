mod errors;
mod storage;
mod types;

pub use errors::TripError;
pub use storage::SqlTripStore;
pub use types::{NewTrip, Trip, TripStore};
