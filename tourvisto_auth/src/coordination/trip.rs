use crate::storage::Page;
use crate::trips::Trip;

use super::coordinator::AuthCoordinator;
use super::errors::CoordinationError;

impl AuthCoordinator {
    /// Newest trips first; an empty page if the store fails
    pub async fn list_trips(&self, limit: u32, offset: u32) -> Page<Trip> {
        match self.trips.list(limit, offset).await {
            Ok(page) => page,
            Err(err) => {
                CoordinationError::TripError(err).log();
                Page::empty()
            }
        }
    }

    /// `None` for an unknown id and for a failing store
    #[tracing::instrument(skip(self))]
    pub async fn get_trip_by_id(&self, id: &str) -> Option<Trip> {
        match self.trips.get_by_id(id).await {
            Ok(trip) => trip,
            Err(err) => {
                CoordinationError::TripError(err).log();
                None
            }
        }
    }
}
