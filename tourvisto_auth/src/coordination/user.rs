use crate::storage::Page;
use crate::userdb::{UserDirectory, UserRecord};
use crate::utils::gen_random_string;

use super::coordinator::AuthCoordinator;
use super::errors::CoordinationError;

impl AuthCoordinator {
    /// One page of user records; an empty page if the directory fails
    pub async fn list_users(&self, limit: u32, offset: u32) -> Page<UserRecord> {
        match self.users.list(limit, offset).await {
            Ok(page) => page,
            Err(err) => {
                CoordinationError::UserError(err).log();
                Page::empty()
            }
        }
    }
}

pub(super) async fn gen_new_user_id(users: &dyn UserDirectory) -> Result<String, CoordinationError> {
    // Try up to 3 times to generate a unique ID
    for _ in 0..3 {
        let id = gen_random_string(24)?;

        match users.get_user(&id).await {
            Ok(None) => return Ok(id),
            Ok(Some(_)) => continue,
            Err(e) => {
                return Err(
                    CoordinationError::Database(format!("Failed to check user ID: {e}")).log(),
                );
            }
        }
    }

    Err(CoordinationError::Coordination(
        "Failed to generate a unique user ID after multiple attempts".to_string(),
    )
    .log())
}
