mod errors;
mod storage;
mod types;

pub use errors::UserError;
pub use storage::SqlUserDirectory;
pub use types::{NewUserRecord, UserDirectory, UserProfile, UserRecord, UserStatus};
