mod errors;
mod google;
mod types;

pub use errors::ProfileError;
pub use google::GooglePeopleClient;
pub use types::ProfileProvider;
