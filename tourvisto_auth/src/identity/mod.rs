mod client;
mod config;
mod errors;
mod types;

pub use client::AppwriteAccountClient;
pub use config::AppwriteConfig;
pub use errors::IdentityError;
pub use types::{Account, IdentityProvider, OAuthProvider, ProviderSession};
