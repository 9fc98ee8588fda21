//! Session loaders built on the identity provider, the profile API and the stores
//!
//! - `coordinator`: the `AuthCoordinator` holding the injected clients
//! - `session`: reconciliation, current user, login and logout
//! - `user` / `trip`: paginated reads that degrade to empty results

mod coordinator;
mod errors;
mod outcome;
mod session;
mod trip;
mod user;

pub use coordinator::AuthCoordinator;
pub use errors::CoordinationError;
pub use outcome::{LoaderOutcome, Reconciled, RedirectSignal};
