mod api;
mod auth;
mod config;
mod response;
mod router;
mod session;
mod state;


pub use config::SESSION_COOKIE_NAME;
pub use router::{tourvisto_router, tourvisto_router_no_trace};
pub use session::SessionLoader;
pub use state::{AuthState, SessionBinder};

// Re-export the core crate so applications need a single dependency
pub use tourvisto_auth;
pub use tourvisto_auth::init;
