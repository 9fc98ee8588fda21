use axum::extract::FromRequestParts;
use axum_extra::{TypedHeader, headers};
use http::request::Parts;
use std::convert::Infallible;

use tourvisto_auth::AuthCoordinator;

use super::config::SESSION_COOKIE_NAME;
use super::state::AuthState;

/// Coordinator bound to the caller's session cookie, available as an extractor
///
/// A request without the cookie still gets a coordinator; its identity
/// client simply reports that nobody is signed in.
pub struct SessionLoader(pub AuthCoordinator);

impl FromRequestParts<AuthState> for SessionLoader {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AuthState,
    ) -> Result<Self, Self::Rejection> {
        let cookies = TypedHeader::<headers::Cookie>::from_request_parts(parts, state)
            .await
            .ok();

        let secret = cookies
            .as_ref()
            .and_then(|TypedHeader(cookies)| cookies.get(SESSION_COOKIE_NAME.as_str()))
            .filter(|secret| !secret.is_empty());

        if secret.is_none() {
            tracing::debug!(
                cookie = SESSION_COOKIE_NAME.as_str(),
                "Request without a session cookie"
            );
        }

        Ok(Self(state.coordinator_for(secret)))
    }
}
