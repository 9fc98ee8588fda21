use axum::{
    Router,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use http::{HeaderValue, header::SET_COOKIE};

use tourvisto_auth::LoaderOutcome;

use super::config::SESSION_COOKIE_NAME;
use super::response::{IntoLoaderResponse, redirect_response};
use super::session::SessionLoader;
use super::state::AuthState;

pub(super) fn router() -> Router<AuthState> {
    Router::new()
        .route("/google", get(google_auth))
        .route("/callback", get(callback))
        .route("/logout", post(logout))
}

/// Send the browser to the identity provider's Google login
async fn google_auth(SessionLoader(loader): SessionLoader) -> Response {
    match loader.login_with_google().await {
        LoaderOutcome::Ready(url) => Redirect::to(&url).into_response(),
        outcome => outcome.into_json_or_error(),
    }
}

/// Landing route after a successful login
async fn callback(SessionLoader(loader): SessionLoader) -> Response {
    match loader.reconcile_and_store().await {
        LoaderOutcome::Redirect(signal) => redirect_response(&signal),
        _ => Redirect::to("/").into_response(),
    }
}

/// End the session and expire the session cookie
async fn logout(SessionLoader(loader): SessionLoader) -> Response {
    let mut response = redirect_response(&loader.logout().await);
    match HeaderValue::from_str(&expired_session_cookie()) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::error!("Failed to build the session cookie header: {e}"),
    }
    response
}

fn expired_session_cookie() -> String {
    format!(
        "{}=; Path=/; Max-Age=0; HttpOnly; Secure; SameSite=Lax",
        SESSION_COOKIE_NAME.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_session_cookie() {
        let cookie = expired_session_cookie();
        assert!(cookie.starts_with(&format!("{}=;", SESSION_COOKIE_NAME.as_str())));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Path=/"));
    }
}
