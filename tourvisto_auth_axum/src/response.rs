use axum::{
    Json,
    response::{IntoResponse, Redirect, Response},
};
use http::StatusCode;
use serde::Serialize;

use tourvisto_auth::{LoaderOutcome, RedirectSignal};

pub(super) fn redirect_response(signal: &RedirectSignal) -> Response {
    tracing::debug!("Redirecting to {}", signal.location());
    Redirect::to(signal.location()).into_response()
}

/// Helper trait for turning loader outcomes into responses
pub(super) trait IntoLoaderResponse {
    /// `Unavailable` becomes a JSON `null`, as on the read path
    fn into_json_or_null(self) -> Response;

    /// `Unavailable` becomes a 500
    fn into_json_or_error(self) -> Response;
}

impl<T: Serialize> IntoLoaderResponse for LoaderOutcome<T> {
    fn into_json_or_null(self) -> Response {
        match self {
            LoaderOutcome::Ready(value) => Json(value).into_response(),
            LoaderOutcome::Redirect(signal) => redirect_response(&signal),
            LoaderOutcome::Unavailable(_) => Json(serde_json::Value::Null).into_response(),
        }
    }

    fn into_json_or_error(self) -> Response {
        match self {
            LoaderOutcome::Ready(value) => Json(value).into_response(),
            LoaderOutcome::Redirect(signal) => redirect_response(&signal),
            LoaderOutcome::Unavailable(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}
