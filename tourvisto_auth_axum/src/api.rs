use axum::{
    Json, Router,
    extract::{Path, Query},
    response::{IntoResponse, Response},
    routing::get,
};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use tourvisto_auth::{LoaderOutcome, Trip, UserRecord};

use super::config::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use super::response::IntoLoaderResponse;
use super::session::SessionLoader;
use super::state::AuthState;

pub(super) fn router() -> Router<AuthState> {
    Router::new()
        .route("/user", get(current_user))
        .route("/users", get(list_users))
        .route("/trips", get(list_trips))
        .route("/trips/{id}", get(trip_by_id))
}

#[derive(Debug, Default, Deserialize)]
struct PageParams {
    limit: Option<u32>,
    offset: Option<u32>,
}

impl PageParams {
    fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(1, MAX_PAGE_LIMIT)
    }

    fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }
}

#[derive(Debug, Serialize)]
struct UsersResponse {
    users: Vec<UserRecord>,
    total: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TripsResponse {
    all_trips: Vec<Trip>,
    total: u64,
}

async fn current_user(SessionLoader(loader): SessionLoader) -> Response {
    loader.get_current_user().await.into_json_or_null()
}

/// Every user record; admins only
async fn list_users(
    SessionLoader(loader): SessionLoader,
    Query(params): Query<PageParams>,
) -> Response {
    match loader.current_user_record().await {
        LoaderOutcome::Ready(caller) if caller.is_admin() => {
            let page = loader.list_users(params.limit(), params.offset()).await;
            Json(UsersResponse {
                users: page.items,
                total: page.total,
            })
            .into_response()
        }
        LoaderOutcome::Ready(caller) => {
            tracing::info!(user_id = %caller.id, role = ?caller.role(), "User listing refused");
            StatusCode::FORBIDDEN.into_response()
        }
        outcome => outcome.into_json_or_null(),
    }
}

async fn list_trips(
    SessionLoader(loader): SessionLoader,
    Query(params): Query<PageParams>,
) -> Response {
    match loader.current_user_record().await {
        LoaderOutcome::Ready(_) => {
            let page = loader.list_trips(params.limit(), params.offset()).await;
            Json(TripsResponse {
                all_trips: page.items,
                total: page.total,
            })
            .into_response()
        }
        outcome => outcome.into_json_or_null(),
    }
}

async fn trip_by_id(SessionLoader(loader): SessionLoader, Path(id): Path<String>) -> Response {
    match loader.current_user_record().await {
        LoaderOutcome::Ready(_) => Json(loader.get_trip_by_id(&id).await).into_response(),
        outcome => outcome.into_json_or_null(),
    }
}
