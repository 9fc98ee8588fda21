use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tourvisto_auth_axum::tourvisto_auth::{
    AppwriteAccountClient, AppwriteConfig, AuthConfig, AuthCoordinator, DataStoreConfig,
    GooglePeopleClient,
};
use tourvisto_auth_axum::{AuthState, tourvisto_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tourvisto_auth=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth_config = AuthConfig::from_env()?;
    let identity = AppwriteAccountClient::new(AppwriteConfig::from_env()?)?;

    let store = DataStoreConfig::from_env()?.connect()?;
    let (users, trips) = tourvisto_auth_axum::init(store).await?;

    let coordinator = AuthCoordinator::new(
        Arc::new(identity.clone()),
        Arc::new(GooglePeopleClient::new()?),
        Arc::new(users),
        Arc::new(trips),
        auth_config,
    );

    let app = Router::new()
        .route("/", get(|| async { "Tourvisto" }))
        .merge(tourvisto_router(AuthState::new(coordinator, Arc::new(identity))));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
