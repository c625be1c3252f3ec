pub mod handlers;
mod types;

pub use types::{CopyResponse, ErrorResponse};

use crate::{Result, app::Session, blog::BlogGenerator, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .route("/view", post(handlers::set_view))
        .route("/api/state", get(handlers::api_state))
        .route("/api/generate", post(handlers::api_generate))
        .route("/api/copy", post(handlers::api_copy))
        .route("/api/fields", post(handlers::api_fields))
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let generator = BlogGenerator::from_config(&config.llm);
    let session = Session::from_config(&config);
    let app = router(AppState::new(session, generator));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(%addr, model = %config.llm.model, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
