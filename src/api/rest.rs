//! Router and server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::handlers::{
    catalog_handler, dataset_handler, distribution_handler, repository_handler, ApiState,
};
use crate::config::Config;
use crate::error::Result;
use crate::metadata::MetadataService;
use crate::upstream::TransmartClient;

/// Create the FAIR Data Point router.
///
/// Endpoints:
/// - GET /                  - Repository description
/// - GET /studies           - Study catalog
/// - GET /studies/:id       - Single study as a dataset
/// - GET /studies/:id/data  - Study observations as a JSON distribution
pub fn create_router(state: Arc<ApiState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(repository_handler))
        .route("/studies", get(catalog_handler))
        .route("/studies/:study_id", get(dataset_handler))
        .route("/studies/:study_id/data", get(distribution_handler))
        .with_state(state)
        .layer(cors)
}

/// Run the HTTP server until shutdown.
pub async fn run_server(config: Config) -> Result<()> {
    let client = TransmartClient::from_config(&config.upstream)?;
    let metadata = MetadataService::new(Arc::new(client));
    let app = create_router(Arc::new(ApiState::new(metadata)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.http_port));
    info!("FAIR Data Point listening on http://{}", addr);
    info!("Describing tranSMART at {}", config.upstream.base_url);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    info!("FAIR Data Point shutting down");
    Ok(())
}
