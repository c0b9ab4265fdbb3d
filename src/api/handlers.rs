//! Request handlers for the FAIR Data Point endpoints.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{FdpError, UpstreamError};
use crate::metadata::MetadataService;
use crate::rdf::{turtle, Graph};

/// Application state shared across handlers.
pub struct ApiState {
    /// Metadata translators backing every route.
    pub metadata: MetadataService,
}

impl ApiState {
    /// Create new API state.
    pub fn new(metadata: MetadataService) -> Self {
        Self { metadata }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// GET / - Describe the repository.
pub async fn repository_handler(State(state): State<Arc<ApiState>>) -> Response {
    turtle_response(state.metadata.describe_repository())
}

/// GET /studies - Describe the study catalog.
pub async fn catalog_handler(State(state): State<Arc<ApiState>>) -> Response {
    match state.metadata.describe_catalog().await {
        Ok(graph) => turtle_response(graph),
        Err(e) => error_response(e),
    }
}

/// GET /studies/:study_id - Describe one study as a dataset.
pub async fn dataset_handler(
    State(state): State<Arc<ApiState>>,
    Path(study_id): Path<String>,
) -> Response {
    match state.metadata.describe_dataset(&study_id).await {
        Ok(graph) => turtle_response(graph),
        Err(e) => error_response(e),
    }
}

/// GET /studies/:study_id/data - Describe a study's JSON distribution.
pub async fn distribution_handler(
    State(state): State<Arc<ApiState>>,
    Path(study_id): Path<String>,
) -> Response {
    match state.metadata.describe_distribution(&study_id).await {
        Ok(graph) => turtle_response(graph),
        Err(e) => error_response(e),
    }
}

fn turtle_response(graph: Graph) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, turtle::MEDIA_TYPE)
        .body(Body::from(turtle::to_turtle(&graph)))
        .unwrap()
}

fn error_response(err: FdpError) -> Response {
    let (status, code) = match &err {
        FdpError::Upstream(UpstreamError::Status { status: 404, .. }) => {
            (StatusCode::NOT_FOUND, "study_not_found")
        }
        FdpError::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_failed"),
        FdpError::Metadata(_) => (StatusCode::BAD_GATEWAY, "invalid_upstream_metadata"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };
    tracing::error!("Request failed: {}", err);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code: code.to_string(),
        }),
    )
        .into_response()
}
