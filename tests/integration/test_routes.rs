//! Route-level tests: content types, Turtle bodies, error statuses.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use fairpoint::api::{create_router, ApiState};
use fairpoint::error::{Result, UpstreamError};
use fairpoint::metadata::MetadataService;
use fairpoint::upstream::StudyProvider;

/// Provider answering every fetch with one canned payload.
struct StubProvider {
    response: Value,
}

#[async_trait]
impl StudyProvider for StubProvider {
    async fn fetch_studies(&self, _study_id: Option<&str>) -> Result<Value> {
        Ok(self.response.clone())
    }
}

/// Provider failing every fetch with an upstream 404.
struct NotFoundProvider;

#[async_trait]
impl StudyProvider for NotFoundProvider {
    async fn fetch_studies(&self, study_id: Option<&str>) -> Result<Value> {
        Err(UpstreamError::Status {
            status: 404,
            url: format!(
                "http://transmart.test/v1/studies/{}",
                study_id.unwrap_or_default()
            ),
        }
        .into())
    }
}

fn router_with(provider: impl StudyProvider + 'static) -> Router {
    let metadata = MetadataService::new(Arc::new(provider));
    create_router(Arc::new(ApiState::new(metadata)))
}

fn study_router() -> Router {
    router_with(StubProvider {
        response: json!({
            "id": "GSE8581",
            "ontologyTerm": {"metadata": {"Title": "COPD study"}},
            "studies": [{"id": "GSE8581"}]
        }),
    })
}

async fn get(router: Router, uri: &str) -> axum::response::Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn all_routes_answer_turtle() {
    for uri in ["/", "/studies", "/studies/GSE8581", "/studies/GSE8581/data"] {
        let response = get(study_router(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "route {}", uri);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            Some("text/turtle; charset=utf-8"),
            "route {}",
            uri
        );
    }
}

#[tokio::test]
async fn repository_body_is_turtle_with_prefixes() {
    let response = get(study_router(), "/").await;
    let body = body_string(response).await;
    assert!(body.contains("@prefix dct: <http://purl.org/dc/terms/> ."));
    assert!(body.contains("dct:title \"TranSMART\""));
    assert!(body.contains("r3d:dataCatalog </studies>"));
}

#[tokio::test]
async fn catalog_body_links_the_listed_study() {
    let response = get(study_router(), "/studies").await;
    let body = body_string(response).await;
    assert!(body.contains("a dcat:Catalog"));
    assert!(body.contains("dcat:dataset </studies/GSE8581>"));
}

#[tokio::test]
async fn dataset_body_carries_the_enriched_title() {
    let response = get(study_router(), "/studies/GSE8581").await;
    let body = body_string(response).await;
    assert!(body.contains("a dcat:Dataset"));
    assert!(body.contains("dct:title \"COPD study\""));
    assert!(body.contains("dcat:distribution </studies/GSE8581/observations>"));
}

#[tokio::test]
async fn distribution_body_describes_the_json_download() {
    let response = get(study_router(), "/studies/GSE8581/data").await;
    let body = body_string(response).await;
    assert!(body.contains("a dcat:Distribution"));
    assert!(body.contains("dcat:mediaType \"application/json\""));
    assert!(body.contains("dcat:downloadURL </studies/GSE8581/observations>"));
}

#[tokio::test]
async fn unknown_study_is_never_a_200() {
    let response = get(router_with(NotFoundProvider), "/studies/UNKNOWN").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("study_not_found"));
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
    struct FailingProvider;

    #[async_trait]
    impl StudyProvider for FailingProvider {
        async fn fetch_studies(&self, _study_id: Option<&str>) -> Result<Value> {
            Err(UpstreamError::Token("token endpoint answered 500".to_string()).into())
        }
    }

    let response = get(router_with(FailingProvider), "/studies").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn malformed_study_record_is_a_bad_gateway() {
    let router = router_with(StubProvider {
        response: json!({"ontologyTerm": {}}),
    });
    let response = get(router, "/studies/S1").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_string(response).await;
    assert!(body.contains("invalid_upstream_metadata"));
}
