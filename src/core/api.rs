//! HTTP API for Mailarmor
//!
//! Endpoints:
//! - POST /classify - Classify one email
//! - POST /classify/bulk - Classify up to 100 emails
//! - GET /categories - List categories with descriptions
//! - GET /samples - One sample payload per category
//! - GET /health - Health check

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::core::catalog::{self, CategoryInfo};
use crate::core::{Classifier, RuleRepository};
use crate::types::{BulkItem, ClassifyError, EmailInput};

/// App state
pub struct AppState {
    pub classifier: Classifier<'static>,
}

/// Bulk classification request
#[derive(Debug, Deserialize)]
pub struct BulkRequest {
    pub emails: Vec<EmailInput>,
}

/// Single classification response
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub request_type: String,
    pub confidence_score: i32,
    pub runner_up: Option<String>,
    pub runner_up_score: i32,
    pub matched_phrases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_scores: Option<BTreeMap<String, i32>>,
}

/// Bulk classification response
#[derive(Debug, Serialize)]
pub struct BulkResponse {
    pub results: Vec<BulkItem>,
}

/// Categories response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

/// One sample entry
#[derive(Debug, Serialize)]
pub struct SampleEntry {
    pub category: &'static str,
    pub payload: EmailInput,
}

/// Samples response
#[derive(Debug, Serialize)]
pub struct SamplesResponse {
    pub samples: Vec<SampleEntry>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub rules_loaded: usize,
    pub version: String,
}

/// Error body returned to clients
pub struct ApiError(pub ClassifyError);

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ClassifyError::BulkTooLarge { .. } => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({ "detail": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Create the API router over the built-in rules
pub fn create_router() -> Router {
    let state = Arc::new(AppState {
        classifier: Classifier::new(),
    });

    Router::new()
        .route("/health", get(health))
        .route("/classify", post(classify_email))
        .route("/classify/bulk", post(classify_bulk))
        .route("/categories", get(list_categories))
        .route("/samples", get(list_samples))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        rules_loaded: state.classifier.rules().len(),
        version: crate::VERSION.to_string(),
    })
}

/// Classify a single email
async fn classify_email(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EmailInput>,
) -> Json<ClassifyResponse> {
    let result = state.classifier.classify_email(&req);

    Json(ClassifyResponse {
        request_type: result.label,
        confidence_score: result.score,
        runner_up: result.runner_up,
        runner_up_score: result.runner_up_score,
        matched_phrases: result.matched_phrases,
        all_scores: req.include_debug.then_some(result.all_scores),
    })
}

/// Classify a batch of emails
async fn classify_bulk(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BulkRequest>,
) -> Result<Json<BulkResponse>, ApiError> {
    let results = state.classifier.classify_bulk(&req.emails).map_err(|e| {
        warn!(count = req.emails.len(), "bulk request rejected: {}", e);
        ApiError(e)
    })?;

    Ok(Json(BulkResponse { results }))
}

/// List all categories
async fn list_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: catalog::categories(state.classifier.rules()),
    })
}

/// One sample payload per category
async fn list_samples() -> Json<SamplesResponse> {
    Json(SamplesResponse {
        samples: catalog::samples()
            .iter()
            .map(|s| SampleEntry {
                category: s.category,
                payload: s.payload(),
            })
            .collect(),
    })
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let rules = RuleRepository::try_builtin().map_err(|e| e.to_string())?;
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, rules = rules.len(), "Mailarmor API running");
    info!("  POST /classify        - Classify one email");
    info!("  POST /classify/bulk   - Classify up to {} emails", crate::MAX_BULK_EMAILS);
    info!("  GET  /categories      - List categories");
    info!("  GET  /samples         - Sample payloads");
    info!("  GET  /health          - Health check");

    axum::serve(listener, router).await?;
    Ok(())
}
