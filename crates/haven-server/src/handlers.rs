//! API route handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, warn};

use haven_core::{resource_for, Region};

use crate::error::Result;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, HealthResponse, ResourceEntry, ResourcesResponse,
};
use crate::state::AppState;

/// POST /api/analyze - Classify a user message.
pub async fn analyze_message(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>> {
    let Json(req) = payload?;
    debug!(message_len = req.message.len(), "Analyzing message");

    let result = state.classifier.analyze(&req.message);

    let resources = if result.is_potential_crisis {
        warn!(
            confidence = %result.confidence,
            matched = result.matched_patterns.len(),
            "Potential crisis detected"
        );
        Some(ResourceEntry::all())
    } else {
        None
    };

    Ok(Json(AnalyzeResponse { result, resources }))
}

/// GET /api/resources - List the crisis resource directory.
pub async fn list_resources() -> Json<ResourcesResponse> {
    Json(ResourcesResponse {
        resources: ResourceEntry::all(),
    })
}

/// GET /api/resources/{region} - Get one directory entry.
pub async fn get_resource(Path(region): Path<String>) -> Result<Json<ResourceEntry>> {
    let region: Region = region.parse()?;
    Ok(Json(ResourceEntry::new(region, resource_for(region))))
}

/// GET /api/health - Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
