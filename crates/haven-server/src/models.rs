//! API request and response models.

use haven_core::{AnalysisResult, CrisisResource, Region};
use serde::{Deserialize, Serialize};

/// Request body for POST /api/analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The user message to classify.
    pub message: String,
}

/// Response body for POST /api/analyze.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// Crisis lines to show; only present for a potential crisis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceEntry>>,
}

/// A directory entry tagged with its region.
#[derive(Debug, Serialize)]
pub struct ResourceEntry {
    pub region: Region,
    #[serde(flatten)]
    pub resource: &'static CrisisResource,
}

impl ResourceEntry {
    /// Creates an entry for a region.
    pub fn new(region: Region, resource: &'static CrisisResource) -> Self {
        Self { region, resource }
    }

    /// Returns every directory entry.
    pub fn all() -> Vec<Self> {
        haven_core::all_resources()
            .map(|(region, resource)| Self::new(region, resource))
            .collect()
    }
}

/// Response body for GET /api/resources.
#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub resources: Vec<ResourceEntry>,
}

/// Response body for GET /api/health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
