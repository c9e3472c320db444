//! Symptom triage endpoints.

use axum::extract::Json;
use nestling_common::triage::{assess, Recommendation, Symptom, SYMPTOMS};
use serde::Deserialize;

/// GET /api/symptoms - the triage checklist catalog
pub async fn list_symptoms() -> Json<&'static [Symptom]> {
    Json(&SYMPTOMS[..])
}

#[derive(Deserialize)]
pub struct AssessRequest {
    #[serde(default)]
    pub symptom_ids: Vec<String>,
}

/// POST /api/symptoms/assess - classify a symptom selection
pub async fn assess_symptoms(Json(payload): Json<AssessRequest>) -> Json<Recommendation> {
    let recommendation = assess(&payload.symptom_ids);
    tracing::info!(
        selected = payload.symptom_ids.len(),
        severity = ?recommendation.severity,
        "symptom assessment"
    );
    Json(recommendation)
}
