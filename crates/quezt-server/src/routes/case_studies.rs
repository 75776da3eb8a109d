use axum::{
    extract::{Path, Query, State},
    Json,
};
use quezt_core::types::CaseStudy;

use super::ListQuery;
use crate::error::AppError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /api/case-studies — case-study summaries in display order
pub async fn list_case_studies(
    State(app): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<serde_json::Value> {
    let studies = &app.store.case_studies;
    let selected: Vec<&CaseStudy> = if query.featured {
        studies.find_featured(query.limit())
    } else {
        studies.all().iter().take(query.limit()).collect()
    };
    let list: Vec<serde_json::Value> = selected.into_iter().map(study_summary).collect();
    Json(serde_json::json!(list))
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

/// GET /api/case-studies/:slug — one case study with previous/next links
pub async fn get_case_study(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let studies = &app.store.case_studies;
    let study = studies.find_by_id(&slug)?;
    let adjacent = studies.find_adjacent(&study.id);
    Ok(Json(serde_json::json!({
        "case_study": study,
        "previous": adjacent.previous.map(study_summary),
        "next": adjacent.next.map(study_summary),
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn study_summary(s: &CaseStudy) -> serde_json::Value {
    serde_json::json!({
        "id": s.id,
        "title": s.title,
        "subtitle": s.subtitle,
        "description": s.description,
        "industry": s.industry,
        "services": s.services,
        "metrics": s.metrics,
        "image": s.image,
        "color": s.color,
        "featured": s.featured,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
