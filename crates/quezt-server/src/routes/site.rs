use axum::{extract::State, Json};

use super::case_studies::study_summary;
use super::posts::post_summary;
use crate::state::AppState;

/// Featured posts shown in the home page blog teaser.
pub const TEASER_POST_LIMIT: usize = 2;

/// GET /api/site — everything the home page renders
pub async fn get_site(State(app): State<AppState>) -> Json<serde_json::Value> {
    let store = &app.store;
    let featured_studies: Vec<serde_json::Value> = store
        .case_studies
        .find_featured(usize::MAX)
        .into_iter()
        .map(study_summary)
        .collect();
    let featured_posts: Vec<serde_json::Value> = store
        .posts
        .find_featured(TEASER_POST_LIMIT)
        .into_iter()
        .map(post_summary)
        .collect();

    Json(serde_json::json!({
        "name": app.config.site.name,
        "company": store.company,
        "navigation": store.navigation,
        "services": store.services,
        "process": store.process_steps,
        "testimonials": store.testimonials,
        "pricing": store.pricing_tiers,
        "faqs": store.faqs,
        "stats": store.stats,
        "client_logos": store.client_logos,
        "featured_case_studies": featured_studies,
        "featured_posts": featured_posts,
    }))
}
