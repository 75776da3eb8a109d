use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use quezt_core::sitemap;

use crate::state::AppState;

/// GET /sitemap.xml
pub async fn sitemap(State(app): State<AppState>) -> Response {
    let today = chrono::Utc::now().date_naive();
    let entries = sitemap::entries(&app.store, &app.config.site.base_url, today);
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::to_xml(&entries),
    )
        .into_response()
}

/// GET /robots.txt
pub async fn robots(State(app): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        sitemap::robots_txt(&app.config.site.base_url),
    )
        .into_response()
}
