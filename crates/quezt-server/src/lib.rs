pub mod error;
pub mod routes;
pub mod state;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Contact form
        .route("/api/contact", post(routes::contact::submit))
        // Home page bundle
        .route("/api/site", get(routes::site::get_site))
        // Blog
        .route("/api/posts", get(routes::posts::list_posts))
        .route("/api/posts/{slug}", get(routes::posts::get_post))
        // Case studies
        .route("/api/case-studies", get(routes::case_studies::list_case_studies))
        .route(
            "/api/case-studies/{slug}",
            get(routes::case_studies::get_case_study),
        )
        // SEO
        .route("/sitemap.xml", get(routes::seo::sitemap))
        .route("/robots.txt", get(routes::seo::robots))
        .fallback(routes::not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// A panicking handler still answers, with the same body the contact form
/// uses for unexpected failures.
fn panic_response(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        serde_json::json!({ "error": quezt_core::contact::INTERNAL_ERROR_MESSAGE }).to_string(),
    )
        .into_response()
}

/// Start the site server on a pre-bound listener.
///
/// The caller binds so it can report the actual port first (`port = 0` lets
/// the OS pick one).
pub async fn serve_on(app_state: AppState, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(app_state);

    tracing::info!("site server listening on http://localhost:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}
