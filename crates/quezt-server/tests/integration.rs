use axum::http::StatusCode;
use http_body_util::BodyExt;
use quezt_server::AppState;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn app() -> axum::Router {
    quezt_server::build_router(AppState::seeded().unwrap())
}

/// Send a GET request via `oneshot` and return (status, raw body).
async fn get_raw(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get_raw(app, uri).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a POST request with raw bytes via `oneshot` and return (status, parsed JSON body).
async fn post_raw(app: axum::Router, uri: &str, body: Vec<u8>) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, serde_json::to_vec(&body).unwrap()).await
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_accepts_complete_submission() {
    let (status, json) = post_json(
        app(),
        "/api/contact",
        serde_json::json!({
            "name": "Ann",
            "email": "ann@x.com",
            "company": "Acme",
            "message": "Hi",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Thank you for your message. We will be in touch soon!"
    );
}

#[tokio::test]
async fn contact_without_company_is_accepted() {
    let (status, json) = post_json(
        app(),
        "/api/contact",
        serde_json::json!({ "name": "Ann", "email": "ann@x.com", "message": "Hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn contact_with_only_name_is_rejected() {
    let (status, json) = post_json(
        app(),
        "/api/contact",
        serde_json::json!({ "name": "Ann" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({ "error": "Missing required fields" }));
}

#[tokio::test]
async fn contact_with_empty_object_is_rejected() {
    let (status, json) = post_json(app(), "/api/contact", serde_json::json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required fields");
}

#[tokio::test]
async fn contact_with_unparseable_body_is_internal_error() {
    let (status, json) = post_raw(app(), "/api/contact", b"name=Ann&email=x".to_vec()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn contact_with_empty_body_is_internal_error() {
    let (status, json) = post_raw(app(), "/api/contact", Vec::new()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn contact_ignores_content_type() {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header("content-type", "text/plain")
        .body(axum::body::Body::from(
            r#"{"name":"Ann","email":"ann@x.com","message":"Hi"}"#,
        ))
        .unwrap();
    let response = app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn contact_rejects_get() {
    let (status, _json) = get(app(), "/api/contact").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_posts_returns_summaries() {
    let (status, json) = get(app(), "/api/posts").await;
    assert_eq!(status, StatusCode::OK);
    let arr = json.as_array().expect("expected JSON array");
    assert_eq!(arr.len(), 3);
    assert!(arr.iter().all(|p| p.get("content").is_none()));
}

#[tokio::test]
async fn list_posts_featured_query() {
    let (status, json) = get(app(), "/api/posts?featured=true&limit=1").await;
    assert_eq!(status, StatusCode::OK);
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], "building-scalable-react-native-apps");
}

#[tokio::test]
async fn get_post_by_slug() {
    let (status, json) = get(app(), "/api/posts/nextjs-performance-optimization").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["post"]["title"], "Next.js Performance: From Good to Great");
    assert!(json["post"]["content"]
        .as_str()
        .unwrap()
        .contains("## Caching Strategies"));
    assert_eq!(json["related"][0]["id"], "building-scalable-react-native-apps");
}

#[tokio::test]
async fn get_unknown_post_is_404() {
    let (status, json) = get(app(), "/api/posts/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("nonexistent"));
}

#[tokio::test]
async fn list_case_studies_in_display_order() {
    let (status, json) = get(app(), "/api/case-studies").await;
    assert_eq!(status, StatusCode::OK);
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 4);
    assert_eq!(arr[0]["id"], "fintech-mobile-app");
    assert_eq!(arr[3]["id"], "saas-dashboard");
}

#[tokio::test]
async fn get_case_study_finflow() {
    let (status, json) = get(app(), "/api/case-studies/fintech-mobile-app").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["case_study"]["title"], "FinFlow");
    assert_eq!(json["case_study"]["metrics"][0]["value"], "2M+");
    assert!(json["previous"].is_null());
}

#[tokio::test]
async fn last_case_study_has_previous_but_no_next() {
    let (status, json) = get(app(), "/api/case-studies/saas-dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["next"].is_null());
    assert!(!json["previous"].is_null());
}

#[tokio::test]
async fn get_unknown_case_study_is_404() {
    let (status, _json) = get(app(), "/api/case-studies/nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn site_bundle_is_served() {
    let (status, json) = get(app(), "/api/site").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["company"]["name"], "Quezt Labs");
    assert_eq!(json["faqs"].as_array().unwrap().len(), 6);
}

// ---------------------------------------------------------------------------
// SEO + fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sitemap_lists_content_pages() {
    let (status, body) = get_raw(app(), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<loc>https://queztlabs.tech/case-studies/fintech-mobile-app</loc>"));
    assert!(body.contains("<loc>https://queztlabs.tech/blog/design-systems-worth-building</loc>"));
}

#[tokio::test]
async fn robots_points_at_sitemap() {
    let (status, body) = get_raw(app(), "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Disallow: /api/"));
    assert!(body.contains("Sitemap: https://queztlabs.tech/sitemap.xml"));
}

#[tokio::test]
async fn unknown_path_is_json_404() {
    let (status, json) = get(app(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("/nope"));
}

#[tokio::test]
async fn serve_on_answers_on_bound_port() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(quezt_server::serve_on(AppState::seeded().unwrap(), listener));

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /robots.txt HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    server.abort();

    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Disallow: /api/"));
}

#[tokio::test]
async fn custom_base_url_flows_into_robots() {
    let mut config = quezt_core::config::Config::default();
    config.site.base_url = "https://example.com".into();
    let state = AppState::new(quezt_core::ContentStore::seed().unwrap(), config);
    let (_status, body) = get_raw(quezt_server::build_router(state), "/robots.txt").await;
    assert!(body.contains("Sitemap: https://example.com/sitemap.xml"));
}
