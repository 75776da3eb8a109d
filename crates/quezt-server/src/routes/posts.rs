use axum::{
    extract::{Path, Query, State},
    Json,
};
use quezt_core::types::BlogPost;

use super::ListQuery;
use crate::error::AppError;
use crate::state::AppState;

/// How many related posts a post page shows.
pub const RELATED_POST_LIMIT: usize = 2;

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// GET /api/posts — post summaries in display order
pub async fn list_posts(
    State(app): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<serde_json::Value> {
    let posts = &app.store.posts;
    let selected: Vec<&BlogPost> = if query.featured {
        posts.find_featured(query.limit())
    } else {
        posts.all().iter().take(query.limit()).collect()
    };
    let list: Vec<serde_json::Value> = selected.into_iter().map(post_summary).collect();
    Json(serde_json::json!(list))
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

/// GET /api/posts/:slug — one post with its related posts
pub async fn get_post(
    State(app): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let posts = &app.store.posts;
    let post = posts.find_by_id(&slug)?;
    let related: Vec<serde_json::Value> = posts
        .find_related(post, RELATED_POST_LIMIT)
        .into_iter()
        .map(post_summary)
        .collect();
    Ok(Json(serde_json::json!({
        "post": post,
        "related": related,
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Everything but the body, for cards and lists.
pub(crate) fn post_summary(p: &BlogPost) -> serde_json::Value {
    serde_json::json!({
        "id": p.id,
        "title": p.title,
        "excerpt": p.excerpt,
        "author": p.author,
        "author_role": p.author_role,
        "author_avatar": p.author_avatar,
        "date": p.date,
        "read_time": p.read_time,
        "category": p.category,
        "image": p.image,
        "featured": p.featured,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
