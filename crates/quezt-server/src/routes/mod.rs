pub mod case_studies;
pub mod contact;
pub mod posts;
pub mod seo;
pub mod site;

use crate::error::AppError;

/// Query string accepted by the list routes.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub featured: bool,
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(usize::MAX)
    }
}

/// Fallback for every unknown path.
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::not_found(format!("no page at '{}'", uri.path()))
}
