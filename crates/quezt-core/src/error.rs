use crate::types::RecordKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("not initialized: run 'quezt init'")]
    NotInitialized,

    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: RecordKind, id: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SiteError>;
