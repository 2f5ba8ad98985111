use uuid::Uuid;

/// Errors produced by the people store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("no person with id {0}")]
    NotFound(Uuid),

    #[error("invalid projection {0:?}: inclusion and exclusion cannot be mixed")]
    Projection(String),

    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}
