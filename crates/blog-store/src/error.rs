use crate::post::PostId;

/// Errors from blog store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store already holds `capacity` records. Only raised on create.
    #[error("cache capacity is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },

    /// No record has the referenced id.
    #[error("item not found: {0}")]
    NotFound(PostId),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
