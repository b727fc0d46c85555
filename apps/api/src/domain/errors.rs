use thiserror::Error;

/// Errors raised by repository implementations
///
/// Adapters translate store-specific failures into these variants so the
/// API layer can choose a status code without inspecting error strings.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("category does not exist: {0}")]
    InvalidReference(i32),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    pub fn question_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "question",
            id,
        }
    }

    pub fn category_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "category",
            id,
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
