use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{CategoryRepository, QuestionRepository};
use crate::infrastructure::repositories::{
    InMemoryTriviaStore, PostgresCategoryRepository, PostgresQuestionRepository,
};

/// Shared handler state
///
/// Handlers reach the store only through these trait objects, so the same
/// router runs against Postgres in production and the in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

impl AppState {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Wires the PostgreSQL adapters over one connection pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresQuestionRepository::new(pool.clone())),
            Arc::new(PostgresCategoryRepository::new(pool)),
        )
    }

    /// Wires both repositories to a single in-memory store
    pub fn in_memory(store: InMemoryTriviaStore) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store)
    }
}
