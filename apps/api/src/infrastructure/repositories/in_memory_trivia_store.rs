use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::category::Category;
use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::question::{NewQuestion, Question};
use crate::domain::repositories::{CategoryRepository, QuestionRepository};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_question_id: i32,
}

/// In-process store implementing both repository traits
///
/// Rows live in id-ordered maps, so every listing is ordered by id the same
/// way the Postgres adapter orders it. Question ids are assigned ascending
/// and never reused, and inserts referencing an unknown category are
/// rejected like a foreign-key violation would be.
///
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTriviaStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryTriviaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a category row with a fixed id
    pub async fn insert_category(&self, id: i32, kind: impl Into<String>) {
        let mut tables = self.tables.write().await;
        tables.categories.insert(
            id,
            Category {
                id,
                kind: kind.into(),
            },
        );
    }

    /// Number of stored questions
    pub async fn question_count(&self) -> usize {
        self.tables.read().await.questions.len()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryTriviaStore {
    async fn list(&self) -> RepositoryResult<Vec<Question>> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.matches(term))
            .cloned()
            .collect())
    }

    async fn create(&self, question: &NewQuestion) -> RepositoryResult<Question> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&question.category_id()) {
            return Err(RepositoryError::InvalidReference(question.category_id()));
        }

        tables.next_question_id += 1;
        let created = Question {
            id: tables.next_question_id,
            question: question.question().to_string(),
            answer: question.answer().to_string(),
            category: question.category_id(),
            difficulty: question.difficulty(),
        };
        tables.questions.insert(created.id, created.clone());

        Ok(created)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::question_not_found(id))
    }

    async fn quiz_pool(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> RepositoryResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| !exclude.contains(&q.id))
            .filter(|q| category_id.map_or(true, |id| q.category == id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryTriviaStore {
    async fn list(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }
}
