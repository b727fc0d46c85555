use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::question::{NewQuestion, Question};

/// Repository trait for questions
///
/// Every method returning a list orders it by id ascending.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions
    async fn list(&self) -> RepositoryResult<Vec<Question>>;

    /// Find a question by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>>;

    /// Questions belonging to one category
    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case
    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>>;

    /// Persist a new question and return it with its store-assigned id
    async fn create(&self, question: &NewQuestion) -> RepositoryResult<Question>;

    /// Delete a question by ID, failing with `NotFound` if it does not exist
    async fn delete(&self, id: i32) -> RepositoryResult<()>;

    /// Questions not in `exclude`, optionally restricted to one category
    async fn quiz_pool(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> RepositoryResult<Vec<Question>>;
}
