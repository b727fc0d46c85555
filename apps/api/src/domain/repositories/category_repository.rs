use async_trait::async_trait;

use crate::domain::category::Category;
use crate::domain::errors::RepositoryResult;

/// Read-only repository for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id
    async fn list(&self) -> RepositoryResult<Vec<Category>>;

    /// Find a category by its ID
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;
}
