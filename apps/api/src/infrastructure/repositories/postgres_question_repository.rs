use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::question::{NewQuestion, Question};
use crate::domain::repositories::QuestionRepository;

/// PostgreSQL implementation of QuestionRepository
pub struct PostgresQuestionRepository {
    pool: PgPool,
}

impl PostgresQuestionRepository {
    /// Creates a new PostgresQuestionRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes `LIKE` wildcards so `term` matches literally
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn map_insert_error(err: sqlx::Error, category_id: i32) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            RepositoryError::InvalidReference(category_id)
        }
        _ => RepositoryError::Database(err),
    }
}

#[async_trait]
impl QuestionRepository for PostgresQuestionRepository {
    async fn list(&self) -> RepositoryResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Question>> {
        let row = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_category(&self, category_id: i32) -> RepositoryResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn search(&self, term: &str) -> RepositoryResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn create(&self, question: &NewQuestion) -> RepositoryResult<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category_id())
        .bind(question.difficulty())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, question.category_id()))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM questions WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::question_not_found(id));
        }

        Ok(())
    }

    async fn quiz_pool(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> RepositoryResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id <> ALL($1)
              AND ($2::INT IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(exclude.to_vec())
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
