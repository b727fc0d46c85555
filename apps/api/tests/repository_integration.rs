//! Integration tests for the PostgreSQL repositories
//!
//! These tests need a reachable database in `DATABASE_URL` and are ignored by
//! default; run them with `cargo test -- --ignored`. Each test works inside
//! its own freshly inserted category and removes it afterwards.

use sqlx::{Executor, PgPool};
use trivia_api::domain::errors::RepositoryError;
use trivia_api::domain::question::{NewQuestion, Question};
use trivia_api::domain::repositories::{CategoryRepository, QuestionRepository};
use trivia_api::infrastructure::repositories::{
    PostgresCategoryRepository, PostgresQuestionRepository,
};

/// Set up test database connection pool and ensure the schema exists
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    pool.execute(include_str!("../migrations/0001_trivia.sql"))
        .await
        .expect("Failed to apply schema");

    pool
}

/// Create a test category for isolation
async fn create_test_category(pool: &PgPool, label: &str) -> i32 {
    sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
        .bind(label)
        .fetch_one(pool)
        .await
        .expect("Failed to create test category")
}

/// Clean up test data after each test
async fn cleanup_test_category(pool: &PgPool, category_id: i32) {
    sqlx::query("DELETE FROM questions WHERE category = $1")
        .bind(category_id)
        .execute(pool)
        .await
        .expect("Failed to cleanup test questions");
    sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(category_id)
        .execute(pool)
        .await
        .expect("Failed to cleanup test category");
}

fn new_question(text: &str, category_id: i32) -> NewQuestion {
    NewQuestion::new(
        Some(text.to_string()),
        Some("Test answer".to_string()),
        Some(category_id),
        Some(2),
    )
    .expect("valid question")
}

fn ids(questions: &[Question]) -> Vec<i32> {
    questions.iter().map(|q| q.id).collect()
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_question_repository_create_and_find_by_id() {
    let pool = setup_test_db().await;
    let category_id = create_test_category(&pool, "Repo Create").await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    let created = repo
        .create(&new_question("Who wrote Hamlet?", category_id))
        .await
        .expect("Failed to create question");

    assert_eq!(created.question, "Who wrote Hamlet?");
    assert_eq!(created.category, category_id);
    assert_eq!(created.difficulty, 2);

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to find question");
    assert_eq!(found, Some(created.clone()));

    let all = repo.list().await.expect("Failed to list questions");
    assert!(all.windows(2).all(|w| w[0].id < w[1].id), "list must be ordered by id");
    assert!(all.contains(&created));

    cleanup_test_category(&pool, category_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_question_repository_unknown_category_is_invalid_reference() {
    let pool = setup_test_db().await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    let result = repo.create(&new_question("Orphan?", i32::MAX)).await;

    assert!(
        matches!(result, Err(RepositoryError::InvalidReference(id)) if id == i32::MAX),
        "unexpected result: {:?}",
        result
    );
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_question_repository_find_by_category() {
    let pool = setup_test_db().await;
    let category_id = create_test_category(&pool, "Repo Category").await;
    let other_id = create_test_category(&pool, "Repo Other").await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    let a = repo.create(&new_question("A", category_id)).await.unwrap();
    repo.create(&new_question("B", other_id)).await.unwrap();
    let c = repo.create(&new_question("C", category_id)).await.unwrap();

    let found = repo.find_by_category(category_id).await.unwrap();
    assert_eq!(ids(&found), vec![a.id, c.id]);

    cleanup_test_category(&pool, category_id).await;
    cleanup_test_category(&pool, other_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_question_repository_search_is_case_insensitive_and_literal() {
    let pool = setup_test_db().await;
    let category_id = create_test_category(&pool, "Repo Search").await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    let hit = repo
        .create(&new_question("Zqxj marker: 100% Unique_Text", category_id))
        .await
        .unwrap();
    repo.create(&new_question("Zqxj marker: 1000 UniqueXText", category_id))
        .await
        .unwrap();

    let found = repo.search("zqxj MARKER: 100% unique_").await.unwrap();
    assert_eq!(ids(&found), vec![hit.id]);

    cleanup_test_category(&pool, category_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_question_repository_delete() {
    let pool = setup_test_db().await;
    let category_id = create_test_category(&pool, "Repo Delete").await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    let created = repo.create(&new_question("Delete me", category_id)).await.unwrap();

    repo.delete(created.id).await.expect("Failed to delete question");
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());

    let second = repo.delete(created.id).await;
    assert!(matches!(second, Err(RepositoryError::NotFound { .. })));

    cleanup_test_category(&pool, category_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_question_repository_quiz_pool() {
    let pool = setup_test_db().await;
    let category_id = create_test_category(&pool, "Repo Quiz").await;
    let repo = PostgresQuestionRepository::new(pool.clone());

    let a = repo.create(&new_question("Quiz A", category_id)).await.unwrap();
    let b = repo.create(&new_question("Quiz B", category_id)).await.unwrap();

    let pool_for_category = repo.quiz_pool(&[a.id], Some(category_id)).await.unwrap();
    assert_eq!(ids(&pool_for_category), vec![b.id]);

    let exhausted = repo.quiz_pool(&[a.id, b.id], Some(category_id)).await.unwrap();
    assert!(exhausted.is_empty());

    let any = repo.quiz_pool(&[], None).await.unwrap();
    assert!(any.iter().any(|q| q.id == a.id));
    assert!(any.iter().any(|q| q.id == b.id));

    cleanup_test_category(&pool, category_id).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_category_repository_list_and_find() {
    let pool = setup_test_db().await;
    let category_id = create_test_category(&pool, "Repo Listing").await;
    let repo = PostgresCategoryRepository::new(pool.clone());

    let found = repo
        .find_by_id(category_id)
        .await
        .expect("Failed to find category")
        .expect("Category should exist");
    assert_eq!(found.kind, "Repo Listing");

    let all = repo.list().await.expect("Failed to list categories");
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    assert!(all.iter().any(|c| c.id == category_id));

    cleanup_test_category(&pool, category_id).await;

    assert!(repo.find_by_id(category_id).await.unwrap().is_none());
}
