use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::JsonBody;
use crate::api::handlers::IntOrString;
use crate::api::state::AppState;
use crate::domain::question::{Question, ValidationError};
use crate::domain::quiz::{pick_question, QuizCategory};

/// Category selector inside a quiz request
///
/// The client also sends the category's `type` label; it is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryRequest {
    pub id: Option<IntOrString>,
}

/// Request body for `POST /quizzes`
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategoryRequest>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Question,
}

/// Pick the next quiz question
///
/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let previous = req
        .previous_questions
        .ok_or(ValidationError::MissingField("previous_questions"))?;
    let category_id = req
        .quiz_category
        .and_then(|c| c.id)
        .ok_or(ValidationError::MissingField("quiz_category"))?
        .to_i32("quiz_category.id")?;
    let category = QuizCategory::from_id(category_id);

    let pool = state
        .questions
        .quiz_pool(&previous, category.category_id())
        .await?;
    let question = pick_question(&pool, &mut rand::thread_rng())?;

    tracing::debug!(
        question_id = question.id,
        pool_size = pool.len(),
        asked = previous.len(),
        "quiz question picked"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
