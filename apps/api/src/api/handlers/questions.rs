use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::errors::ApiError;
use crate::api::extract::{IdPath, JsonBody, PageParam};
use crate::api::handlers::{optional_int, IntOrString};
use crate::api::state::AppState;
use crate::domain::category::category_map;
use crate::domain::errors::RepositoryError;
use crate::domain::pagination::{paginate, Page, QUESTIONS_PER_PAGE};
use crate::domain::question::{NewQuestion, Question, ValidationError};

/// Request body for `POST /questions`
///
/// The presence of `searchTerm` selects search; otherwise the remaining
/// fields describe a question to create.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsRequest {
    #[serde(rename = "searchTerm", default, deserialize_with = "present")]
    pub search_term: Option<Option<String>>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<IntOrString>,
    pub difficulty: Option<IntOrString>,
}

/// Distinguishes `"searchTerm": null` from an absent key
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl QuestionsRequest {
    fn into_new_question(self) -> Result<NewQuestion, ValidationError> {
        NewQuestion::new(
            self.question,
            self.answer,
            optional_int(self.category.as_ref(), "category")?,
            optional_int(self.difficulty.as_ref(), "difficulty")?,
        )
    }
}

/// Response for the full question listing
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
}

/// Response for deletion
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Response for search and creation
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i32>,
}

/// List one page of questions with the category mapping
///
/// GET /questions
pub async fn list_questions(
    State(state): State<AppState>,
    PageParam(page): PageParam,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let questions = state.questions.list().await?;
    let current = paginate(&questions, page, QUESTIONS_PER_PAGE);
    if current.is_empty() {
        return Err(ApiError::not_found(format!(
            "no questions on page {}",
            page.number()
        )));
    }

    let categories = state.categories.list().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: category_map(&categories),
    }))
}

/// Delete a question and return the refreshed listing
///
/// DELETE /questions/:id
pub async fn delete_question(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    PageParam(page): PageParam,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let question = state
        .questions
        .find_by_id(id)
        .await?
        .ok_or_else(|| RepositoryError::question_not_found(id))?;

    state.questions.delete(question.id).await?;
    tracing::info!(question_id = question.id, "question deleted");

    let questions = state.questions.list().await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        questions: paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: questions.len(),
    }))
}

/// Search questions or create one, depending on the body
///
/// POST /questions
pub async fn create_or_search_questions(
    State(state): State<AppState>,
    PageParam(page): PageParam,
    JsonBody(mut req): JsonBody<QuestionsRequest>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    match req.search_term.take() {
        Some(term) => search_questions(&state, term, page).await,
        None => create_question(&state, req, page).await,
    }
}

async fn search_questions(
    state: &AppState,
    term: Option<String>,
    page: Page,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let term = term.ok_or(ValidationError::MissingField("searchTerm"))?;
    if term.trim().is_empty() {
        return Err(ValidationError::BlankField("searchTerm").into());
    }

    let matches = state.questions.search(&term).await?;
    tracing::debug!(term = %term, hits = matches.len(), "question search");

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: paginate(&matches, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: matches.len(),
        created: None,
    }))
}

async fn create_question(
    state: &AppState,
    req: QuestionsRequest,
    page: Page,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let new_question = req.into_new_question()?;
    let created = state.questions.create(&new_question).await?;
    tracing::info!(question_id = created.id, category = created.category, "question created");

    let questions = state.questions.list().await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: questions.len(),
        created: Some(created.id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_search_term_selects_create() {
        let req: QuestionsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.search_term, None);
    }

    #[test]
    fn null_search_term_is_present() {
        let req: QuestionsRequest = serde_json::from_str(r#"{"searchTerm": null}"#).unwrap();
        assert_eq!(req.search_term, Some(None));
    }

    #[test]
    fn search_term_value_is_kept() {
        let req: QuestionsRequest = serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(req.search_term, Some(Some("title".to_string())));
    }

    #[test]
    fn create_fields_accept_string_ids() {
        let req: QuestionsRequest = serde_json::from_str(
            r#"{"question": "Q?", "answer": "A", "category": "3", "difficulty": 2}"#,
        )
        .unwrap();

        let new_question = req.into_new_question().unwrap();
        assert_eq!(new_question.category_id(), 3);
        assert_eq!(new_question.difficulty(), 2);
    }

    #[test]
    fn empty_body_fails_validation() {
        let req = QuestionsRequest::default();
        assert_eq!(
            req.into_new_question(),
            Err(ValidationError::MissingField("question"))
        );
    }
}
