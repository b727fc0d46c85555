use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::extract::{IdPath, PageParam};
use crate::api::state::AppState;
use crate::domain::category::category_map;
use crate::domain::errors::RepositoryError;
use crate::domain::pagination::{paginate, QUESTIONS_PER_PAGE};
use crate::domain::question::Question;

/// Response listing every category
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
}

/// Response for one page of a category's questions
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<String>,
    pub current_category: String,
}

/// List all categories as an `id -> type` mapping
///
/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.categories.list().await?;
    if categories.is_empty() {
        return Err(ApiError::not_found("no categories stored"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// List one page of the questions in a category
///
/// GET /categories/:cat_id/questions
pub async fn list_questions_by_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
    PageParam(page): PageParam,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .categories
        .find_by_id(category_id)
        .await?
        .ok_or_else(|| RepositoryError::category_not_found(category_id))?;

    let questions = state.questions.find_by_category(category.id).await?;
    let current = paginate(&questions, page, QUESTIONS_PER_PAGE);
    if current.is_empty() {
        return Err(ApiError::not_found(format!(
            "no questions in category {} on page {}",
            category.id,
            page.number()
        )));
    }

    let categories = state.categories.list().await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: categories.into_iter().map(|c| c.kind).collect(),
        current_category: category.kind,
    }))
}
