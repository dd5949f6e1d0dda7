use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::questions::QuestionListResponse;
use super::{parse_path_id, AppState};
use crate::domain::{category_map, CategoryMap};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// An empty catalog is reported as 404 so clients can detect an unseeded database.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.repo.list_categories().await?;
    if categories.is_empty() {
        return Err(AppError::NotFound("no categories".into()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

pub async fn questions_by_category(
    Path(category_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let category_id = parse_path_id(&category_id)?;

    let questions = state.repo.questions_in_category(category_id).await?;
    Ok(Json(QuestionListResponse::new(questions, Some(category_id))))
}
