use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{parse_json_body, parse_path_id, AppState};
use crate::domain::{category_map, paginate, parse_page, CategoryMap, NewQuestion, Question};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaginatedQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

/// A filtered question list, shared by search and category listings.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

impl QuestionListResponse {
    pub fn new(questions: Vec<Question>, current_category: Option<i64>) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

/// An unreadable query string (e.g. a repeated `page`) selects the first page.
pub async fn list_questions(
    query: Result<Query<PageQuery>, QueryRejection>,
    State(state): State<AppState>,
) -> Result<Json<PaginatedQuestionsResponse>, AppError> {
    let page = match query {
        Ok(Query(params)) => parse_page(params.page.as_deref()),
        Err(rejection) => {
            debug!(error = %rejection, "ignoring unreadable query string");
            parse_page(None)
        }
    };

    let questions = state.repo.list_questions().await?;
    let total_questions = questions.len();
    let categories = category_map(state.repo.list_categories().await?);

    Ok(Json(PaginatedQuestionsResponse {
        success: true,
        questions: paginate(questions, page),
        total_questions,
        categories,
        current_category: None,
    }))
}

pub async fn create_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreatedResponse>, AppError> {
    let body = parse_json_body(&body)?;
    let question =
        NewQuestion::from_json(&body).map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let id = state
        .repo
        .insert_question(&question)
        .await
        .map_err(|e| AppError::Internal(format!("question insert failed: {}", e)))?;

    info!(id, category = question.category, "question created");
    Ok(Json(CreatedResponse {
        success: true,
        created: id,
    }))
}

pub async fn delete_question(
    Path(question_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeletedResponse>, AppError> {
    let id = parse_path_id(&question_id)?;

    if !state.repo.delete_question(id).await? {
        return Err(AppError::Unprocessable(format!("question {} does not exist", id)));
    }

    info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

pub async fn search_questions(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QuestionListResponse>, AppError> {
    let body = parse_json_body(&body)?;
    let term = match body.get("searchTerm") {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return Err(AppError::Unprocessable("searchTerm must be a string".into())),
    };

    if term.is_empty() {
        return Err(AppError::NotFound("empty search term".into()));
    }

    let questions = state.repo.search_questions(term).await?;
    Ok(Json(QuestionListResponse::new(questions, None)))
}
