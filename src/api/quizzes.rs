use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{parse_json_body, AppState};
use crate::domain::{coerce_int, Question};
use crate::error::AppError;

/// Category id clients send to draw from every category.
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub category: Option<i64>,
}

impl QuizRequest {
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let previous_questions = match body.get("previous_questions") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(ids)) => ids
                .iter()
                .map(|id| {
                    coerce_int(id).ok_or_else(|| {
                        AppError::Unprocessable("previous_questions must hold ids".into())
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(AppError::Unprocessable(
                    "previous_questions must be a list".into(),
                ))
            }
        };

        let category_id = body
            .get("quiz_category")
            .and_then(|c| c.get("id"))
            .ok_or_else(|| AppError::Unprocessable("quiz_category.id is required".into()))?;
        let category_id = coerce_int(category_id)
            .ok_or_else(|| AppError::Unprocessable("quiz_category.id must be an integer".into()))?;

        Ok(QuizRequest {
            previous_questions,
            category: (category_id != ALL_CATEGORIES).then_some(category_id),
        })
    }
}

/// `question` is omitted once the pool of unseen questions is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

pub async fn play_quiz(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QuizResponse>, AppError> {
    let body = parse_json_body(&body)?;
    let request = QuizRequest::from_json(&body)?;

    let question = state
        .repo
        .random_unseen_question(request.category, &request.previous_questions)
        .await?;

    debug!(
        category = ?request.category,
        seen = request.previous_questions.len(),
        drawn = ?question.as_ref().map(|q| q.id),
        "quiz draw"
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
