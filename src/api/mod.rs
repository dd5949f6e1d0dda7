pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use crate::config::CorsOrigin;
use crate::db::Repository;
use crate::error::{error_response, AppError};
use axum::body::Bytes;
use axum::extract::Path;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::{middleware, Router};
use serde_json::Value;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub cors_origin: CorsOrigin,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, cors_origin: CorsOrigin) -> Self {
        Self { repo, cors_origin }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origin);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:category_id/questions",
            get(categories::questions_by_category).fallback(id_route_fallback),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route(
            "/questions/:question_id",
            delete(questions::delete_question).fallback(id_route_fallback),
        )
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(not_found)
        .layer(middleware::map_response(json_error_envelope))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let allow_origin = match origin {
        CorsOrigin::Any => AllowOrigin::any(),
        CorsOrigin::Exact(origin) => match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                warn!(origin = %origin, "unusable CORS origin, cross-origin requests disabled");
                AllowOrigin::list(Vec::<HeaderValue>::new())
            }
        },
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn not_found() -> AppError {
    AppError::NotFound("no route matches".into())
}

/// Wrong method on a route with an id segment. A non-numeric id never
/// matched a resource, so that is a 404 rather than a 405.
async fn id_route_fallback(Path(raw): Path<String>) -> AppError {
    match parse_path_id(&raw) {
        Ok(_) => AppError::MethodNotAllowed,
        Err(e) => e,
    }
}

/// Axum's own rejections (wrong method, oversized body, bad query string)
/// are empty or plain text. Swap in the JSON envelope, keeping the status
/// and any `Allow` header.
async fn json_error_envelope(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rewritten = error_response(status);
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(panic = %detail, "handler panicked");

    error_response(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Parse a request body as JSON. Anything unparsable is a 400.
pub(crate) fn parse_json_body(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))
}

/// Parse a numeric path segment. Non-numeric ids do not name a resource.
pub(crate) fn parse_path_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::NotFound(format!("no route for id {}", raw)))
}
