// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod extract;
pub mod handlers;
pub mod state;

use std::any::Any;

use axum::{
    http::{header, Method, StatusCode, Uri},
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use errors::ApiError;
use handlers::{categories, health, questions, quizzes};
use state::AppState;

/// Builds the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Category routes
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:cat_id/questions",
            get(categories::list_questions_by_category),
        )
        // Question routes
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_or_search_questions),
        )
        .route("/questions/:id", delete(questions::delete_question))
        // Quiz routes
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(route_not_found)
        // Middleware
        .layer(map_response(method_not_allowed_envelope))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("no route for {}", uri.path()))
}

/// Replaces the router's empty 405 body with the error envelope
async fn method_not_allowed_envelope(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut envelope =
        ApiError::method_not_allowed("method not allowed for route").into_response();
    if let Some(allow) = allow {
        envelope.headers_mut().insert(header::ALLOW, allow);
    }
    envelope
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::internal_server_error(detail).into_response()
}
