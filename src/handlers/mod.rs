//! HTTP handlers and routing

pub mod category;
pub mod health;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;
use crate::error::ServiceError;
use crate::models::error::ErrorResponse;

pub const CATEGORIES_PATH: &str = "/api/v1/categories";

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            CATEGORIES_PATH,
            get(category::filter_categories).post(category::create_category),
        )
        .route(
            &format!("{}/{{category_id}}", CATEGORIES_PATH),
            get(category::find_category)
                .put(category::update_category)
                .delete(category::disable_category),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Convert service errors to HTTP responses
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServiceError::Validation { message, fields } => {
                let mut body = ErrorResponse::new("validation_error", message);
                if !fields.is_empty() {
                    body.fields = Some(fields.into_map());
                }
                (StatusCode::BAD_REQUEST, body)
            }
            ServiceError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new("not_found", msg))
            }
            ServiceError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("internal_error", "An internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
