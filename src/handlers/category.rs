//! Category Handlers
//!
//! `/api/v1/categories` endpoints. Every operation is a call into the
//! query and/or management service held by `AppState`.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::models::category::{CategoryDetailOutput, CategoryInput};
use crate::models::page::{PageModel, PageQuery};
use crate::AppState;

/// GET /api/v1/categories
///
/// # Query Parameters
///
/// - `page` - Zero-based page index (default: 0)
/// - `size` - Page size (default: 10)
///
/// `page * size` must fit in a signed 64-bit offset.
pub async fn filter_categories(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<Json<PageModel<CategoryDetailOutput>>, ServiceError> {
    if let Err(e) = query.validate() {
        warn!(error = %e, "Invalid query parameters");
        return Err(ServiceError::validation(e));
    }

    let (page, size) = (query.page(), query.size());
    debug!(page, size, "Category list request received");

    let categories = state.category_query.filter(size, page).await?;
    Ok(Json(categories))
}

/// POST /api/v1/categories
///
/// Creates the category, then reads it back. Returns 201 with the projection.
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> Result<(StatusCode, Json<CategoryDetailOutput>), ServiceError> {
    input.check()?;

    let category_id = state.category_management.create(input).await?;
    info!(category_id = %category_id, "Category created");

    let category = read_back(&state, category_id).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/categories/{category_id}
pub async fn find_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<Uuid>,
) -> Result<Json<CategoryDetailOutput>, ServiceError> {
    let category = state.category_query.find_by_id(category_id).await?;
    Ok(Json(category))
}

/// PUT /api/v1/categories/{category_id}
pub async fn update_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<CategoryInput>,
) -> Result<Json<CategoryDetailOutput>, ServiceError> {
    input.check()?;

    state
        .category_management
        .update(category_id, input)
        .await?;
    info!(category_id = %category_id, "Category updated");

    let category = read_back(&state, category_id).await?;
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{category_id}
///
/// Disables the category; nothing is deleted.
pub async fn disable_category(
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<Uuid>,
) -> Result<StatusCode, ServiceError> {
    state.category_management.disable(category_id).await?;
    info!(category_id = %category_id, "Category disabled");

    Ok(StatusCode::NO_CONTENT)
}

/// The write already succeeded when this runs, so a failure here is logged
/// before being returned to the client.
async fn read_back(
    state: &AppState,
    category_id: Uuid,
) -> Result<CategoryDetailOutput, ServiceError> {
    state
        .category_query
        .find_by_id(category_id)
        .await
        .inspect_err(|e| {
            warn!(
                category_id = %category_id,
                error = %e,
                "Category write succeeded but read-back failed"
            )
        })
}
