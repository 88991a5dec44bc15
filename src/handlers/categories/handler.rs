//! Category handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::{Permission, Principal},
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    handlers::photos::response::PhotosListResponse,
    models::PhotoStatus,
    services::{CategoryService, SubmissionService},
    state::AppState,
};

use super::{
    request::{ListCategoryPhotosQuery, UpdateCategoryRequest},
    response::{CategoryRemovalResponse, CategoryResponse, QuotaResponse},
};

/// Update a category's settings
pub async fn update_category(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    payload.validate()?;
    state
        .authorizer()
        .require(&principal, Permission::ManageCompetitions)
        .await?;

    let category = CategoryService::update_category(state.db(), &id, payload).await?;

    Ok(Json(category))
}

/// Remove a category (delete when empty, disable otherwise)
pub async fn remove_category(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CategoryRemovalResponse>> {
    state
        .authorizer()
        .require(&principal, Permission::ManageCompetitions)
        .await?;

    let outcome = CategoryService::remove_category(state.db(), &id).await?;

    Ok(Json(outcome))
}

/// List photos in a category
pub async fn list_category_photos(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Query(query): Query<ListCategoryPhotosQuery>,
) -> AppResult<Json<PhotosListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let status = match query.status.as_deref() {
        Some(raw) => Some(
            PhotoStatus::parse(raw)
                .ok_or_else(|| AppError::Validation(format!("Unknown photo status: {raw}")))?,
        ),
        None => None,
    };

    let can_moderate = state
        .authorizer()
        .has_permission(&principal, Permission::ModerateContent)
        .await;

    let (photos, total) = SubmissionService::list_category_photos(
        state.db(),
        &id,
        status,
        can_moderate,
        page,
        per_page,
    )
    .await?;

    Ok(Json(PhotosListResponse {
        photos,
        total,
        page,
        per_page,
    }))
}

/// Remaining submission slots for the calling user
pub async fn get_quota(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<QuotaResponse>> {
    let quota = SubmissionService::remaining_slots(state.db(), &principal.user_id, &id).await?;
    Ok(Json(quota))
}
