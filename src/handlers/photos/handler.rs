//! Photo handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::{Permission, Principal},
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    models::ModerationAction,
    services::{ModerationService, SubmissionService},
    state::AppState,
};

use super::{
    request::{ModeratePhotoRequest, MyPhotosQuery, SubmitPhotoRequest},
    response::{
        ModerationResponse, PhotoRemovalResponse, PhotoResponse, PhotosListResponse,
        SubmissionResponse,
    },
};

/// Submit a photo into a category
pub async fn submit_photo(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<SubmitPhotoRequest>,
) -> AppResult<(StatusCode, Json<SubmissionResponse>)> {
    payload.validate()?;
    state
        .authorizer()
        .require(&principal, Permission::SubmitPhotos)
        .await?;

    let submission =
        SubmissionService::submit_photo(state.db(), &principal.user_id, payload).await?;

    Ok((StatusCode::CREATED, Json(submission)))
}

/// List the calling user's photos
pub async fn my_photos(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<MyPhotosQuery>,
) -> AppResult<Json<PhotosListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let (photos, total) = SubmissionService::list_my_photos(
        state.db(),
        &principal.user_id,
        query.competition_id.as_ref(),
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

/// Get a photo by ID
pub async fn get_photo(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PhotoResponse>> {
    let can_moderate = state
        .authorizer()
        .has_permission(&principal, Permission::ModerateContent)
        .await;

    let photo = SubmissionService::get_photo(state.db(), &id, &principal.user_id, can_moderate)
        .await?;

    Ok(Json(photo))
}

/// Remove a photo
pub async fn remove_photo(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PhotoRemovalResponse>> {
    let can_moderate = state
        .authorizer()
        .has_permission(&principal, Permission::ModerateContent)
        .await;

    let outcome = SubmissionService::remove_photo(
        state.db(),
        state.audit(),
        &principal.user_id,
        can_moderate,
        &id,
    )
    .await?;

    Ok(Json(outcome))
}

/// Apply a moderation decision to a photo
pub async fn moderate_photo(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Json(payload): Json<ModeratePhotoRequest>,
) -> AppResult<Json<ModerationResponse>> {
    payload.validate()?;
    state
        .authorizer()
        .require(&principal, Permission::ModerateContent)
        .await?;

    let action = ModerationAction::parse(&payload.action).ok_or_else(|| {
        AppError::Validation(format!("Unknown moderation action: {}", payload.action))
    })?;

    let outcome = ModerationService::moderate_photo(
        state.db(),
        state.audit(),
        &principal.user_id,
        &id,
        action,
        payload.reason.as_deref(),
    )
    .await?;

    Ok(Json(outcome))
}
