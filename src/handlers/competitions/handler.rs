//! Competition handler implementations

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
    handlers::categories::{
        request::CreateCategoryRequest,
        response::{CategoriesListResponse, CategoryResponse},
    },
    models::CompetitionStatus,
    services::{CategoryService, CompetitionService},
    state::AppState,
};

use super::{
    request::{CreateCompetitionRequest, ListCompetitionsQuery, UpdateCompetitionRequest},
    response::{ActivationResponse, CompetitionResponse, CompetitionsListResponse},
};

/// List competitions (with optional status filter)
pub async fn list_competitions(
    State(state): State<AppState>,
    _principal: Principal,
    Query(query): Query<ListCompetitionsQuery>,
) -> AppResult<Json<CompetitionsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let status = match query.status.as_deref() {
        Some(raw) => Some(CompetitionStatus::parse(raw).ok_or_else(|| {
            AppError::Validation(format!("Unknown competition status: {raw}"))
        })?),
        None => None,
    };

    let (competitions, total) =
        CompetitionService::list_competitions(state.db(), page, per_page, status).await?;

    Ok(Json(CompetitionsListResponse {
        competitions,
        total,
        page,
        per_page,
    }))
}

/// Create a new competition
pub async fn create_competition(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<CreateCompetitionRequest>,
) -> AppResult<(StatusCode, Json<CompetitionResponse>)> {
    payload.validate()?;
    state
        .authorizer()
        .require(&principal, Permission::ManageCompetitions)
        .await?;

    let competition = CompetitionService::create_competition(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(competition)))
}

/// Get the currently active competition
pub async fn get_active_competition(
    State(state): State<AppState>,
    _principal: Principal,
) -> AppResult<Json<CompetitionResponse>> {
    let competition = CompetitionService::get_active_competition(state.db()).await?;
    Ok(Json(competition))
}

/// Get a specific competition
pub async fn get_competition(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CompetitionResponse>> {
    let competition = CompetitionService::get_competition(state.db(), &id).await?;
    Ok(Json(competition))
}

/// Update a competition's metadata
pub async fn update_competition(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCompetitionRequest>,
) -> AppResult<Json<CompetitionResponse>> {
    payload.validate()?;
    state
        .authorizer()
        .require(&principal, Permission::ManageCompetitions)
        .await?;

    let competition = CompetitionService::update_competition(state.db(), &id, payload).await?;

    Ok(Json(competition))
}

/// Make a competition the active one, demoting the previous active
pub async fn activate_competition(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ActivationResponse>> {
    state
        .authorizer()
        .require(&principal, Permission::ManageCompetitions)
        .await?;

    let outcome = CompetitionService::activate_competition(
        state.db(),
        state.audit(),
        &principal.user_id,
        &id,
    )
    .await?;

    Ok(Json(outcome))
}

/// Take a competition out of the active state
pub async fn deactivate_competition(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CompetitionResponse>> {
    state
        .authorizer()
        .require(&principal, Permission::ManageCompetitions)
        .await?;

    let competition = CompetitionService::deactivate_competition(
        state.db(),
        state.audit(),
        &principal.user_id,
        &id,
    )
    .await?;

    Ok(Json(competition))
}

/// Close a competition permanently
pub async fn complete_competition(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CompetitionResponse>> {
    state
        .authorizer()
        .require(&principal, Permission::ManageCompetitions)
        .await?;

    let competition = CompetitionService::complete_competition(
        state.db(),
        state.audit(),
        &principal.user_id,
        &id,
    )
    .await?;

    Ok(Json(competition))
}

/// List a competition's categories
pub async fn list_categories(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CategoriesListResponse>> {
    let categories = CategoryService::list_categories(state.db(), &id).await?;
    Ok(Json(CategoriesListResponse { categories }))
}

/// Add a category to a competition
pub async fn create_category(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    payload.validate()?;
    state
        .authorizer()
        .require(&principal, Permission::ManageCompetitions)
        .await?;

    let category = CategoryService::create_category(state.db(), &id, payload).await?;

    Ok((StatusCode::CREATED, Json(category)))
}
