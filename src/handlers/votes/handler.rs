//! Vote handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    auth::{Permission, Principal},
    error::AppResult,
    services::VotingService,
    state::AppState,
};

use super::response::{
    CategoryResultsResponse, MyVoteResponse, PhotoVotesResponse, RetractVoteResponse, VoteResponse,
};

/// Cast a vote for a photo
pub async fn cast_vote(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VoteResponse>> {
    state
        .authorizer()
        .require(&principal, Permission::CastVotes)
        .await?;

    let vote = VotingService::cast_vote(state.db(), &principal.user_id, &id).await?;

    Ok(Json(vote))
}

/// Current vote count for a photo
pub async fn get_photo_votes(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PhotoVotesResponse>> {
    let votes = VotingService::photo_votes(state.db(), &id).await?;
    Ok(Json(votes))
}

/// The calling user's vote in a category
pub async fn get_my_vote(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MyVoteResponse>> {
    let vote = VotingService::get_my_vote(state.db(), &principal.user_id, &id).await?;
    Ok(Json(vote))
}

/// Retract the calling user's vote in a category
pub async fn retract_vote(
    State(state): State<AppState>,
    principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RetractVoteResponse>> {
    state
        .authorizer()
        .require(&principal, Permission::CastVotes)
        .await?;

    let outcome = VotingService::retract_vote(state.db(), &principal.user_id, &id).await?;

    Ok(Json(outcome))
}

/// Vote standings for a category
pub async fn get_category_results(
    State(state): State<AppState>,
    _principal: Principal,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CategoryResultsResponse>> {
    let results = VotingService::category_results(state.db(), &id).await?;
    Ok(Json(results))
}
