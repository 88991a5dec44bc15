//! Vote response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::VoteTally;

/// Outcome of casting a vote
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub photo_id: Uuid,
    pub category_id: Uuid,
    /// Vote count for the photo after this vote landed
    pub vote_count: i64,
    /// Photo the vote moved away from, when the voter had voted elsewhere
    pub previous_photo_id: Option<Uuid>,
}

/// Vote count for a single photo
#[derive(Debug, Serialize)]
pub struct PhotoVotesResponse {
    pub photo_id: Uuid,
    pub votes: i64,
}

/// The caller's vote in a category
#[derive(Debug, Serialize)]
pub struct MyVoteResponse {
    pub category_id: Uuid,
    pub photo_id: Option<Uuid>,
    pub voted_at: Option<DateTime<Utc>>,
}

/// Outcome of retracting a vote
#[derive(Debug, Serialize)]
pub struct RetractVoteResponse {
    pub category_id: Uuid,
    pub removed: bool,
    /// Photo the retracted vote pointed at
    pub photo_id: Option<Uuid>,
    /// Vote count for that photo after removal
    pub vote_count: i64,
}

/// Vote standings for a category
#[derive(Debug, Serialize)]
pub struct CategoryResultsResponse {
    pub category_id: Uuid,
    /// Approved photos with their counts, best first
    pub results: Vec<VoteTally>,
}
