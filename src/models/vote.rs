//! Vote model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vote database model
///
/// A voter holds at most one vote per category; re-voting moves the existing
/// vote rather than adding a second one. That invariant is also enforced by a
/// unique index on `(user_id, category_id)`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Vote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub photo_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Vote count for one photo, as produced by the category tally
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VoteTally {
    pub photo_id: Uuid,
    pub votes: i64,
}
