//! Category model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Category database model
///
/// A category belongs to exactly one competition and scopes the per-user
/// submission quota. Categories referenced by photos are never hard-deleted,
/// only disabled.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub name: String,
    pub max_photos_per_user: i64,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// A disabled category accepts no new submissions or votes.
    pub fn accepts_submissions(&self) -> bool {
        !self.is_disabled
    }
}
