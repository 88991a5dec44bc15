//! Photo response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Photo, PhotoStatus};

/// Photo response
#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub category_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub file_path: String,
    pub status: PhotoStatus,
    pub moderated_at: Option<DateTime<Utc>>,
    pub moderated_by: Option<Uuid>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Photo> for PhotoResponse {
    fn from(photo: Photo) -> Self {
        Self {
            id: photo.id,
            competition_id: photo.competition_id,
            category_id: photo.category_id,
            user_id: photo.user_id,
            title: photo.title,
            description: photo.description,
            metadata: photo.metadata,
            file_path: photo.file_path,
            status: photo.status,
            moderated_at: photo.moderated_at,
            moderated_by: photo.moderated_by,
            rejection_reason: photo.rejection_reason,
            created_at: photo.created_at,
            updated_at: photo.updated_at,
        }
    }
}

/// Outcome of an accepted submission
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub photo: PhotoResponse,
    /// Slots the submitter still has in this category, counted in the same
    /// transaction that accepted the photo
    pub remaining_slots: i64,
}

/// Photo list response
#[derive(Debug, Serialize)]
pub struct PhotosListResponse {
    pub photos: Vec<PhotoResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Outcome of a moderation decision
#[derive(Debug, Serialize)]
pub struct ModerationResponse {
    pub photo: PhotoResponse,
    /// Votes removed because the photo left the approved state
    pub votes_invalidated: u64,
}

/// Outcome of removing a photo
#[derive(Debug, Serialize)]
pub struct PhotoRemovalResponse {
    pub photo_id: Uuid,
    pub votes_invalidated: u64,
}
