//! Submission service
//!
//! Quota enforcement lives here. The count-then-insert sequence runs inside
//! one write transaction, and because the write pool holds a single
//! connection, two submissions for the same slot can never interleave.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::{AuditEvent, AuditSink},
    db::{
        repositories::{CategoryRepository, CompetitionRepository, PhotoRepository, VoteRepository},
        Db,
    },
    error::{AppError, AppResult},
    handlers::{
        categories::response::QuotaResponse,
        photos::{
            request::SubmitPhotoRequest,
            response::{PhotoRemovalResponse, PhotoResponse, SubmissionResponse},
        },
    },
    models::{Photo, PhotoStatus},
    utils::validation::{sanitize_string, validate_file_path, validate_metadata},
};

/// Submission service for photo intake and quota accounting
pub struct SubmissionService;

impl SubmissionService {
    /// Submit a photo into a category
    ///
    /// The photo lands in pending state. Rejected and removed photos do not
    /// occupy quota slots, so a user whose photo was rejected may submit a
    /// replacement immediately.
    pub async fn submit_photo(
        db: &Db,
        user_id: &Uuid,
        payload: SubmitPhotoRequest,
    ) -> AppResult<SubmissionResponse> {
        validate_file_path(&payload.file_path)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let title = sanitize_string(&payload.title);
        if title.is_empty() {
            return Err(AppError::Validation("Title cannot be empty".to_string()));
        }
        let description = payload
            .description
            .as_deref()
            .map(sanitize_string)
            .filter(|d| !d.is_empty());

        if let Some(metadata) = &payload.metadata {
            validate_metadata(metadata).map_err(|msg| AppError::Validation(msg.to_string()))?;
        }

        let mut tx = db.write().begin().await?;

        let category = CategoryRepository::find_by_id(&mut *tx, &payload.category_id)
            .await?
            .ok_or_else(|| AppError::InvalidCategory("Unknown category".to_string()))?;

        let competition = CompetitionRepository::find_by_id(&mut *tx, &category.competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        if !competition.is_open_for_submission(Utc::now()) {
            return Err(AppError::CompetitionClosed);
        }

        if !category.accepts_submissions() {
            return Err(AppError::InvalidCategory(
                "Category is disabled".to_string(),
            ));
        }

        let used =
            PhotoRepository::count_quota_used(&mut *tx, user_id, &payload.category_id).await?;
        if used >= category.max_photos_per_user {
            return Err(AppError::QuotaExceeded {
                max_photos: category.max_photos_per_user,
                remaining_slots: (category.max_photos_per_user - used).max(0),
            });
        }

        let photo = PhotoRepository::create(
            &mut *tx,
            &category.competition_id,
            &payload.category_id,
            user_id,
            &title,
            description.as_deref(),
            payload.metadata,
            &payload.file_path,
        )
        .await?;

        tx.commit().await?;

        Ok(SubmissionResponse {
            photo: PhotoResponse::from(photo),
            remaining_slots: (category.max_photos_per_user - used - 1).max(0),
        })
    }

    /// How many submission slots a user still has in a category
    pub async fn remaining_slots(
        db: &Db,
        user_id: &Uuid,
        category_id: &Uuid,
    ) -> AppResult<QuotaResponse> {
        let category = CategoryRepository::find_by_id(db.read(), category_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let used = PhotoRepository::count_quota_used(db.read(), user_id, category_id).await?;

        Ok(QuotaResponse {
            category_id: *category_id,
            max_photos: category.max_photos_per_user,
            used,
            remaining: (category.max_photos_per_user - used).max(0),
        })
    }

    /// Get a photo by ID
    ///
    /// Approved photos are public. Pending and rejected photos are visible
    /// only to their submitter and to moderators.
    pub async fn get_photo(
        db: &Db,
        id: &Uuid,
        viewer_id: &Uuid,
        can_moderate: bool,
    ) -> AppResult<PhotoResponse> {
        let photo = PhotoRepository::find_by_id(db.read(), id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        if !photo_visible_to(&photo, viewer_id, can_moderate) {
            return Err(AppError::NotFound("Photo not found".to_string()));
        }

        Ok(PhotoResponse::from(photo))
    }

    /// List photos in a category
    ///
    /// Non-moderators always get the approved gallery; requesting another
    /// status filter requires moderator permission.
    pub async fn list_category_photos(
        db: &Db,
        category_id: &Uuid,
        status: Option<PhotoStatus>,
        can_moderate: bool,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<PhotoResponse>, i64)> {
        CategoryRepository::find_by_id(db.read(), category_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let effective_status = if can_moderate {
            status
        } else {
            match status {
                None | Some(PhotoStatus::Approved) => Some(PhotoStatus::Approved),
                Some(_) => {
                    return Err(AppError::Forbidden(
                        "Moderator permission required to view unapproved photos".to_string(),
                    ));
                }
            }
        };

        let offset = ((page - 1) * per_page) as i64;
        let (photos, total) = PhotoRepository::list_by_category(
            db.read(),
            category_id,
            effective_status,
            offset,
            per_page as i64,
        )
        .await?;

        Ok((photos.into_iter().map(PhotoResponse::from).collect(), total))
    }

    /// List the caller's own photos, optionally scoped to one competition
    pub async fn list_my_photos(
        db: &Db,
        user_id: &Uuid,
        competition_id: Option<&Uuid>,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<PhotoResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let (photos, total) = PhotoRepository::list_by_user(
            db.read(),
            user_id,
            competition_id,
            offset,
            per_page as i64,
        )
        .await?;

        Ok((photos.into_iter().map(PhotoResponse::from).collect(), total))
    }

    /// Remove a photo
    ///
    /// Submitters may remove their own photos; moderators may remove any.
    /// Removal frees the quota slot and invalidates any votes the photo had
    /// collected, in the same transaction.
    pub async fn remove_photo(
        db: &Db,
        audit: &dyn AuditSink,
        actor_id: &Uuid,
        can_moderate: bool,
        photo_id: &Uuid,
    ) -> AppResult<PhotoRemovalResponse> {
        let mut tx = db.write().begin().await?;

        let photo = PhotoRepository::find_by_id(&mut *tx, photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        if photo.user_id != *actor_id && !can_moderate {
            return Err(AppError::Forbidden(
                "Cannot remove other users' photos".to_string(),
            ));
        }

        PhotoRepository::soft_delete(&mut *tx, photo_id).await?;
        let votes_invalidated = VoteRepository::delete_by_photo(&mut *tx, photo_id).await?;

        tx.commit().await?;

        audit.record(AuditEvent::PhotoRemoved {
            photo_id: *photo_id,
            actor_id: *actor_id,
            votes_invalidated,
        });

        Ok(PhotoRemovalResponse {
            photo_id: *photo_id,
            votes_invalidated,
        })
    }
}

fn photo_visible_to(photo: &Photo, viewer_id: &Uuid, can_moderate: bool) -> bool {
    photo.status == PhotoStatus::Approved || photo.user_id == *viewer_id || can_moderate
}
