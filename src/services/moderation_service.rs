//! Moderation service
//!
//! All status changes go through the transition table on `PhotoStatus`;
//! anything the table does not allow is an invalid transition, reported as
//! such rather than applied.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::{AuditEvent, AuditSink},
    db::{
        repositories::{PhotoRepository, VoteRepository},
        Db,
    },
    error::{AppError, AppResult},
    handlers::photos::response::{ModerationResponse, PhotoResponse},
    models::{ModerationAction, PhotoStatus},
};

/// Moderation service for photo review decisions
pub struct ModerationService;

impl ModerationService {
    /// Apply a moderation action to a photo
    ///
    /// Rejection requires a non-empty reason. A photo that leaves the
    /// approved state, whether rejected or reset for re-review, has all of
    /// its votes invalidated in the same transaction.
    pub async fn moderate_photo(
        db: &Db,
        audit: &dyn AuditSink,
        moderator_id: &Uuid,
        photo_id: &Uuid,
        action: ModerationAction,
        reason: Option<&str>,
    ) -> AppResult<ModerationResponse> {
        let reason = reason.map(str::trim).filter(|r| !r.is_empty());
        if action == ModerationAction::Reject && reason.is_none() {
            return Err(AppError::MissingReason);
        }

        let mut tx = db.write().begin().await?;

        let photo = PhotoRepository::find_by_id(&mut *tx, photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        let new_status = photo.status.transition(action).ok_or_else(|| {
            AppError::InvalidTransition(format!(
                "Cannot {} a {} photo",
                action, photo.status
            ))
        })?;

        let moderated = match new_status {
            PhotoStatus::Approved => {
                PhotoRepository::set_moderation(
                    &mut *tx,
                    photo_id,
                    PhotoStatus::Approved,
                    Some(Utc::now()),
                    Some(moderator_id),
                    None,
                )
                .await?
            }
            PhotoStatus::Rejected => {
                PhotoRepository::set_moderation(
                    &mut *tx,
                    photo_id,
                    PhotoStatus::Rejected,
                    Some(Utc::now()),
                    Some(moderator_id),
                    reason,
                )
                .await?
            }
            PhotoStatus::Pending => {
                PhotoRepository::set_moderation(
                    &mut *tx,
                    photo_id,
                    PhotoStatus::Pending,
                    None,
                    None,
                    None,
                )
                .await?
            }
        };

        // Votes only ever point at approved photos; leaving that state
        // invalidates them.
        let votes_invalidated = if photo.status == PhotoStatus::Approved
            && new_status != PhotoStatus::Approved
        {
            VoteRepository::delete_by_photo(&mut *tx, photo_id).await?
        } else {
            0
        };

        tx.commit().await?;

        audit.record(AuditEvent::PhotoModerated {
            photo_id: *photo_id,
            moderator_id: *moderator_id,
            action,
            outcome: new_status,
            reason: reason.map(str::to_string),
            votes_invalidated,
        });

        Ok(ModerationResponse {
            photo: PhotoResponse::from(moderated),
            votes_invalidated,
        })
    }
}
