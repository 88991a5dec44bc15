//! Voting service
//!
//! One vote per voter per category. Re-voting moves the existing vote in the
//! same transaction that records the new one, so no interleaving can leave a
//! voter with two votes. Counts are always recomputed from the votes table.

use uuid::Uuid;

use crate::{
    db::{
        repositories::{CategoryRepository, PhotoRepository, VoteRepository},
        Db,
    },
    error::{AppError, AppResult},
    handlers::votes::response::{
        CategoryResultsResponse, MyVoteResponse, PhotoVotesResponse, RetractVoteResponse,
        VoteResponse,
    },
    models::PhotoStatus,
};

/// Voting service for casting, moving, and tallying votes
pub struct VotingService;

impl VotingService {
    /// Cast a vote for a photo
    ///
    /// Only approved photos can receive votes. A voter who already voted in
    /// the photo's category has that vote moved here; voting again for the
    /// same photo changes nothing.
    pub async fn cast_vote(db: &Db, voter_id: &Uuid, photo_id: &Uuid) -> AppResult<VoteResponse> {
        let mut tx = db.write().begin().await?;

        let photo = PhotoRepository::find_by_id(&mut *tx, photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        if photo.status != PhotoStatus::Approved {
            return Err(AppError::PhotoNotVotable(
                "Only approved photos can receive votes".to_string(),
            ));
        }

        let existing =
            VoteRepository::find_by_user_and_category(&mut *tx, voter_id, &photo.category_id)
                .await?;

        let previous_photo_id = match existing {
            Some(vote) if vote.photo_id == *photo_id => {
                // Same vote again; nothing moves
                let vote_count = VoteRepository::count_for_photo(&mut *tx, photo_id).await?;
                tx.commit().await?;

                return Ok(VoteResponse {
                    photo_id: *photo_id,
                    category_id: photo.category_id,
                    vote_count,
                    previous_photo_id: None,
                });
            }
            Some(vote) => {
                VoteRepository::delete_by_user_and_category(&mut *tx, voter_id, &photo.category_id)
                    .await?;
                Some(vote.photo_id)
            }
            None => None,
        };

        VoteRepository::create(&mut *tx, voter_id, &photo.category_id, photo_id).await?;
        let vote_count = VoteRepository::count_for_photo(&mut *tx, photo_id).await?;

        tx.commit().await?;

        Ok(VoteResponse {
            photo_id: *photo_id,
            category_id: photo.category_id,
            vote_count,
            previous_photo_id,
        })
    }

    /// Retract the caller's vote in a category
    ///
    /// Retracting when no vote exists is a no-op rather than an error.
    pub async fn retract_vote(
        db: &Db,
        voter_id: &Uuid,
        category_id: &Uuid,
    ) -> AppResult<RetractVoteResponse> {
        let mut tx = db.write().begin().await?;

        let existing =
            VoteRepository::find_by_user_and_category(&mut *tx, voter_id, category_id).await?;

        let Some(vote) = existing else {
            tx.commit().await?;
            return Ok(RetractVoteResponse {
                category_id: *category_id,
                removed: false,
                photo_id: None,
                vote_count: 0,
            });
        };

        VoteRepository::delete_by_user_and_category(&mut *tx, voter_id, category_id).await?;
        let vote_count = VoteRepository::count_for_photo(&mut *tx, &vote.photo_id).await?;

        tx.commit().await?;

        Ok(RetractVoteResponse {
            category_id: *category_id,
            removed: true,
            photo_id: Some(vote.photo_id),
            vote_count,
        })
    }

    /// The caller's current vote in a category, if any
    pub async fn get_my_vote(
        db: &Db,
        voter_id: &Uuid,
        category_id: &Uuid,
    ) -> AppResult<MyVoteResponse> {
        CategoryRepository::find_by_id(db.read(), category_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let vote =
            VoteRepository::find_by_user_and_category(db.read(), voter_id, category_id).await?;

        Ok(MyVoteResponse {
            category_id: *category_id,
            photo_id: vote.as_ref().map(|v| v.photo_id),
            voted_at: vote.map(|v| v.created_at),
        })
    }

    /// Current vote count for a photo
    pub async fn photo_votes(db: &Db, photo_id: &Uuid) -> AppResult<PhotoVotesResponse> {
        PhotoRepository::find_by_id(db.read(), photo_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        let votes = VoteRepository::count_for_photo(db.read(), photo_id).await?;

        Ok(PhotoVotesResponse {
            photo_id: *photo_id,
            votes,
        })
    }

    /// Vote standings for a category's approved photos
    pub async fn category_results(
        db: &Db,
        category_id: &Uuid,
    ) -> AppResult<CategoryResultsResponse> {
        CategoryRepository::find_by_id(db.read(), category_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let results = VoteRepository::tally_for_category(db.read(), category_id).await?;

        Ok(CategoryResultsResponse {
            category_id: *category_id,
            results,
        })
    }
}
