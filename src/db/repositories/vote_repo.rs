//! Vote repository
//!
//! Vote counts are never cached on the photo row; they are recomputed from
//! the votes table whenever a caller needs them.

use chrono::Utc;
use sqlx::{SqliteExecutor, SqlitePool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Vote, VoteTally},
};

/// Repository for vote database operations
pub struct VoteRepository;

impl VoteRepository {
    /// Insert a vote for a photo
    pub async fn create(
        executor: impl SqliteExecutor<'_>,
        user_id: &Uuid,
        category_id: &Uuid,
        photo_id: &Uuid,
    ) -> AppResult<Vote> {
        let vote = sqlx::query_as::<_, Vote>(
            r#"
            INSERT INTO votes (id, user_id, category_id, photo_id, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(category_id)
        .bind(photo_id)
        .bind(Utc::now())
        .fetch_one(executor)
        .await?;

        Ok(vote)
    }

    /// Find a user's vote within a category, if they hold one
    pub async fn find_by_user_and_category(
        executor: impl SqliteExecutor<'_>,
        user_id: &Uuid,
        category_id: &Uuid,
    ) -> AppResult<Option<Vote>> {
        let vote = sqlx::query_as::<_, Vote>(
            r#"SELECT * FROM votes WHERE user_id = ? AND category_id = ?"#,
        )
        .bind(user_id)
        .bind(category_id)
        .fetch_optional(executor)
        .await?;

        Ok(vote)
    }

    /// Remove a user's vote within a category. Returns rows affected; zero
    /// means there was no vote to remove.
    pub async fn delete_by_user_and_category(
        executor: impl SqliteExecutor<'_>,
        user_id: &Uuid,
        category_id: &Uuid,
    ) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM votes WHERE user_id = ? AND category_id = ?"#)
            .bind(user_id)
            .bind(category_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Remove every vote pointing at a photo. Used when a photo leaves the
    /// approved state or is removed.
    pub async fn delete_by_photo(
        executor: impl SqliteExecutor<'_>,
        photo_id: &Uuid,
    ) -> AppResult<u64> {
        let result = sqlx::query(r#"DELETE FROM votes WHERE photo_id = ?"#)
            .bind(photo_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Current vote count for a photo
    pub async fn count_for_photo(
        executor: impl SqliteExecutor<'_>,
        photo_id: &Uuid,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM votes WHERE photo_id = ?"#)
            .bind(photo_id)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    /// Vote counts for every approved photo in a category, most votes first.
    /// Photos without votes appear with a count of zero.
    pub async fn tally_for_category(
        pool: &SqlitePool,
        category_id: &Uuid,
    ) -> AppResult<Vec<VoteTally>> {
        let tallies = sqlx::query_as::<_, VoteTally>(
            r#"
            SELECT p.id AS photo_id, COUNT(v.id) AS votes
            FROM photos p
            LEFT JOIN votes v ON v.photo_id = p.id
            WHERE p.category_id = ? AND p.is_deleted = 0 AND p.status = 'approved'
            GROUP BY p.id
            ORDER BY votes DESC, p.created_at ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(pool)
        .await?;

        Ok(tallies)
    }
}
