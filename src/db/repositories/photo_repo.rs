//! Photo repository
//!
//! Soft-deleted photos are filtered out here rather than in the services;
//! every query in this module treats `is_deleted = 1` rows as gone.

use chrono::{DateTime, Utc};
use sqlx::{SqliteExecutor, SqlitePool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Photo, PhotoStatus},
};

/// Repository for photo database operations
pub struct PhotoRepository;

impl PhotoRepository {
    /// Insert a new photo in pending state
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        executor: impl SqliteExecutor<'_>,
        competition_id: &Uuid,
        category_id: &Uuid,
        user_id: &Uuid,
        title: &str,
        description: Option<&str>,
        metadata: Option<serde_json::Value>,
        file_path: &str,
    ) -> AppResult<Photo> {
        let now = Utc::now();
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            INSERT INTO photos (
                id, competition_id, category_id, user_id, title, description,
                metadata, file_path, status, is_deleted, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(competition_id)
        .bind(category_id)
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(metadata)
        .bind(file_path)
        .bind(PhotoStatus::Pending)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await?;

        Ok(photo)
    }

    /// Find a live photo by ID
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: &Uuid,
    ) -> AppResult<Option<Photo>> {
        let photo =
            sqlx::query_as::<_, Photo>(r#"SELECT * FROM photos WHERE id = ? AND is_deleted = 0"#)
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(photo)
    }

    /// Number of a user's photos in a category that currently occupy quota
    /// slots (pending or approved, not soft-deleted).
    pub async fn count_quota_used(
        executor: impl SqliteExecutor<'_>,
        user_id: &Uuid,
        category_id: &Uuid,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM photos
            WHERE user_id = ? AND category_id = ? AND is_deleted = 0
                AND status IN ('pending', 'approved')
            "#,
        )
        .bind(user_id)
        .bind(category_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// Number of live photos in a category, any status
    pub async fn count_live_in_category(
        executor: impl SqliteExecutor<'_>,
        category_id: &Uuid,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM photos WHERE category_id = ? AND is_deleted = 0"#,
        )
        .bind(category_id)
        .fetch_one(executor)
        .await?;

        Ok(count)
    }

    /// List live photos in a category, optionally filtered by status
    pub async fn list_by_category(
        pool: &SqlitePool,
        category_id: &Uuid,
        status: Option<PhotoStatus>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Photo>, i64)> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT * FROM photos
            WHERE category_id = ? AND is_deleted = 0 AND (? IS NULL OR status = ?)
            ORDER BY created_at ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(category_id)
        .bind(status)
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM photos
            WHERE category_id = ? AND is_deleted = 0 AND (? IS NULL OR status = ?)
            "#,
        )
        .bind(category_id)
        .bind(status)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((photos, count))
    }

    /// List a user's live photos, optionally scoped to one competition
    pub async fn list_by_user(
        pool: &SqlitePool,
        user_id: &Uuid,
        competition_id: Option<&Uuid>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Photo>, i64)> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
            SELECT * FROM photos
            WHERE user_id = ? AND is_deleted = 0 AND (? IS NULL OR competition_id = ?)
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .bind(competition_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM photos
            WHERE user_id = ? AND is_deleted = 0 AND (? IS NULL OR competition_id = ?)
            "#,
        )
        .bind(user_id)
        .bind(competition_id)
        .bind(competition_id)
        .fetch_one(pool)
        .await?;

        Ok((photos, count))
    }

    /// Apply a moderation outcome to a photo. The three moderation fields are
    /// always written together so the row never mixes states.
    pub async fn set_moderation(
        executor: impl SqliteExecutor<'_>,
        id: &Uuid,
        status: PhotoStatus,
        moderated_at: Option<DateTime<Utc>>,
        moderated_by: Option<&Uuid>,
        rejection_reason: Option<&str>,
    ) -> AppResult<Photo> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
            UPDATE photos
            SET status = ?, moderated_at = ?, moderated_by = ?, rejection_reason = ?,
                updated_at = ?
            WHERE id = ? AND is_deleted = 0
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(moderated_at)
        .bind(moderated_by)
        .bind(rejection_reason)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(executor)
        .await?;

        Ok(photo)
    }

    /// Soft-delete a photo. Returns the number of rows affected; zero means
    /// the photo was already gone.
    pub async fn soft_delete(executor: impl SqliteExecutor<'_>, id: &Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            r#"UPDATE photos SET is_deleted = 1, updated_at = ? WHERE id = ? AND is_deleted = 0"#,
        )
        .bind(Utc::now())
        .bind(id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
