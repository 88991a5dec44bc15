//! Competition repository

use chrono::{DateTime, Utc};
use sqlx::{SqliteExecutor, SqlitePool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Competition, CompetitionStatus},
};

/// Repository for competition database operations
pub struct CompetitionRepository;

impl CompetitionRepository {
    /// Create a new competition in draft state
    pub async fn create(
        executor: impl SqliteExecutor<'_>,
        title: &str,
        description: Option<&str>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> AppResult<Competition> {
        let now = Utc::now();
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions (
                id, title, description, status, start_date, end_date, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(description)
        .bind(CompetitionStatus::Draft)
        .bind(start_date)
        .bind(end_date)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await?;

        Ok(competition)
    }

    /// Find competition by ID
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: &Uuid,
    ) -> AppResult<Option<Competition>> {
        let competition =
            sqlx::query_as::<_, Competition>(r#"SELECT * FROM competitions WHERE id = ?"#)
                .bind(id)
                .fetch_optional(executor)
                .await?;

        Ok(competition)
    }

    /// Find the currently active competition, if any
    pub async fn find_active(executor: impl SqliteExecutor<'_>) -> AppResult<Option<Competition>> {
        let competition =
            sqlx::query_as::<_, Competition>(r#"SELECT * FROM competitions WHERE status = ?"#)
                .bind(CompetitionStatus::Active)
                .fetch_optional(executor)
                .await?;

        Ok(competition)
    }

    /// Update competition metadata; `None` fields are left unchanged
    pub async fn update(
        executor: impl SqliteExecutor<'_>,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competitions
            SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                start_date = COALESCE(?, start_date),
                end_date = COALESCE(?, end_date),
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(start_date)
        .bind(end_date)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(executor)
        .await?;

        Ok(competition)
    }

    /// Move a competition to a new lifecycle status
    pub async fn update_status(
        executor: impl SqliteExecutor<'_>,
        id: &Uuid,
        status: CompetitionStatus,
    ) -> AppResult<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competitions
            SET status = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(executor)
        .await?;

        Ok(competition)
    }

    /// List competitions with pagination, optionally filtered by status
    pub async fn list(
        pool: &SqlitePool,
        offset: i64,
        limit: i64,
        status: Option<CompetitionStatus>,
    ) -> AppResult<(Vec<Competition>, i64)> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"
            SELECT * FROM competitions
            WHERE (? IS NULL OR status = ?)
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(status)
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM competitions WHERE (? IS NULL OR status = ?)"#,
        )
        .bind(status)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((competitions, count))
    }
}
