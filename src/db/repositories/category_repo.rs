//! Category repository

use chrono::Utc;
use sqlx::{SqliteExecutor, SqlitePool};
use uuid::Uuid;

use crate::{error::AppResult, models::Category};

/// Repository for category database operations
pub struct CategoryRepository;

impl CategoryRepository {
    /// Create a new category within a competition
    pub async fn create(
        executor: impl SqliteExecutor<'_>,
        competition_id: &Uuid,
        name: &str,
        max_photos_per_user: i64,
    ) -> AppResult<Category> {
        let now = Utc::now();
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (
                id, competition_id, name, max_photos_per_user, is_disabled, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, 0, ?, ?)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(competition_id)
        .bind(name)
        .bind(max_photos_per_user)
        .bind(now)
        .bind(now)
        .fetch_one(executor)
        .await?;

        Ok(category)
    }

    /// Find category by ID
    pub async fn find_by_id(
        executor: impl SqliteExecutor<'_>,
        id: &Uuid,
    ) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(r#"SELECT * FROM categories WHERE id = ?"#)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(category)
    }

    /// List all categories of a competition
    pub async fn list_by_competition(
        pool: &SqlitePool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"SELECT * FROM categories WHERE competition_id = ? ORDER BY created_at ASC"#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    /// Update category settings; `None` fields are left unchanged
    pub async fn update(
        executor: impl SqliteExecutor<'_>,
        id: &Uuid,
        name: Option<&str>,
        max_photos_per_user: Option<i64>,
        is_disabled: Option<bool>,
    ) -> AppResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET
                name = COALESCE(?, name),
                max_photos_per_user = COALESCE(?, max_photos_per_user),
                is_disabled = COALESCE(?, is_disabled),
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(max_photos_per_user)
        .bind(is_disabled)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(executor)
        .await?;

        Ok(category)
    }

    /// Delete a category row
    pub async fn delete(executor: impl SqliteExecutor<'_>, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM categories WHERE id = ?"#)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Count every photo row referencing a category, soft-deleted included.
    /// Deletion is only safe when this is zero.
    pub async fn count_photo_rows(
        executor: impl SqliteExecutor<'_>,
        category_id: &Uuid,
    ) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM photos WHERE category_id = ?"#)
                .bind(category_id)
                .fetch_one(executor)
                .await?;

        Ok(count)
    }
}
