//! Category response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Category;

/// Category response
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub name: String,
    pub max_photos_per_user: i64,
    pub is_disabled: bool,
    /// Live photos currently in the category, any status
    pub photo_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryResponse {
    pub fn from_parts(category: Category, photo_count: i64) -> Self {
        Self {
            id: category.id,
            competition_id: category.competition_id,
            name: category.name,
            max_photos_per_user: category.max_photos_per_user,
            is_disabled: category.is_disabled,
            photo_count,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Category list response
#[derive(Debug, Serialize)]
pub struct CategoriesListResponse {
    pub categories: Vec<CategoryResponse>,
}

/// Outcome of removing a category
///
/// A category that never saw a photo is deleted; one with photo history is
/// disabled instead and returned in its new state.
#[derive(Debug, Serialize)]
pub struct CategoryRemovalResponse {
    pub category_id: Uuid,
    /// "deleted" or "disabled"
    pub outcome: String,
    pub category: Option<CategoryResponse>,
}

/// Remaining submission quota for the calling user in one category
#[derive(Debug, Serialize)]
pub struct QuotaResponse {
    pub category_id: Uuid,
    pub max_photos: i64,
    pub used: i64,
    pub remaining: i64,
}
