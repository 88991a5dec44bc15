//! Category request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_CATEGORY_NAME_LENGTH, MAX_PHOTOS_PER_USER_LIMIT};

/// Create category request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = MAX_CATEGORY_NAME_LENGTH))]
    pub name: String,

    /// How many live photos one user may have in this category
    #[validate(range(min = 1, max = MAX_PHOTOS_PER_USER_LIMIT))]
    pub max_photos_per_user: i64,
}

/// Update category request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = MAX_CATEGORY_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = MAX_PHOTOS_PER_USER_LIMIT))]
    pub max_photos_per_user: Option<i64>,

    pub is_disabled: Option<bool>,
}

/// List category photos query parameters
#[derive(Debug, Deserialize)]
pub struct ListCategoryPhotosQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// pending, approved, rejected (moderators only; others see approved)
    pub status: Option<String>,
}
