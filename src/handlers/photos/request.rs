//! Photo request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    MAX_FILE_PATH_LENGTH, MAX_PHOTO_DESCRIPTION_LENGTH, MAX_PHOTO_TITLE_LENGTH,
    MAX_REJECTION_REASON_LENGTH,
};

/// Submit photo request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitPhotoRequest {
    /// Category receiving the submission
    pub category_id: Uuid,

    #[validate(length(min = 1, max = MAX_PHOTO_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_PHOTO_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// Free-form capture metadata (EXIF extract, camera, etc.)
    pub metadata: Option<serde_json::Value>,

    /// Reference into blob storage where the image bytes live
    #[validate(length(min = 1, max = MAX_FILE_PATH_LENGTH))]
    pub file_path: String,
}

/// Moderate photo request
#[derive(Debug, Deserialize, Validate)]
pub struct ModeratePhotoRequest {
    /// approve, reject, or reset
    pub action: String,

    /// Required when rejecting, ignored otherwise
    #[validate(length(max = MAX_REJECTION_REASON_LENGTH))]
    pub reason: Option<String>,
}

/// Own-photos query parameters
#[derive(Debug, Deserialize)]
pub struct MyPhotosQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub competition_id: Option<Uuid>,
}
