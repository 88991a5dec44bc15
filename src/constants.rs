//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default SQLite database file
pub const DEFAULT_DATABASE_PATH: &str = "data/photoarena.db";

/// Default maximum read connections in the pool
pub const DEFAULT_DATABASE_MAX_READ_CONNECTIONS: u32 = 8;

/// Default SQLite busy timeout in milliseconds
pub const DEFAULT_DATABASE_BUSY_TIMEOUT_MS: u64 = 5_000;

// =============================================================================
// USER ROLES
// =============================================================================

/// Role identifiers as resolved by the external identity provider
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const MODERATOR: &str = "moderator";
    pub const MEMBER: &str = "member";
}

// =============================================================================
// PERMISSIONS
// =============================================================================

/// Capability identifiers checked through the authorizer
pub mod permissions {
    pub const MANAGE_COMPETITIONS: &str = "manage_competitions";
    pub const MODERATE_CONTENT: &str = "moderate_content";
    pub const SUBMIT_PHOTOS: &str = "submit_photos";
    pub const CAST_VOTES: &str = "cast_votes";
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum competition title length
pub const MAX_COMPETITION_TITLE_LENGTH: u64 = 200;

/// Maximum competition description length
pub const MAX_COMPETITION_DESCRIPTION_LENGTH: u64 = 10_000;

/// Maximum category name length
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 100;

/// Maximum photo title length
pub const MAX_PHOTO_TITLE_LENGTH: u64 = 200;

/// Maximum photo description length
pub const MAX_PHOTO_DESCRIPTION_LENGTH: u64 = 5_000;

/// Maximum rejection reason length
pub const MAX_REJECTION_REASON_LENGTH: u64 = 1_000;

/// Maximum blob storage path length
pub const MAX_FILE_PATH_LENGTH: u64 = 1_024;

/// Upper bound accepted for a category's per-user photo quota
pub const MAX_PHOTOS_PER_USER_LIMIT: i64 = 100;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
