//! Identity and authorization
//!
//! The service runs behind a gateway that authenticates callers and forwards
//! their identity in headers. `Principal` extracts that identity; an
//! `Authorizer` decides what a principal may do.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    constants::{permissions, roles},
    error::{AppError, AppResult},
};

/// Header carrying the authenticated caller's user ID
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the caller's roles, comma-separated
pub const USER_ROLES_HEADER: &str = "x-user-roles";

/// Authenticated caller identity forwarded by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: Uuid,
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or_else(|| {
                debug!(path = %parts.uri.path(), "Missing or malformed identity header");
                AppError::Unauthorized
            })?;

        let roles = parts
            .headers
            .get(USER_ROLES_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(parse_roles)
            .unwrap_or_default();

        Ok(Principal { user_id, roles })
    }
}

/// Unknown role tokens are dropped rather than rejected so the gateway can
/// introduce roles this service does not know about.
fn parse_roles(raw: &str) -> Vec<Role> {
    let mut parsed = Vec::new();
    for token in raw.split(',') {
        if let Some(role) = Role::parse(token.trim()) {
            if !parsed.contains(&role) {
                parsed.push(role);
            }
        }
    }
    parsed
}

/// Caller role as asserted by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    Member,
}

impl Role {
    /// Get role as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => roles::ADMIN,
            Self::Moderator => roles::MODERATOR,
            Self::Member => roles::MEMBER,
        }
    }

    /// Parse role from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            roles::ADMIN => Some(Self::Admin),
            roles::MODERATOR => Some(Self::Moderator),
            roles::MEMBER => Some(Self::Member),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operations guarded by authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ManageCompetitions,
    ModerateContent,
    SubmitPhotos,
    CastVotes,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageCompetitions => permissions::MANAGE_COMPETITIONS,
            Self::ModerateContent => permissions::MODERATE_CONTENT,
            Self::SubmitPhotos => permissions::SUBMIT_PHOTOS,
            Self::CastVotes => permissions::CAST_VOTES,
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decides whether a principal may perform a guarded operation
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn has_permission(&self, principal: &Principal, permission: Permission) -> bool;

    /// Check a permission and fail with a uniform error when it is missing
    async fn require(&self, principal: &Principal, permission: Permission) -> AppResult<()> {
        if self.has_permission(principal, permission).await {
            Ok(())
        } else {
            debug!(
                user_id = %principal.user_id,
                permission = %permission,
                "Permission denied"
            );
            Err(AppError::Forbidden(format!(
                "Missing permission: {permission}"
            )))
        }
    }
}

/// Static role-to-permission map
///
/// Admins manage competition lifecycles, moderators moderate content, and any
/// authenticated caller may submit photos and cast votes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleMapAuthorizer;

#[async_trait]
impl Authorizer for RoleMapAuthorizer {
    async fn has_permission(&self, principal: &Principal, permission: Permission) -> bool {
        match permission {
            Permission::ManageCompetitions => principal.has_role(Role::Admin),
            Permission::ModerateContent => {
                principal.has_role(Role::Admin) || principal.has_role(Role::Moderator)
            }
            Permission::SubmitPhotos | Permission::CastVotes => true,
        }
    }
}
