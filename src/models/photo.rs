//! Photo model and the moderation transition table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Photo database model
///
/// Photos are created by the submission path in `pending` state and mutated
/// only by moderation (plus a soft-delete flag). The actual image bytes live
/// in external blob storage; `file_path` is an opaque reference into it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Photo {
    pub id: Uuid,
    pub competition_id: Uuid,
    pub category_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub file_path: String,
    pub status: PhotoStatus,
    pub moderated_at: Option<DateTime<Utc>>,
    pub moderated_by: Option<Uuid>,
    pub rejection_reason: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Photo {
    /// Whether this photo currently consumes one of its submitter's quota
    /// slots. Rejected and soft-deleted photos free their slot.
    pub fn counts_against_quota(&self) -> bool {
        !self.is_deleted && self.status.counts_against_quota()
    }

    /// Only approved, non-deleted photos can receive votes.
    pub fn is_votable(&self) -> bool {
        !self.is_deleted && self.status == PhotoStatus::Approved
    }
}

/// Photo moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PhotoStatus {
    Pending,
    Approved,
    Rejected,
}

impl PhotoStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Pending and approved photos consume quota; rejection frees the slot.
    pub fn counts_against_quota(&self) -> bool {
        matches!(self, Self::Pending | Self::Approved)
    }

    /// The moderation transition table. Returns the resulting status, or
    /// `None` when the edge is not allowed:
    ///
    /// - approve: pending | rejected -> approved
    /// - reject:  pending | approved -> rejected
    /// - reset:   approved | rejected -> pending
    pub fn transition(self, action: ModerationAction) -> Option<PhotoStatus> {
        match (self, action) {
            (Self::Pending | Self::Rejected, ModerationAction::Approve) => Some(Self::Approved),
            (Self::Pending | Self::Approved, ModerationAction::Reject) => Some(Self::Rejected),
            (Self::Approved | Self::Rejected, ModerationAction::Reset) => Some(Self::Pending),
            _ => None,
        }
    }
}

impl std::fmt::Display for PhotoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Moderation actions a moderator can apply to a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Reject,
    Reset,
}

impl ModerationAction {
    /// Get action as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Reset => "reset",
        }
    }

    /// Parse action from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "approve" => Some(Self::Approve),
            "reject" => Some(Self::Reject),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

impl std::fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
