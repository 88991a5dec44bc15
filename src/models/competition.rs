//! Competition model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Competition database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: CompetitionStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Competition {
    /// Check whether the competition accepts new submissions at `now`.
    ///
    /// Open means active, and either open-ended or not yet past its end date.
    pub fn is_open_for_submission(&self, now: DateTime<Utc>) -> bool {
        if self.status != CompetitionStatus::Active {
            return false;
        }
        match self.end_date {
            Some(end_date) => end_date >= now,
            None => true,
        }
    }

    /// Completed competitions are terminal: never reactivated, never edited.
    pub fn is_terminal(&self) -> bool {
        self.status == CompetitionStatus::Completed
    }

    /// Categories may only be created or edited in these states.
    pub fn allows_category_changes(&self) -> bool {
        matches!(
            self.status,
            CompetitionStatus::Draft | CompetitionStatus::Active
        )
    }
}

/// Competition lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Draft,
    Active,
    Completed,
    Inactive,
}

impl CompetitionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Inactive => "inactive",
        }
    }

    /// Parse status from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
