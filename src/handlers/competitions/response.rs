//! Competition response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Competition, CompetitionStatus};

/// Competition response
#[derive(Debug, Serialize)]
pub struct CompetitionResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: CompetitionStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Whether submissions are accepted right now
    pub is_open_for_submission: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Competition> for CompetitionResponse {
    fn from(competition: Competition) -> Self {
        let is_open = competition.is_open_for_submission(Utc::now());
        Self {
            id: competition.id,
            title: competition.title,
            description: competition.description,
            status: competition.status,
            start_date: competition.start_date,
            end_date: competition.end_date,
            is_open_for_submission: is_open,
            created_at: competition.created_at,
            updated_at: competition.updated_at,
        }
    }
}

/// Competition list response
#[derive(Debug, Serialize)]
pub struct CompetitionsListResponse {
    pub competitions: Vec<CompetitionResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Outcome of switching the active competition
#[derive(Debug, Serialize)]
pub struct ActivationResponse {
    pub competition: CompetitionResponse,
    /// The previously active competition demoted by this switch, if any
    pub demoted_competition_id: Option<Uuid>,
}
