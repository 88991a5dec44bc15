//! Competition request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_COMPETITION_DESCRIPTION_LENGTH, MAX_COMPETITION_TITLE_LENGTH};

/// Create competition request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_COMPETITION_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_COMPETITION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// Informational start of the competition window (optional)
    pub start_date: Option<DateTime<Utc>>,

    /// Submissions close after this instant (optional; open-ended if absent)
    pub end_date: Option<DateTime<Utc>>,
}

/// Update competition request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_COMPETITION_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_COMPETITION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// List competitions query parameters
#[derive(Debug, Deserialize)]
pub struct ListCompetitionsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// draft, active, completed, inactive
    pub status: Option<String>,
}
