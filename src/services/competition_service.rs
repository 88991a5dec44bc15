//! Competition service

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    audit::{AuditEvent, AuditSink},
    db::{repositories::CompetitionRepository, Db},
    error::{AppError, AppResult},
    handlers::competitions::{
        request::{CreateCompetitionRequest, UpdateCompetitionRequest},
        response::{ActivationResponse, CompetitionResponse},
    },
    models::CompetitionStatus,
};

/// Competition service for lifecycle and metadata logic
pub struct CompetitionService;

impl CompetitionService {
    /// Create a new competition in draft state
    pub async fn create_competition(
        db: &Db,
        payload: CreateCompetitionRequest,
    ) -> AppResult<CompetitionResponse> {
        validate_date_window(payload.start_date, payload.end_date)?;

        let competition = CompetitionRepository::create(
            db.write(),
            &payload.title,
            payload.description.as_deref(),
            payload.start_date,
            payload.end_date,
        )
        .await?;

        Ok(CompetitionResponse::from(competition))
    }

    /// Get competition by ID
    pub async fn get_competition(db: &Db, id: &Uuid) -> AppResult<CompetitionResponse> {
        let competition = CompetitionRepository::find_by_id(db.read(), id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        Ok(CompetitionResponse::from(competition))
    }

    /// Get the currently active competition
    pub async fn get_active_competition(db: &Db) -> AppResult<CompetitionResponse> {
        let competition = CompetitionRepository::find_active(db.read())
            .await?
            .ok_or_else(|| AppError::NotFound("No active competition".to_string()))?;

        Ok(CompetitionResponse::from(competition))
    }

    /// List competitions with pagination
    pub async fn list_competitions(
        db: &Db,
        page: u32,
        per_page: u32,
        status: Option<CompetitionStatus>,
    ) -> AppResult<(Vec<CompetitionResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (competitions, total) =
            CompetitionRepository::list(db.read(), offset, limit, status).await?;

        let responses = competitions
            .into_iter()
            .map(CompetitionResponse::from)
            .collect();

        Ok((responses, total))
    }

    /// Update competition metadata. Completed competitions are frozen.
    pub async fn update_competition(
        db: &Db,
        id: &Uuid,
        payload: UpdateCompetitionRequest,
    ) -> AppResult<CompetitionResponse> {
        let mut tx = db.write().begin().await?;

        let competition = CompetitionRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        if competition.is_terminal() {
            return Err(AppError::InvalidTransition(
                "Completed competitions cannot be edited".to_string(),
            ));
        }

        // Validate the dates as they will read after the merge
        let effective_start = payload.start_date.or(competition.start_date);
        let effective_end = payload.end_date.or(competition.end_date);
        validate_date_window(effective_start, effective_end)?;

        let updated = CompetitionRepository::update(
            &mut *tx,
            id,
            payload.title.as_deref(),
            payload.description.as_deref(),
            payload.start_date,
            payload.end_date,
        )
        .await?;

        tx.commit().await?;

        Ok(CompetitionResponse::from(updated))
    }

    /// Make a competition the active one
    ///
    /// At most one competition is active at a time: the previously active
    /// competition, if any, is demoted to inactive in the same transaction
    /// that promotes the new one. Activating the already-active competition
    /// changes nothing.
    pub async fn activate_competition(
        db: &Db,
        audit: &dyn AuditSink,
        actor_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<ActivationResponse> {
        let mut tx = db.write().begin().await?;

        let competition = CompetitionRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        if competition.is_terminal() {
            return Err(AppError::InvalidTransition(
                "Completed competitions cannot be activated".to_string(),
            ));
        }

        if competition.status == CompetitionStatus::Active {
            return Ok(ActivationResponse {
                competition: CompetitionResponse::from(competition),
                demoted_competition_id: None,
            });
        }

        let demoted_competition_id = match CompetitionRepository::find_active(&mut *tx).await? {
            Some(previous) => {
                CompetitionRepository::update_status(
                    &mut *tx,
                    &previous.id,
                    CompetitionStatus::Inactive,
                )
                .await?;
                Some(previous.id)
            }
            None => None,
        };

        let activated =
            CompetitionRepository::update_status(&mut *tx, id, CompetitionStatus::Active).await?;

        tx.commit().await?;

        audit.record(AuditEvent::CompetitionActivated {
            competition_id: *id,
            actor_id: *actor_id,
            demoted_competition_id,
        });

        Ok(ActivationResponse {
            competition: CompetitionResponse::from(activated),
            demoted_competition_id,
        })
    }

    /// Take a competition out of the active state
    ///
    /// Deactivating a competition that is not active is a no-op; the current
    /// state is returned unchanged.
    pub async fn deactivate_competition(
        db: &Db,
        audit: &dyn AuditSink,
        actor_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<CompetitionResponse> {
        let mut tx = db.write().begin().await?;

        let competition = CompetitionRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        if competition.status != CompetitionStatus::Active {
            return Ok(CompetitionResponse::from(competition));
        }

        let deactivated =
            CompetitionRepository::update_status(&mut *tx, id, CompetitionStatus::Inactive)
                .await?;

        tx.commit().await?;

        audit.record(AuditEvent::CompetitionDeactivated {
            competition_id: *id,
            actor_id: *actor_id,
        });

        Ok(CompetitionResponse::from(deactivated))
    }

    /// Close a competition for good
    ///
    /// Only active or inactive competitions can be completed; completion is
    /// terminal.
    pub async fn complete_competition(
        db: &Db,
        audit: &dyn AuditSink,
        actor_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<CompetitionResponse> {
        let mut tx = db.write().begin().await?;

        let competition = CompetitionRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        match competition.status {
            CompetitionStatus::Active | CompetitionStatus::Inactive => {}
            CompetitionStatus::Draft => {
                return Err(AppError::InvalidTransition(
                    "Draft competitions cannot be completed".to_string(),
                ));
            }
            CompetitionStatus::Completed => {
                return Err(AppError::InvalidTransition(
                    "Competition is already completed".to_string(),
                ));
            }
        }

        let completed =
            CompetitionRepository::update_status(&mut *tx, id, CompetitionStatus::Completed)
                .await?;

        tx.commit().await?;

        audit.record(AuditEvent::CompetitionCompleted {
            competition_id: *id,
            actor_id: *actor_id,
        });

        Ok(CompetitionResponse::from(completed))
    }
}

/// Both dates are optional, but when both are present the window must be
/// non-empty.
fn validate_date_window(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) -> AppResult<()> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end <= start {
            return Err(AppError::Validation(
                "End date must be after start date".to_string(),
            ));
        }
    }
    Ok(())
}
