//! Competition lifecycle tests

use chrono::{Duration, Utc};
use futures::future::join_all;

use photoarena::{
    audit::{AuditEvent, TracingAuditSink},
    error::AppError,
    handlers::competitions::request::{CreateCompetitionRequest, UpdateCompetitionRequest},
    models::CompetitionStatus,
    services::CompetitionService,
};

use crate::helpers::{create_competition, user, TestApp};

#[tokio::test]
async fn new_competitions_start_as_drafts() {
    let app = TestApp::new().await;

    let competition = create_competition(&app, "Autumn Light").await;

    assert_eq!(competition.status, CompetitionStatus::Draft);
    assert!(!competition.is_open_for_submission);

    // No active competition yet
    let err = CompetitionService::get_active_competition(&app.db)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn end_date_must_follow_start_date() {
    let app = TestApp::new().await;
    let now = Utc::now();

    let err = CompetitionService::create_competition(
        &app.db,
        CreateCompetitionRequest {
            title: "Backwards".to_string(),
            description: None,
            start_date: Some(now),
            end_date: Some(now - Duration::days(1)),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn activation_demotes_the_previously_active_competition() {
    let app = TestApp::new().await;
    let admin = user();

    let first = create_competition(&app, "First").await;
    let second = create_competition(&app, "Second").await;

    let outcome =
        CompetitionService::activate_competition(&app.db, &app.audit, &admin, &first.id)
            .await
            .unwrap();
    assert_eq!(outcome.competition.status, CompetitionStatus::Active);
    assert_eq!(outcome.demoted_competition_id, None);

    let outcome =
        CompetitionService::activate_competition(&app.db, &app.audit, &admin, &second.id)
            .await
            .unwrap();
    assert_eq!(outcome.competition.status, CompetitionStatus::Active);
    assert_eq!(outcome.demoted_competition_id, Some(first.id));

    let first = CompetitionService::get_competition(&app.db, &first.id)
        .await
        .unwrap();
    assert_eq!(first.status, CompetitionStatus::Inactive);

    let active = CompetitionService::get_active_competition(&app.db)
        .await
        .unwrap();
    assert_eq!(active.id, second.id);

    // Both switches are on the audit trail
    let activations = app
        .audit
        .events()
        .into_iter()
        .filter(|e| matches!(e, AuditEvent::CompetitionActivated { .. }))
        .count();
    assert_eq!(activations, 2);
}

#[tokio::test]
async fn activating_the_active_competition_changes_nothing() {
    let app = TestApp::new().await;
    let admin = user();

    let competition = create_competition(&app, "Solo").await;
    CompetitionService::activate_competition(&app.db, &app.audit, &admin, &competition.id)
        .await
        .unwrap();

    let outcome =
        CompetitionService::activate_competition(&app.db, &app.audit, &admin, &competition.id)
            .await
            .unwrap();

    assert_eq!(outcome.competition.status, CompetitionStatus::Active);
    assert_eq!(outcome.demoted_competition_id, None);
}

#[tokio::test]
async fn concurrent_activations_leave_exactly_one_active() {
    let app = TestApp::new().await;
    let admin = user();

    let mut ids = Vec::new();
    for i in 0..4 {
        ids.push(create_competition(&app, &format!("Contender {i}")).await.id);
    }

    let tasks = ids.iter().map(|id| {
        let db = app.db.clone();
        let id = *id;
        tokio::spawn(async move {
            CompetitionService::activate_competition(&db, &TracingAuditSink, &admin, &id).await
        })
    });
    for result in join_all(tasks).await {
        result.unwrap().unwrap();
    }

    let (competitions, _) =
        CompetitionService::list_competitions(&app.db, 1, 50, Some(CompetitionStatus::Active))
            .await
            .unwrap();
    assert_eq!(competitions.len(), 1);
}

#[tokio::test]
async fn deactivation_takes_the_competition_out_of_rotation() {
    let app = TestApp::new().await;
    let admin = user();

    let competition = create_competition(&app, "Short lived").await;
    CompetitionService::activate_competition(&app.db, &app.audit, &admin, &competition.id)
        .await
        .unwrap();

    let deactivated =
        CompetitionService::deactivate_competition(&app.db, &app.audit, &admin, &competition.id)
            .await
            .unwrap();
    assert_eq!(deactivated.status, CompetitionStatus::Inactive);

    let err = CompetitionService::get_active_competition(&app.db)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // Deactivating again is a no-op, not an error
    let again =
        CompetitionService::deactivate_competition(&app.db, &app.audit, &admin, &competition.id)
            .await
            .unwrap();
    assert_eq!(again.status, CompetitionStatus::Inactive);
}

#[tokio::test]
async fn completed_competitions_are_frozen() {
    let app = TestApp::new().await;
    let admin = user();

    let competition = create_competition(&app, "Finale").await;
    CompetitionService::activate_competition(&app.db, &app.audit, &admin, &competition.id)
        .await
        .unwrap();

    let completed =
        CompetitionService::complete_competition(&app.db, &app.audit, &admin, &competition.id)
            .await
            .unwrap();
    assert_eq!(completed.status, CompetitionStatus::Completed);

    // No reactivation
    let err =
        CompetitionService::activate_competition(&app.db, &app.audit, &admin, &competition.id)
            .await
            .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));

    // No edits
    let err = CompetitionService::update_competition(
        &app.db,
        &competition.id,
        UpdateCompetitionRequest {
            title: Some("Renamed".to_string()),
            description: None,
            start_date: None,
            end_date: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));

    // No second completion
    let err =
        CompetitionService::complete_competition(&app.db, &app.audit, &admin, &competition.id)
            .await
            .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
}

#[tokio::test]
async fn draft_competitions_cannot_be_completed() {
    let app = TestApp::new().await;
    let admin = user();

    let competition = create_competition(&app, "Never ran").await;

    let err =
        CompetitionService::complete_competition(&app.db, &app.audit, &admin, &competition.id)
            .await
            .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
}

#[tokio::test]
async fn inactive_competitions_can_be_completed() {
    let app = TestApp::new().await;
    let admin = user();

    let competition = create_competition(&app, "Archived").await;
    CompetitionService::activate_competition(&app.db, &app.audit, &admin, &competition.id)
        .await
        .unwrap();
    CompetitionService::deactivate_competition(&app.db, &app.audit, &admin, &competition.id)
        .await
        .unwrap();

    let completed =
        CompetitionService::complete_competition(&app.db, &app.audit, &admin, &competition.id)
            .await
            .unwrap();
    assert_eq!(completed.status, CompetitionStatus::Completed);
}

#[tokio::test]
async fn status_filter_narrows_the_listing() {
    let app = TestApp::new().await;
    let admin = user();

    let a = create_competition(&app, "A").await;
    create_competition(&app, "B").await;
    CompetitionService::activate_competition(&app.db, &app.audit, &admin, &a.id)
        .await
        .unwrap();

    let (all, total) = CompetitionService::list_competitions(&app.db, 1, 50, None)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(all.len(), 2);

    let (drafts, total) =
        CompetitionService::list_competitions(&app.db, 1, 50, Some(CompetitionStatus::Draft))
            .await
            .unwrap();
    assert_eq!(total, 1);
    assert_eq!(drafts[0].title, "B");
}
