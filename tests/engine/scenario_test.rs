//! End-to-end competition walkthrough

use photoarena::{
    audit::AuditEvent,
    error::AppError,
    models::{CompetitionStatus, ModerationAction},
    services::{
        CategoryService, CompetitionService, ModerationService, SubmissionService, VotingService,
    },
};

use crate::helpers::{add_category, create_competition, photo_request, submit, user, TestApp};

/// One competition from draft to completion: setup, submissions, moderation,
/// voting, a disqualification, and the final standings.
#[tokio::test]
async fn full_competition_walkthrough() {
    let app = TestApp::new().await;
    let admin = user();
    let moderator = user();
    let alice = user();
    let bob = user();
    let carol = user();

    // Setup: draft competition with two categories
    let competition = create_competition(&app, "Summer Open 2026").await;
    let landscape = add_category(&app, &competition.id, "Landscape", 2).await;
    let wildlife = add_category(&app, &competition.id, "Wildlife", 1).await;

    // Nobody can submit before activation
    let err = SubmissionService::submit_photo(&app.db, &alice, photo_request(&landscape.id, "Early"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CompetitionClosed));

    CompetitionService::activate_competition(&app.db, &app.audit, &admin, &competition.id)
        .await
        .unwrap();

    // Submissions come in
    let alice_landscape = submit(&app, &alice, &landscape.id).await;
    let bob_landscape = submit(&app, &bob, &landscape.id).await;
    let bob_wildlife = submit(&app, &bob, &wildlife.id).await;
    let carol_landscape = submit(&app, &carol, &landscape.id).await;

    // Moderation: three approvals, one rejection with a reason
    for photo_id in [&alice_landscape.id, &bob_landscape.id, &bob_wildlife.id] {
        ModerationService::moderate_photo(
            &app.db,
            &app.audit,
            &moderator,
            photo_id,
            ModerationAction::Approve,
            None,
        )
        .await
        .unwrap();
    }
    ModerationService::moderate_photo(
        &app.db,
        &app.audit,
        &moderator,
        &carol_landscape.id,
        ModerationAction::Reject,
        Some("Heavy watermark across the frame"),
    )
    .await
    .unwrap();

    // The rejection freed Carol's slot; her replacement gets approved
    let carol_retry = submit(&app, &carol, &landscape.id).await;
    ModerationService::moderate_photo(
        &app.db,
        &app.audit,
        &moderator,
        &carol_retry.id,
        ModerationAction::Approve,
        None,
    )
    .await
    .unwrap();

    // Voting: Alice's landscape takes the lead
    for voter in [&bob, &carol] {
        VotingService::cast_vote(&app.db, voter, &alice_landscape.id)
            .await
            .unwrap();
    }
    VotingService::cast_vote(&app.db, &alice, &bob_landscape.id)
        .await
        .unwrap();

    // Alice reconsiders and moves her vote to Carol's replacement
    let moved = VotingService::cast_vote(&app.db, &alice, &carol_retry.id)
        .await
        .unwrap();
    assert_eq!(moved.previous_photo_id, Some(bob_landscape.id));

    let standings = VotingService::category_results(&app.db, &landscape.id)
        .await
        .unwrap();
    assert_eq!(standings.results[0].photo_id, alice_landscape.id);
    assert_eq!(standings.results[0].votes, 2);

    // A complaint holds up: the leader turns out to be disqualified
    let outcome = ModerationService::moderate_photo(
        &app.db,
        &app.audit,
        &moderator,
        &alice_landscape.id,
        ModerationAction::Reject,
        Some("Entered in a previous competition"),
    )
    .await
    .unwrap();
    assert_eq!(outcome.votes_invalidated, 2);

    // Standings reflect the disqualification immediately
    let standings = VotingService::category_results(&app.db, &landscape.id)
        .await
        .unwrap();
    assert_eq!(standings.results.len(), 2);
    assert_eq!(standings.results[0].photo_id, carol_retry.id);
    assert_eq!(standings.results[0].votes, 1);

    // Bob and Carol vote again after losing their invalidated votes
    VotingService::cast_vote(&app.db, &bob, &carol_retry.id)
        .await
        .unwrap();
    VotingService::cast_vote(&app.db, &carol, &bob_landscape.id)
        .await
        .unwrap();

    // Close out the competition
    let completed =
        CompetitionService::complete_competition(&app.db, &app.audit, &admin, &competition.id)
            .await
            .unwrap();
    assert_eq!(completed.status, CompetitionStatus::Completed);

    // No further submissions or category changes
    let err = SubmissionService::submit_photo(&app.db, &bob, photo_request(&landscape.id, "Late"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CompetitionClosed));

    let err = CategoryService::create_category(
        &app.db,
        &competition.id,
        photoarena::handlers::categories::request::CreateCategoryRequest {
            name: "Too late".to_string(),
            max_photos_per_user: 1,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));

    // Results stay readable after completion
    let standings = VotingService::category_results(&app.db, &landscape.id)
        .await
        .unwrap();
    assert_eq!(standings.results[0].photo_id, carol_retry.id);
    assert_eq!(standings.results[0].votes, 2);

    let wildlife_standings = VotingService::category_results(&app.db, &wildlife.id)
        .await
        .unwrap();
    assert_eq!(wildlife_standings.results.len(), 1);
    assert_eq!(wildlife_standings.results[0].photo_id, bob_wildlife.id);

    // The audit trail kept up with every accountable step
    let events = app.audit.events();
    let activations = events
        .iter()
        .filter(|e| matches!(e, AuditEvent::CompetitionActivated { .. }))
        .count();
    let completions = events
        .iter()
        .filter(|e| matches!(e, AuditEvent::CompetitionCompleted { .. }))
        .count();
    let moderations = events
        .iter()
        .filter(|e| matches!(e, AuditEvent::PhotoModerated { .. }))
        .count();
    assert_eq!(activations, 1);
    assert_eq!(completions, 1);
    assert_eq!(moderations, 6);
}

/// Quota, moderation, and votes interlock: a slot consumed by a pending
/// photo comes back when the photo is rejected, and the rejection takes the
/// photo's votes with it.
#[tokio::test]
async fn quota_and_votes_track_the_moderation_lifecycle() {
    let app = TestApp::new().await;
    let moderator = user();
    let u = user();
    let v = user();

    let competition = create_competition(&app, "C1").await;
    let wildlife = add_category(&app, &competition.id, "Wildlife", 2).await;
    CompetitionService::activate_competition(&app.db, &app.audit, &user(), &competition.id)
        .await
        .unwrap();

    let p1 = SubmissionService::submit_photo(&app.db, &u, photo_request(&wildlife.id, "P1"))
        .await
        .unwrap();
    assert_eq!(p1.remaining_slots, 1);

    let p2 = SubmissionService::submit_photo(&app.db, &u, photo_request(&wildlife.id, "P2"))
        .await
        .unwrap();
    assert_eq!(p2.remaining_slots, 0);

    let err = SubmissionService::submit_photo(&app.db, &u, photo_request(&wildlife.id, "P3"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::QuotaExceeded { .. }));

    ModerationService::moderate_photo(
        &app.db,
        &app.audit,
        &moderator,
        &p1.photo.id,
        ModerationAction::Approve,
        None,
    )
    .await
    .unwrap();

    let vote = VotingService::cast_vote(&app.db, &v, &p1.photo.id)
        .await
        .unwrap();
    assert_eq!(vote.vote_count, 1);

    ModerationService::moderate_photo(
        &app.db,
        &app.audit,
        &moderator,
        &p1.photo.id,
        ModerationAction::Reject,
        Some("blurry"),
    )
    .await
    .unwrap();

    let count = VotingService::photo_votes(&app.db, &p1.photo.id)
        .await
        .unwrap();
    assert_eq!(count.votes, 0);

    let quota = SubmissionService::remaining_slots(&app.db, &u, &wildlife.id)
        .await
        .unwrap();
    assert_eq!(quota.remaining, 1);
}

/// Category cleanup behaves differently for empty and used categories.
#[tokio::test]
async fn category_removal_deletes_empty_and_disables_used() {
    let app = TestApp::new().await;
    let admin = user();

    let competition = create_competition(&app, "Cleanup").await;
    let empty = add_category(&app, &competition.id, "Unused", 2).await;
    let used = add_category(&app, &competition.id, "Used", 2).await;

    CompetitionService::activate_competition(&app.db, &app.audit, &admin, &competition.id)
        .await
        .unwrap();

    let alice = user();
    let photo = submit(&app, &alice, &used.id).await;
    // Even a removed photo keeps its category's history alive
    SubmissionService::remove_photo(&app.db, &app.audit, &alice, false, &photo.id)
        .await
        .unwrap();

    let outcome = CategoryService::remove_category(&app.db, &empty.id)
        .await
        .unwrap();
    assert_eq!(outcome.outcome, "deleted");
    assert!(outcome.category.is_none());

    let outcome = CategoryService::remove_category(&app.db, &used.id)
        .await
        .unwrap();
    assert_eq!(outcome.outcome, "disabled");
    assert!(outcome.category.as_ref().is_some_and(|c| c.is_disabled));

    let categories = CategoryService::list_categories(&app.db, &competition.id)
        .await
        .unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, used.id);
}
