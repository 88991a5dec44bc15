//! Submission and quota tests

use chrono::{Duration, Utc};
use futures::future::join_all;

use photoarena::{
    error::AppError,
    handlers::{
        categories::request::UpdateCategoryRequest,
        competitions::request::CreateCompetitionRequest,
    },
    models::PhotoStatus,
    services::{CategoryService, CompetitionService, SubmissionService},
};

use crate::helpers::{
    add_category, create_active_competition, photo_request, reject, submit, user, TestApp,
};

#[tokio::test]
async fn submissions_land_pending_and_occupy_a_slot() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let category = add_category(&app, &competition.id, "Landscape", 2).await;
    let alice = user();

    let submission =
        SubmissionService::submit_photo(&app.db, &alice, photo_request(&category.id, "First"))
            .await
            .unwrap();
    assert_eq!(submission.photo.status, PhotoStatus::Pending);
    assert_eq!(submission.photo.user_id, alice);
    assert_eq!(submission.remaining_slots, 1);

    let quota = SubmissionService::remaining_slots(&app.db, &alice, &category.id)
        .await
        .unwrap();
    assert_eq!(quota.max_photos, 2);
    assert_eq!(quota.used, 1);
    assert_eq!(quota.remaining, 1);
}

#[tokio::test]
async fn quota_blocks_the_submission_over_the_limit() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let category = add_category(&app, &competition.id, "Landscape", 2).await;
    let alice = user();

    submit(&app, &alice, &category.id).await;
    submit(&app, &alice, &category.id).await;

    let err = SubmissionService::submit_photo(&app.db, &alice, photo_request(&category.id, "Over"))
        .await
        .unwrap_err();

    match err {
        AppError::QuotaExceeded {
            max_photos,
            remaining_slots,
        } => {
            assert_eq!(max_photos, 2);
            assert_eq!(remaining_slots, 0);
        }
        other => panic!("expected QuotaExceeded, got {other:?}"),
    }

    // Quota is per category; a second category has its own slots
    let other_category = add_category(&app, &competition.id, "Portrait", 2).await;
    submit(&app, &alice, &other_category.id).await;
}

#[tokio::test]
async fn rejection_frees_the_slot_for_a_replacement() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let category = add_category(&app, &competition.id, "Street", 1).await;
    let alice = user();

    let photo = submit(&app, &alice, &category.id).await;
    let err = SubmissionService::submit_photo(&app.db, &alice, photo_request(&category.id, "Full"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::QuotaExceeded { .. }));

    reject(&app, &photo.id, "Not a street scene").await;

    let quota = SubmissionService::remaining_slots(&app.db, &alice, &category.id)
        .await
        .unwrap();
    assert_eq!(quota.remaining, 1);

    submit(&app, &alice, &category.id).await;
}

#[tokio::test]
async fn removal_frees_the_slot_for_a_replacement() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let category = add_category(&app, &competition.id, "Street", 1).await;
    let alice = user();

    let photo = submit(&app, &alice, &category.id).await;
    SubmissionService::remove_photo(&app.db, &app.audit, &alice, false, &photo.id)
        .await
        .unwrap();

    submit(&app, &alice, &category.id).await;
}

#[tokio::test]
async fn concurrent_submissions_never_oversubscribe_the_quota() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let category = add_category(&app, &competition.id, "Wildlife", 3).await;
    let alice = user();

    let tasks = (0..6).map(|i| {
        let db = app.db.clone();
        let category_id = category.id;
        tokio::spawn(async move {
            SubmissionService::submit_photo(
                &db,
                &alice,
                photo_request(&category_id, &format!("Shot {i}")),
            )
            .await
        })
    });

    let mut accepted = 0;
    let mut quota_refusals = 0;
    for result in join_all(tasks).await {
        match result.unwrap() {
            Ok(_) => accepted += 1,
            Err(AppError::QuotaExceeded { .. }) => quota_refusals += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(accepted, 3);
    assert_eq!(quota_refusals, 3);

    let quota = SubmissionService::remaining_slots(&app.db, &alice, &category.id)
        .await
        .unwrap();
    assert_eq!(quota.used, 3);
    assert_eq!(quota.remaining, 0);
}

#[tokio::test]
async fn submissions_need_an_active_competition() {
    let app = TestApp::new().await;
    // Draft competition, never activated
    let competition = crate::helpers::create_competition(&app, "Draft only").await;
    let category = add_category(&app, &competition.id, "Macro", 3).await;
    let alice = user();

    let err =
        SubmissionService::submit_photo(&app.db, &alice, photo_request(&category.id, "Early"))
            .await
            .unwrap_err();
    assert!(matches!(err, AppError::CompetitionClosed));
}

#[tokio::test]
async fn submissions_close_after_the_end_date() {
    let app = TestApp::new().await;
    let admin = user();
    let now = Utc::now();

    let competition = CompetitionService::create_competition(
        &app.db,
        CreateCompetitionRequest {
            title: "Already over".to_string(),
            description: None,
            start_date: Some(now - Duration::days(7)),
            end_date: Some(now - Duration::days(1)),
        },
    )
    .await
    .unwrap();
    CompetitionService::activate_competition(&app.db, &app.audit, &admin, &competition.id)
        .await
        .unwrap();
    let category = add_category(&app, &competition.id, "Night", 3).await;

    let alice = user();
    let err = SubmissionService::submit_photo(&app.db, &alice, photo_request(&category.id, "Late"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::CompetitionClosed));
}

#[tokio::test]
async fn disabled_and_unknown_categories_refuse_submissions() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let category = add_category(&app, &competition.id, "Abstract", 3).await;
    let alice = user();

    CategoryService::update_category(
        &app.db,
        &category.id,
        UpdateCategoryRequest {
            name: None,
            max_photos_per_user: None,
            is_disabled: Some(true),
        },
    )
    .await
    .unwrap();

    let err =
        SubmissionService::submit_photo(&app.db, &alice, photo_request(&category.id, "Into void"))
            .await
            .unwrap_err();
    assert!(matches!(err, AppError::InvalidCategory(_)));

    let err = SubmissionService::submit_photo(
        &app.db,
        &alice,
        photo_request(&uuid::Uuid::new_v4(), "Nowhere"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidCategory(_)));
}

#[tokio::test]
async fn file_paths_are_checked_before_anything_else() {
    let app = TestApp::new().await;
    let alice = user();

    let mut request = photo_request(&uuid::Uuid::new_v4(), "Escape");
    request.file_path = "../secrets/key.pem".to_string();

    let err = SubmissionService::submit_photo(&app.db, &alice, request)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn pending_photos_are_private_to_submitter_and_moderators() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let category = add_category(&app, &competition.id, "Portrait", 3).await;
    let alice = user();
    let bob = user();

    let photo = submit(&app, &alice, &category.id).await;

    // Submitter sees their own pending photo
    let seen = SubmissionService::get_photo(&app.db, &photo.id, &alice, false)
        .await
        .unwrap();
    assert_eq!(seen.id, photo.id);

    // Another member does not
    let err = SubmissionService::get_photo(&app.db, &photo.id, &bob, false)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // A moderator does
    let seen = SubmissionService::get_photo(&app.db, &photo.id, &bob, true)
        .await
        .unwrap();
    assert_eq!(seen.id, photo.id);
}

#[tokio::test]
async fn gallery_listing_shows_only_approved_photos_to_members() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let category = add_category(&app, &competition.id, "Portrait", 5).await;
    let alice = user();

    let pending = submit(&app, &alice, &category.id).await;
    let approved = crate::helpers::submit_approved(&app, &alice, &category.id).await;

    let (photos, total) =
        SubmissionService::list_category_photos(&app.db, &category.id, None, false, 1, 20)
            .await
            .unwrap();
    assert_eq!(total, 1);
    assert_eq!(photos[0].id, approved.id);

    // Members cannot ask for other statuses
    let err = SubmissionService::list_category_photos(
        &app.db,
        &category.id,
        Some(PhotoStatus::Pending),
        false,
        1,
        20,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    // Moderators can
    let (photos, total) = SubmissionService::list_category_photos(
        &app.db,
        &category.id,
        Some(PhotoStatus::Pending),
        true,
        1,
        20,
    )
    .await
    .unwrap();
    assert_eq!(total, 1);
    assert_eq!(photos[0].id, pending.id);
}

#[tokio::test]
async fn members_cannot_remove_other_peoples_photos() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let category = add_category(&app, &competition.id, "Street", 3).await;
    let alice = user();
    let bob = user();

    let photo = submit(&app, &alice, &category.id).await;

    let err = SubmissionService::remove_photo(&app.db, &app.audit, &bob, false, &photo.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    // A moderator may remove it
    SubmissionService::remove_photo(&app.db, &app.audit, &bob, true, &photo.id)
        .await
        .unwrap();

    // Gone for everyone afterwards, including the owner
    let err = SubmissionService::get_photo(&app.db, &photo.id, &alice, true)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn own_photo_listing_spans_categories() {
    let app = TestApp::new().await;
    let competition = create_active_competition(&app, "Open").await;
    let landscape = add_category(&app, &competition.id, "Landscape", 3).await;
    let portrait = add_category(&app, &competition.id, "Portrait", 3).await;
    let alice = user();
    let bob = user();

    submit(&app, &alice, &landscape.id).await;
    submit(&app, &alice, &portrait.id).await;
    submit(&app, &bob, &portrait.id).await;

    let (photos, total) = SubmissionService::list_my_photos(&app.db, &alice, None, 1, 20)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert!(photos.iter().all(|p| p.user_id == alice));

    let (scoped, total) =
        SubmissionService::list_my_photos(&app.db, &alice, Some(&competition.id), 1, 20)
            .await
            .unwrap();
    assert_eq!(total, 2);
    assert_eq!(scoped.len(), 2);
}
