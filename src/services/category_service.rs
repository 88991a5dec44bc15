//! Category service

use uuid::Uuid;

use crate::{
    db::{
        repositories::{CategoryRepository, CompetitionRepository, PhotoRepository},
        Db,
    },
    error::{AppError, AppResult},
    handlers::categories::{
        request::{CreateCategoryRequest, UpdateCategoryRequest},
        response::{CategoryRemovalResponse, CategoryResponse},
    },
    models::Competition,
};

/// Category service for quota scopes within a competition
pub struct CategoryService;

impl CategoryService {
    /// Create a category in a competition
    pub async fn create_category(
        db: &Db,
        competition_id: &Uuid,
        payload: CreateCategoryRequest,
    ) -> AppResult<CategoryResponse> {
        let mut tx = db.write().begin().await?;

        let competition = CompetitionRepository::find_by_id(&mut *tx, competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;
        ensure_categories_editable(&competition)?;

        let category = CategoryRepository::create(
            &mut *tx,
            competition_id,
            &payload.name,
            payload.max_photos_per_user,
        )
        .await?;

        tx.commit().await?;

        Ok(CategoryResponse::from_parts(category, 0))
    }

    /// List a competition's categories with their live photo counts
    pub async fn list_categories(
        db: &Db,
        competition_id: &Uuid,
    ) -> AppResult<Vec<CategoryResponse>> {
        CompetitionRepository::find_by_id(db.read(), competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let categories = CategoryRepository::list_by_competition(db.read(), competition_id).await?;

        let mut responses = Vec::with_capacity(categories.len());
        for category in categories {
            let photo_count =
                PhotoRepository::count_live_in_category(db.read(), &category.id).await?;
            responses.push(CategoryResponse::from_parts(category, photo_count));
        }

        Ok(responses)
    }

    /// Update a category's settings
    ///
    /// Lowering the quota below a user's current usage does not remove
    /// photos; it only stops further submissions until slots free up.
    pub async fn update_category(
        db: &Db,
        id: &Uuid,
        payload: UpdateCategoryRequest,
    ) -> AppResult<CategoryResponse> {
        let mut tx = db.write().begin().await?;

        let category = CategoryRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let competition = CompetitionRepository::find_by_id(&mut *tx, &category.competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;
        ensure_categories_editable(&competition)?;

        let updated = CategoryRepository::update(
            &mut *tx,
            id,
            payload.name.as_deref(),
            payload.max_photos_per_user,
            payload.is_disabled,
        )
        .await?;

        tx.commit().await?;

        let photo_count = PhotoRepository::count_live_in_category(db.read(), id).await?;
        Ok(CategoryResponse::from_parts(updated, photo_count))
    }

    /// Remove a category: deleted outright when no photo was ever submitted
    /// to it, otherwise disabled so existing photos keep their context.
    pub async fn remove_category(db: &Db, id: &Uuid) -> AppResult<CategoryRemovalResponse> {
        let mut tx = db.write().begin().await?;

        let category = CategoryRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        let competition = CompetitionRepository::find_by_id(&mut *tx, &category.competition_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;
        ensure_categories_editable(&competition)?;

        let photo_rows = CategoryRepository::count_photo_rows(&mut *tx, id).await?;

        if photo_rows == 0 {
            CategoryRepository::delete(&mut *tx, id).await?;
            tx.commit().await?;

            return Ok(CategoryRemovalResponse {
                category_id: *id,
                outcome: "deleted".to_string(),
                category: None,
            });
        }

        let disabled =
            CategoryRepository::update(&mut *tx, id, None, None, Some(true)).await?;
        tx.commit().await?;

        let photo_count = PhotoRepository::count_live_in_category(db.read(), id).await?;
        Ok(CategoryRemovalResponse {
            category_id: *id,
            outcome: "disabled".to_string(),
            category: Some(CategoryResponse::from_parts(disabled, photo_count)),
        })
    }
}

/// Categories may only change while their competition is in draft or active
/// state.
fn ensure_categories_editable(competition: &Competition) -> AppResult<()> {
    if !competition.allows_category_changes() {
        return Err(AppError::InvalidTransition(format!(
            "Categories cannot be changed while the competition is {}",
            competition.status
        )));
    }
    Ok(())
}
