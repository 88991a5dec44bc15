//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod categories;
pub mod competitions;
pub mod health;
pub mod photos;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/competitions", competitions::routes())
        .nest("/categories", categories::routes())
        .nest("/photos", photos::routes())
        .merge(votes::routes())
}
