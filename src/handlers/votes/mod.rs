//! Voting handlers
//!
//! Vote routes hang off photo and category paths, so this router is merged
//! into the API router rather than nested under its own prefix.

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Vote routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/photos/{id}/votes", post(handler::cast_vote))
        .route("/photos/{id}/votes", get(handler::get_photo_votes))
        .route("/categories/{id}/votes/me", get(handler::get_my_vote))
        .route("/categories/{id}/votes/me", delete(handler::retract_vote))
        .route("/categories/{id}/results", get(handler::get_category_results))
}
