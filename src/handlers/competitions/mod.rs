//! Competition management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

/// Competition routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Competition CRUD
        .route("/", get(handler::list_competitions))
        .route("/", post(handler::create_competition))
        .route("/active", get(handler::get_active_competition))
        .route("/{id}", get(handler::get_competition))
        .route("/{id}", put(handler::update_competition))
        // Lifecycle switches
        .route("/{id}/activate", post(handler::activate_competition))
        .route("/{id}/deactivate", post(handler::deactivate_competition))
        .route("/{id}/complete", post(handler::complete_competition))
        // Categories within a competition
        .route("/{id}/categories", get(handler::list_categories))
        .route("/{id}/categories", post(handler::create_category))
}
