//! Category management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::state::AppState;

/// Category routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(handler::update_category))
        .route("/{id}", delete(handler::remove_category))
        .route("/{id}/photos", get(handler::list_category_photos))
        .route("/{id}/quota", get(handler::get_quota))
}
