//! Photo submission and moderation handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Photo routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::submit_photo))
        .route("/mine", get(handler::my_photos))
        .route("/{id}", get(handler::get_photo))
        .route("/{id}", delete(handler::remove_photo))
        .route("/{id}/moderate", post(handler::moderate_photo))
}
