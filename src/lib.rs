//! Photoarena - Photo Competition Engine
//!
//! This library provides the core functionality for the Photoarena platform,
//! a rule engine that runs recurring photo competitions end to end.
//!
//! # Features
//!
//! - Competition lifecycle with a single active competition at a time
//! - Per-category submission quotas that free up on rejection or removal
//! - Photo moderation with approve, reject, and reset decisions
//! - One vote per user per category, with vote moving on re-vote
//! - Role-based access control driven by gateway-supplied identity
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod audit;
pub mod auth;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
