//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod category;
pub mod competition;
pub mod photo;
pub mod vote;

pub use category::*;
pub use competition::*;
pub use photo::*;
pub use vote::*;
