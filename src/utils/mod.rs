//! Utility functions

pub mod validation;

pub use validation::{sanitize_string, validate_file_path, validate_metadata};
