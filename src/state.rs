//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::audit::AuditSink;
use crate::auth::Authorizer;
use crate::config::Config;
use crate::db::Db;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pools
    pub db: Db,

    /// Permission checks for guarded operations
    pub authorizer: Arc<dyn Authorizer>,

    /// Audit trail destination
    pub audit: Arc<dyn AuditSink>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        db: Db,
        authorizer: Arc<dyn Authorizer>,
        audit: Arc<dyn AuditSink>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                authorizer,
                audit,
                config,
            }),
        }
    }

    /// Get a reference to the database pools
    pub fn db(&self) -> &Db {
        &self.inner.db
    }

    /// Get a reference to the authorizer
    pub fn authorizer(&self) -> &dyn Authorizer {
        self.inner.authorizer.as_ref()
    }

    /// Get a reference to the audit sink
    pub fn audit(&self) -> &dyn AuditSink {
        self.inner.audit.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
