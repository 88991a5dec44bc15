//! Audit trail
//!
//! Moderation decisions and lifecycle switches are accountability events:
//! each one records who acted, on what, and with which outcome. Sinks are
//! fire-and-forget so recording can never fail the request that caused it.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::{ModerationAction, PhotoStatus};

/// Events kept in the audit trail
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    CompetitionActivated {
        competition_id: Uuid,
        actor_id: Uuid,
        demoted_competition_id: Option<Uuid>,
    },
    CompetitionDeactivated {
        competition_id: Uuid,
        actor_id: Uuid,
    },
    CompetitionCompleted {
        competition_id: Uuid,
        actor_id: Uuid,
    },
    PhotoModerated {
        photo_id: Uuid,
        moderator_id: Uuid,
        action: ModerationAction,
        outcome: PhotoStatus,
        reason: Option<String>,
        votes_invalidated: u64,
    },
    PhotoRemoved {
        photo_id: Uuid,
        actor_id: Uuid,
        votes_invalidated: u64,
    },
}

/// Destination for audit events
///
/// Implementations must be cheap and must not propagate failures back to the
/// caller.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// Sink that writes events into the structured log stream under the `audit`
/// target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        match serde_json::to_value(&event) {
            Ok(payload) => info!(target: "audit", %payload, "Audit event"),
            Err(_) => info!(target: "audit", ?event, "Audit event"),
        }
    }
}
