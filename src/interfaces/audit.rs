// ============================================================================
// Audit Sink Interface
// Defines the contract for recording access-control outcomes
// ============================================================================

use crate::policy::{AccessAction, AccessModule, DenialReason, Role};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the mutation guard
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccessEvent {
    /// Actor authorized for the action
    AccessGranted {
        role: Role,
        module: AccessModule,
        action: AccessAction,
        timestamp: DateTime<Utc>,
    },

    /// Request rejected before any mutation, with the denial reason
    AccessDenied {
        actor: Option<String>,
        module: AccessModule,
        action: AccessAction,
        reason: DenialReason,
        timestamp: DateTime<Utc>,
    },
}

/// Audit sink trait for processing access events
/// Implementations can handle logging, persistence, alerting, etc.
pub trait AuditSink: Send + Sync {
    /// Handle an access event
    fn on_event(&self, event: AccessEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<AccessEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op audit sink for testing
pub struct NoOpAuditSink;

impl AuditSink for NoOpAuditSink {
    fn on_event(&self, _event: AccessEvent) {
        // Do nothing
    }
}

/// Logging audit sink; denials log at warn so configuration drift
/// (unknown roles, missing rules) surfaces in operations
pub struct LoggingAuditSink;

impl AuditSink for LoggingAuditSink {
    fn on_event(&self, event: AccessEvent) {
        match &event {
            AccessEvent::AccessGranted { .. } => {
                tracing::debug!("Access event: {:?}", event);
            },
            AccessEvent::AccessDenied { .. } => {
                tracing::warn!("Access event: {:?}", event);
            },
        }
    }
}
