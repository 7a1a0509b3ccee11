// ============================================================================
// Mutation Guard
// Pre-mutation gate sequence: authenticated -> role resolved -> permitted
// ============================================================================

use crate::interfaces::{AccessEvent, AuditSink, LoggingAuditSink};
use crate::policy::{
    AccessAction, AccessDenied, AccessModule, AccessPolicy, Decision, DenialReason, Role,
};
use chrono::Utc;
use std::sync::Arc;

/// Gate evaluated by mutation handlers before touching the data store.
///
/// The guard covers the front of the pipeline for a guarded mutation:
/// authentication presence, role resolution, and the policy check. Any
/// failed gate short-circuits into an [`AccessDenied`] rejection and is
/// reported to the audit sink; the handler must return it without
/// performing the mutation.
///
/// Business preconditions further down the pipeline (an invoice already
/// paid, dependent records) stay the caller's responsibility and must be
/// re-validated whatever this guard returns.
pub struct MutationGuard {
    policy: AccessPolicy,
    audit: Arc<dyn AuditSink>,
}

impl MutationGuard {
    pub fn new(policy: AccessPolicy, audit: Arc<dyn AuditSink>) -> Self {
        Self { policy, audit }
    }

    /// Guard with the built-in policy table and the logging sink.
    pub fn with_default_policy() -> Self {
        Self::new(AccessPolicy::default(), Arc::new(LoggingAuditSink))
    }

    /// The policy table this guard evaluates against.
    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// Authorize an actor for an action on a module.
    ///
    /// `actor` is the role string resolved from the authenticated session,
    /// or `None` when the request carries no session. An unknown role is
    /// treated as level 0 and denied, never raised as a crash; it is
    /// logged as a configuration anomaly.
    ///
    /// On success returns the resolved [`Role`] so the handler can apply
    /// further threshold checks without re-parsing.
    pub fn authorize(
        &self,
        actor: Option<&str>,
        module: AccessModule,
        action: AccessAction,
    ) -> Result<Role, AccessDenied> {
        let Some(raw_role) = actor else {
            return Err(self.deny(None, module, action, DenialReason::NotAuthenticated));
        };

        let role = match raw_role.parse::<Role>() {
            Ok(role) => role,
            Err(_) => {
                tracing::warn!(
                    "Unknown actor role '{}', treating as no access",
                    raw_role
                );
                return Err(self.deny(
                    Some(raw_role),
                    module,
                    action,
                    DenialReason::UnknownRole {
                        role: raw_role.to_string(),
                    },
                ));
            },
        };

        match self.policy.check(role, module, action) {
            Decision::Grant => {
                self.audit.on_event(AccessEvent::AccessGranted {
                    role,
                    module,
                    action,
                    timestamp: Utc::now(),
                });
                Ok(role)
            },
            Decision::Deny { reason } => Err(self.deny(Some(raw_role), module, action, reason)),
        }
    }

    fn deny(
        &self,
        actor: Option<&str>,
        module: AccessModule,
        action: AccessAction,
        reason: DenialReason,
    ) -> AccessDenied {
        self.audit.on_event(AccessEvent::AccessDenied {
            actor: actor.map(str::to_string),
            module,
            action,
            reason: reason.clone(),
            timestamp: Utc::now(),
        });
        AccessDenied::new(reason)
    }
}

// ============================================================================
// Tests
// ============================================================================
