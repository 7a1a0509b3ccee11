// ============================================================================
// Policy Errors
// Error and denial types for access policy evaluation
// ============================================================================

use super::access::{AccessAction, AccessModule};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised while resolving policy inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PolicyError {
    /// Role string absent from the role table. Callers must treat this as
    /// level 0 (no access), never crash the request; it is logged as a
    /// configuration anomaly.
    UnknownRole(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::UnknownRole(role) => {
                write!(f, "unknown role '{}': not in the role table", role)
            },
        }
    }
}

impl std::error::Error for PolicyError {}

/// Result type alias for policy operations
pub type PolicyResult<T> = Result<T, PolicyError>;

/// Why an access check was denied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DenialReason {
    /// No authenticated actor on the request
    NotAuthenticated,
    /// Actor role is not in the role table (treated as level 0)
    UnknownRole { role: String },
    /// Actor role level is below the rule's minimum
    InsufficientNiveau { required: u8, actual: u8 },
    /// No rule grants the action on the module (fail-closed default)
    NotPermitted {
        module: AccessModule,
        action: AccessAction,
    },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::NotAuthenticated => write!(f, "not authenticated"),
            DenialReason::UnknownRole { role } => {
                write!(f, "role '{}' is not recognized", role)
            },
            DenialReason::InsufficientNiveau { required, actual } => {
                write!(
                    f,
                    "role level {} is below the required level {}",
                    actual, required
                )
            },
            DenialReason::NotPermitted { module, action } => {
                write!(f, "no rule grants '{}' on '{}'", action, module)
            },
        }
    }
}

/// Structured rejection returned to API boundaries when a guarded
/// mutation is refused.
///
/// Denials are routine outcomes, caught at the request boundary and
/// turned into a 401/403-style response; they must never propagate as a
/// crash.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccessDenied {
    pub reason: DenialReason,
}

impl AccessDenied {
    pub fn new(reason: DenialReason) -> Self {
        Self { reason }
    }

    /// True when the denial maps to a 401-style outcome rather than 403.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self.reason, DenialReason::NotAuthenticated)
    }
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "access denied: {}", self.reason)
    }
}

impl std::error::Error for AccessDenied {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denial_display() {
        assert_eq!(
            DenialReason::NotAuthenticated.to_string(),
            "not authenticated"
        );
        assert_eq!(
            DenialReason::InsufficientNiveau {
                required: 80,
                actual: 40
            }
            .to_string(),
            "role level 40 is below the required level 80"
        );
        assert_eq!(
            AccessDenied::new(DenialReason::NotPermitted {
                module: AccessModule::Admin,
                action: AccessAction::Export,
            })
            .to_string(),
            "access denied: no rule grants 'export' on 'admin'"
        );
    }

    #[test]
    fn test_unknown_role_display() {
        let err = PolicyError::UnknownRole("stagiaire".to_string());
        assert_eq!(err.to_string(), "unknown role 'stagiaire': not in the role table");
    }

    #[test]
    fn test_is_unauthenticated() {
        assert!(AccessDenied::new(DenialReason::NotAuthenticated).is_unauthenticated());
        assert!(!AccessDenied::new(DenialReason::UnknownRole {
            role: "x".to_string()
        })
        .is_unauthenticated());
    }
}
