// ============================================================================
// Access Policy
// Capability table mapping (module, action) pairs to minimum role levels
// ============================================================================

use super::errors::DenialReason;
use super::role::Role;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum level required for destructive operations (admin tier).
pub const DELETE_MIN_NIVEAU: u8 = 80;

/// Minimum level required for mutating operations (manager tier).
pub const EDIT_MIN_NIVEAU: u8 = 40;

/// Application module a capability applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessModule {
    Finance,
    Rh,
    Services,
    Workflows,
    Clients,
    Admin,
}

impl fmt::Display for AccessModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessModule::Finance => "finance",
            AccessModule::Rh => "rh",
            AccessModule::Services => "services",
            AccessModule::Workflows => "workflows",
            AccessModule::Clients => "clients",
            AccessModule::Admin => "admin",
        };
        f.write_str(name)
    }
}

/// Action a capability grants on a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessAction {
    View,
    Create,
    Edit,
    Delete,
    Approve,
    Export,
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessAction::View => "view",
            AccessAction::Create => "create",
            AccessAction::Edit => "edit",
            AccessAction::Delete => "delete",
            AccessAction::Approve => "approve",
            AccessAction::Export => "export",
        };
        f.write_str(name)
    }
}

/// Result of a policy check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Grant,
    Deny { reason: DenialReason },
}

impl Decision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Decision::Grant)
    }
}

/// Static policy table resolving (module, action) pairs to the minimum
/// role level that may perform them.
///
/// Both surfaces that gate the same business rule (UI rendering and
/// server-side mutation guards) query this one table, so the two cannot
/// drift apart. A pair with no rule denies every role (fail-closed).
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: HashMap<(AccessModule, AccessAction), u8>,
}

impl AccessPolicy {
    /// Build a policy from explicit (module, action, minimum level) rules.
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (AccessModule, AccessAction, u8)>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(module, action, niveau)| ((module, action), niveau))
                .collect(),
        }
    }

    /// Minimum level configured for the pair, if any rule exists.
    #[inline]
    pub fn required_niveau(&self, module: AccessModule, action: AccessAction) -> Option<u8> {
        self.rules.get(&(module, action)).copied()
    }

    /// Check whether a role may perform an action on a module.
    pub fn check(&self, role: Role, module: AccessModule, action: AccessAction) -> Decision {
        match self.required_niveau(module, action) {
            None => Decision::Deny {
                reason: DenialReason::NotPermitted { module, action },
            },
            Some(required) if role.niveau() >= required => Decision::Grant,
            Some(required) => Decision::Deny {
                reason: DenialReason::InsufficientNiveau {
                    required,
                    actual: role.niveau(),
                },
            },
        }
    }

    /// Yes/no form of [`AccessPolicy::check`], used by UI gates.
    #[inline]
    pub fn has_permission(&self, role: Role, module: AccessModule, action: AccessAction) -> bool {
        self.check(role, module, action).is_granted()
    }
}

impl Default for AccessPolicy {
    /// Built-in ruleset for the holding application.
    ///
    /// Business modules share one ladder (view 10, create 20, edit 40,
    /// export 40, approve 60, delete 80); the admin module is reserved to
    /// the admin tier and grants neither approve nor export.
    fn default() -> Self {
        use AccessAction::*;
        use AccessModule::*;

        let mut rules = HashMap::new();
        for module in [Finance, Rh, Services, Workflows, Clients] {
            rules.insert((module, View), 10);
            rules.insert((module, Create), 20);
            rules.insert((module, Edit), EDIT_MIN_NIVEAU);
            rules.insert((module, Export), 40);
            rules.insert((module, Approve), 60);
            rules.insert((module, Delete), DELETE_MIN_NIVEAU);
        }
        rules.insert((Admin, View), 80);
        rules.insert((Admin, Create), 100);
        rules.insert((Admin, Edit), 100);
        rules.insert((Admin, Delete), 100);

        Self { rules }
    }
}

/// True iff the role may perform destructive operations (niveau >= 80).
///
/// Policy constant, not derived; the default table uses the same
/// threshold for every delete rule on business modules.
#[inline]
pub const fn can_delete(role: Role) -> bool {
    role.niveau() >= DELETE_MIN_NIVEAU
}

/// True iff the role may perform mutating operations (niveau >= 40).
#[inline]
pub const fn can_edit(role: Role) -> bool {
    role.niveau() >= EDIT_MIN_NIVEAU
}

// ============================================================================
// Tests
// ============================================================================
