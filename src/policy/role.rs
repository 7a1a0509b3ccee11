// ============================================================================
// Role Hierarchy
// Ordered actor roles and their numeric levels
// ============================================================================

use super::errors::{PolicyError, PolicyResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Actor role, ordered by privilege (ascending).
///
/// Each role maps to a numeric `niveau`; policy decisions compare levels
/// with `>=` thresholds, never role-name equality, so intermediate roles
/// can be inserted without breaking existing checks. The derived `Ord`
/// agrees with [`Role::niveau`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    Employe,
    Responsable,
    Manager,
    Directeur,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Every role, least privileged first.
    pub const ALL: [Role; 6] = [
        Role::Employe,
        Role::Responsable,
        Role::Manager,
        Role::Directeur,
        Role::Admin,
        Role::SuperAdmin,
    ];

    /// Numeric level of the role; higher is more privileged.
    #[inline]
    pub const fn niveau(self) -> u8 {
        match self {
            Role::Employe => 10,
            Role::Responsable => 20,
            Role::Manager => 40,
            Role::Directeur => 60,
            Role::Admin => 80,
            Role::SuperAdmin => 100,
        }
    }

    /// Canonical string form, as persisted in actor records.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Employe => "employe",
            Role::Responsable => "responsable",
            Role::Manager => "manager",
            Role::Directeur => "directeur",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employe" => Ok(Role::Employe),
            "responsable" => Ok(Role::Responsable),
            "manager" => Ok(Role::Manager),
            "directeur" => Ok(Role::Directeur),
            "admin" => Ok(Role::Admin),
            "super_admin" => Ok(Role::SuperAdmin),
            other => Err(PolicyError::UnknownRole(other.to_string())),
        }
    }
}

/// Look up the numeric level for a persisted role string.
///
/// # Errors
/// Returns `UnknownRole` when the string is not in the role table. The
/// caller must degrade to level 0 (no access), not crash the request.
pub fn role_level(role: &str) -> PolicyResult<u8> {
    role.parse::<Role>().map(Role::niveau)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_niveau_strictly_monotonic() {
        for pair in Role::ALL.windows(2) {
            assert!(
                pair[0].niveau() < pair[1].niveau(),
                "{} must rank below {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_ord_agrees_with_niveau() {
        for a in Role::ALL {
            for b in Role::ALL {
                assert_eq!(a.cmp(&b), a.niveau().cmp(&b.niveau()));
            }
        }
    }

    #[test]
    fn test_from_str_roundtrip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_level() {
        assert_eq!(role_level("manager").unwrap(), 40);
        assert_eq!(role_level("admin").unwrap(), 80);
        assert_eq!(role_level("super_admin").unwrap(), 100);
    }

    #[test]
    fn test_unknown_role() {
        assert_eq!(
            role_level("stagiaire"),
            Err(PolicyError::UnknownRole("stagiaire".to_string()))
        );
        // Lookups are case-sensitive; "Admin" is not a configured role
        assert!(role_level("Admin").is_err());
    }
}
