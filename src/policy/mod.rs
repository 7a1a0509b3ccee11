// ============================================================================
// Policy Module
// Role-level-gated access decisions for UI gates and mutation guards
// ============================================================================
//
// This module provides:
// - Role: the ordered role hierarchy and its numeric levels
// - AccessPolicy: one fail-closed (module, action) -> minimum level table
// - can_edit / can_delete: threshold checks used before mutations
// - PolicyError / AccessDenied: resolution and denial types
//
// Design principles:
// - Decisions compare levels with >= thresholds, never role-name equality
// - Missing rules deny (fail-closed)
// - Pure, stateless evaluation; the table is read-only after construction

mod access;
mod errors;
mod role;

pub use access::{
    can_delete, can_edit, AccessAction, AccessModule, AccessPolicy, Decision, DELETE_MIN_NIVEAU,
    EDIT_MIN_NIVEAU,
};
pub use errors::{AccessDenied, DenialReason, PolicyError, PolicyResult};
pub use role::{role_level, Role};
