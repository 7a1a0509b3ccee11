// ============================================================================
// Holding Core Library
// Rounding-safe money computation and role-gated access decisions
// ============================================================================

//! # Holding Core
//!
//! Deterministic building blocks for a holding management back end:
//! decimal-safe invoice/quote arithmetic and a fail-closed role-based
//! access policy, shared by UI gates and server-side mutation guards.
//!
//! ## Features
//!
//! - **Fixed-point amounts** with round-half-up cent rounding, no binary
//!   floating-point drift
//! - **Line derivations** (HT / TVA / TTC) that reconcile exactly with
//!   document-level totals
//! - **One policy table** resolving (module, action) pairs to minimum
//!   role levels, deny by default
//! - **Mutation guard** covering the authenticated -> role resolved ->
//!   permission granted gate sequence, with pluggable audit sinks
//!
//! ## Example
//!
//! ```rust
//! use holding_core::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // Derive the amounts for an invoice line: 3 x 10,33 EUR at 20% VAT
//! let totals = compute_line(
//!     Decimal::from(3),
//!     "10.33".parse().unwrap(),
//!     Decimal::from(20),
//! )
//! .unwrap();
//! assert_eq!(totals.montant_ht.to_string(), "30.99");
//! assert_eq!(totals.montant_ttc.to_string(), "37.19");
//!
//! // Gate a destructive mutation behind the policy
//! let guard = MutationGuard::with_default_policy();
//! let denial = guard
//!     .authorize(Some("manager"), AccessModule::Finance, AccessAction::Delete)
//!     .unwrap_err();
//! assert_eq!(
//!     denial.to_string(),
//!     "access denied: role level 40 is below the required level 80"
//! );
//! ```

pub mod domain;
pub mod guard;
pub mod interfaces;
pub mod numeric;
pub mod policy;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DocumentId, Invoice, InvoiceLine, InvoiceStatus, InvoiceTransition, LineId, Quote,
        QuoteLine, QuoteStatus, QuoteTransition,
    };
    pub use crate::guard::MutationGuard;
    pub use crate::interfaces::{AccessEvent, AuditSink, LoggingAuditSink, NoOpAuditSink};
    pub use crate::numeric::{
        amounts_equal, compute_line, divide, format_amount, line_ht, line_ttc, line_tva, sum,
        Amount, FormatOptions, LineTotals, NumericError, NumericResult,
    };
    pub use crate::policy::{
        can_delete, can_edit, role_level, AccessAction, AccessDenied, AccessModule, AccessPolicy,
        Decision, DenialReason, PolicyError, Role,
    };
}
