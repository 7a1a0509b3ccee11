// ============================================================================
// Numeric Module
// Decimal-safe monetary arithmetic for invoice and quote amounts
// ============================================================================
//
// This module provides:
// - Amount: canonical money value, fixed-point cents (i64)
// - compute: HT / TVA / TTC line derivations, summation, division
// - format: French-locale display strings
// - NumericError: error types for monetary operations
//
// Design principles:
// - No binary floating-point arithmetic on money
// - Intermediates carried in rust_decimal, rounded half-up once
// - All arithmetic returns Result (no panics)
// - Pure functions, safe under concurrent callers

mod amount;
mod compute;
mod errors;
mod format;

pub use amount::Amount;
pub use compute::{amounts_equal, compute_line, divide, line_ht, line_ttc, line_tva, sum, LineTotals};
pub use errors::{NumericError, NumericResult};
pub use format::{format_amount, FormatOptions};
