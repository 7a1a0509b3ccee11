// ============================================================================
// Invoice Line Computation
// Derivation of HT / TVA / TTC amounts from line inputs
// ============================================================================

use super::amount::Amount;
use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Derived amounts for a single invoice or quote line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineTotals {
    /// Amount excluding VAT
    pub montant_ht: Amount,
    /// VAT amount
    pub montant_tva: Amount,
    /// Amount including VAT
    pub montant_ttc: Amount,
}

/// Compute the HT amount of a line: `round2(quantite × prix_unitaire)`.
///
/// Negative inputs are accepted arithmetically (credit-note lines); domain
/// sign constraints are the caller's responsibility.
///
/// # Errors
/// Returns `Overflow` if the product exceeds the representable range.
pub fn line_ht(quantite: Decimal, prix_unitaire: Decimal) -> NumericResult<Amount> {
    let produit = quantite
        .checked_mul(prix_unitaire)
        .ok_or(NumericError::Overflow)?;
    Amount::round2(produit)
}

/// Compute the VAT amount of a line: `round2(montant_ht × taux_tva / 100)`.
///
/// `taux_tva` is a percentage, expected in [0, 100]. Out-of-range rates
/// are not rejected here; they are validated upstream by the line types.
pub fn line_tva(montant_ht: Amount, taux_tva: Decimal) -> NumericResult<Amount> {
    let tva = montant_ht
        .to_decimal()
        .checked_mul(taux_tva)
        .ok_or(NumericError::Overflow)?
        / Decimal::ONE_HUNDRED;
    Amount::round2(tva)
}

/// Compute the TTC amount of a line: `montant_ht + montant_tva`.
///
/// Both operands are whole cents, so the addition is exact.
pub fn line_ttc(montant_ht: Amount, montant_tva: Amount) -> NumericResult<Amount> {
    montant_ht.checked_add(montant_tva)
}

/// Compute all derived amounts for a line.
///
/// HT is rounded first, TVA is derived from the **rounded** HT, and TTC is
/// their exact sum. Deriving TVA from the unrounded product would let
/// per-line totals drift from document totals computed over the aggregate
/// HT; this ordering keeps the two reconciled to the cent.
pub fn compute_line(
    quantite: Decimal,
    prix_unitaire: Decimal,
    taux_tva: Decimal,
) -> NumericResult<LineTotals> {
    let montant_ht = line_ht(quantite, prix_unitaire)?;
    let montant_tva = line_tva(montant_ht, taux_tva)?;
    let montant_ttc = line_ttc(montant_ht, montant_tva)?;

    Ok(LineTotals {
        montant_ht,
        montant_tva,
        montant_ttc,
    })
}

/// Sum high-precision values into a single amount.
///
/// Accumulation happens in `Decimal` and the result is rounded to cents
/// exactly once at the end, never by summing pre-rounded values.
///
/// # Errors
/// Returns `Overflow` if the accumulator exceeds the decimal range.
pub fn sum<I>(values: I) -> NumericResult<Amount>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut acc = Decimal::ZERO;
    for value in values {
        acc = acc.checked_add(value).ok_or(NumericError::Overflow)?;
    }
    Amount::round2(acc)
}

/// Divide one value by another and round the quotient to cents.
///
/// # Errors
/// Returns `DivisionByZero` when the divisor rounds to zero cents, not
/// only when it is exactly zero.
pub fn divide(numerateur: Decimal, diviseur: Decimal) -> NumericResult<Amount> {
    if Amount::round2(diviseur)?.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    let quotient = numerateur
        .checked_div(diviseur)
        .ok_or(NumericError::Overflow)?;
    Amount::round2(quotient)
}

/// Compare two values as amounts.
///
/// Values closer together than half a cent compare equal. This is coarser
/// than bit-exact decimal equality: 10.334 and 10.335 are the same amount
/// here, while 10.11 and 10.12 are not.
pub fn amounts_equal(a: Decimal, b: Decimal) -> bool {
    const HALF_CENT: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

    match a.checked_sub(b) {
        Some(diff) => diff.abs() < HALF_CENT,
        None => false,
    }
}

// ============================================================================
// Tests
// ============================================================================
