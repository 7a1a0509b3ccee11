// ============================================================================
// Document Line Domain Model
// ============================================================================

use crate::numeric::{compute_line, Amount, LineTotals, NumericResult};
use rust_decimal::Decimal;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineId(Uuid);

impl LineId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Invoice Line
// ============================================================================

/// A single invoice line.
///
/// The three `montant_*` fields are pure derivations of the input fields
/// and are recomputed whenever quantity, unit price, or VAT rate changes;
/// nothing is mutated in place by the computation itself. Lines are owned
/// by exactly one invoice and displayed in `ordre` order, not creation
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InvoiceLine {
    pub id: LineId,
    pub designation: String,
    /// Whole-unit quantity; invoices bill integral units
    pub quantite: u32,
    /// Unit price excluding VAT
    pub prix_unitaire: Decimal,
    /// VAT rate as a percentage in [0, 100]
    pub taux_tva: Decimal,
    pub montant_ht: Amount,
    pub montant_tva: Amount,
    pub montant_ttc: Amount,
    /// Explicit display position within the parent document
    pub ordre: u32,
}

impl InvoiceLine {
    /// Create a line with its derived amounts.
    ///
    /// # Errors
    /// Propagates numeric errors from the amount derivation.
    pub fn new(
        designation: impl Into<String>,
        quantite: u32,
        prix_unitaire: Decimal,
        taux_tva: Decimal,
        ordre: u32,
    ) -> NumericResult<Self> {
        let totals = compute_line(Decimal::from(quantite), prix_unitaire, taux_tva)?;

        Ok(Self {
            id: LineId::new(),
            designation: designation.into(),
            quantite,
            prix_unitaire,
            taux_tva,
            montant_ht: totals.montant_ht,
            montant_tva: totals.montant_tva,
            montant_ttc: totals.montant_ttc,
            ordre,
        })
    }

    /// Replace the inputs and re-derive every amount.
    pub fn update(
        &mut self,
        quantite: u32,
        prix_unitaire: Decimal,
        taux_tva: Decimal,
    ) -> NumericResult<()> {
        self.quantite = quantite;
        self.prix_unitaire = prix_unitaire;
        self.taux_tva = taux_tva;
        self.recompute()
    }

    /// Re-derive the amounts from the current inputs.
    pub fn recompute(&mut self) -> NumericResult<()> {
        let totals = compute_line(Decimal::from(self.quantite), self.prix_unitaire, self.taux_tva)?;
        self.montant_ht = totals.montant_ht;
        self.montant_tva = totals.montant_tva;
        self.montant_ttc = totals.montant_ttc;
        Ok(())
    }

    /// The derived amounts as one value.
    pub fn totals(&self) -> LineTotals {
        LineTotals {
            montant_ht: self.montant_ht,
            montant_tva: self.montant_tva,
            montant_ttc: self.montant_ttc,
        }
    }

    /// Validate the domain constraints on the inputs.
    pub fn validate(&self) -> Result<(), String> {
        if self.quantite < 1 {
            return Err("Quantity must be at least 1".to_string());
        }
        if self.prix_unitaire < Decimal::ZERO {
            return Err("Unit price cannot be negative".to_string());
        }
        if self.taux_tva < Decimal::ZERO || self.taux_tva > Decimal::ONE_HUNDRED {
            return Err("VAT rate must be between 0 and 100".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Quote Line
// ============================================================================

/// A single quote line.
///
/// Unlike invoice lines, quote quantities may be fractional (e.g. 1.5
/// person-days) but must stay at or above one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuoteLine {
    pub id: LineId,
    pub designation: String,
    /// Quantity, fractional allowed, >= 1
    pub quantite: Decimal,
    pub prix_unitaire: Decimal,
    pub taux_tva: Decimal,
    pub montant_ht: Amount,
    pub montant_tva: Amount,
    pub montant_ttc: Amount,
    pub ordre: u32,
}

impl QuoteLine {
    pub fn new(
        designation: impl Into<String>,
        quantite: Decimal,
        prix_unitaire: Decimal,
        taux_tva: Decimal,
        ordre: u32,
    ) -> NumericResult<Self> {
        let totals = compute_line(quantite, prix_unitaire, taux_tva)?;

        Ok(Self {
            id: LineId::new(),
            designation: designation.into(),
            quantite,
            prix_unitaire,
            taux_tva,
            montant_ht: totals.montant_ht,
            montant_tva: totals.montant_tva,
            montant_ttc: totals.montant_ttc,
            ordre,
        })
    }

    /// Re-derive the amounts from the current inputs.
    pub fn recompute(&mut self) -> NumericResult<()> {
        let totals = compute_line(self.quantite, self.prix_unitaire, self.taux_tva)?;
        self.montant_ht = totals.montant_ht;
        self.montant_tva = totals.montant_tva;
        self.montant_ttc = totals.montant_ttc;
        Ok(())
    }

    pub fn totals(&self) -> LineTotals {
        LineTotals {
            montant_ht: self.montant_ht,
            montant_tva: self.montant_tva,
            montant_ttc: self.montant_ttc,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.quantite < Decimal::ONE {
            return Err("Quantity must be at least 1".to_string());
        }
        if self.prix_unitaire < Decimal::ZERO {
            return Err("Unit price cannot be negative".to_string());
        }
        if self.taux_tva < Decimal::ZERO || self.taux_tva > Decimal::ONE_HUNDRED {
            return Err("VAT rate must be between 0 and 100".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
