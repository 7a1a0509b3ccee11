// ============================================================================
// Financial Document Domain Model
// Invoices and quotes with ordered lines and status state machines
// ============================================================================

use super::line::{InvoiceLine, QuoteLine};
use crate::numeric::{Amount, LineTotals, NumericResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DocumentId(Uuid);

impl DocumentId {
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

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Document Status State Machines
// ============================================================================

pub mod status {
    #[cfg(feature = "serde")]
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub enum InvoiceStatus {
        Brouillon,
        Envoyee,
        Payee,
        Annulee,
    }

    impl InvoiceStatus {
        /// A paid or cancelled invoice never changes again.
        pub fn is_terminal(&self) -> bool {
            matches!(self, InvoiceStatus::Payee | InvoiceStatus::Annulee)
        }

        /// Content edits stop once the invoice is paid or cancelled.
        pub fn can_be_edited(&self) -> bool {
            matches!(self, InvoiceStatus::Brouillon | InvoiceStatus::Envoyee)
        }

        /// A sent or paid invoice is kept for the audit trail; only
        /// drafts and cancelled invoices may be deleted.
        pub fn can_be_deleted(&self) -> bool {
            matches!(self, InvoiceStatus::Brouillon | InvoiceStatus::Annulee)
        }
    }

    /// Valid transitions for the invoice state machine
    #[derive(Debug, Clone, Copy)]
    pub enum InvoiceTransition {
        Envoyer,
        Encaisser,
        Annuler,
    }

    impl InvoiceStatus {
        pub fn transition(&self, transition: InvoiceTransition) -> Result<InvoiceStatus, String> {
            match (self, transition) {
                (InvoiceStatus::Brouillon, InvoiceTransition::Envoyer) => Ok(InvoiceStatus::Envoyee),
                (InvoiceStatus::Brouillon, InvoiceTransition::Annuler) => Ok(InvoiceStatus::Annulee),

                (InvoiceStatus::Envoyee, InvoiceTransition::Encaisser) => Ok(InvoiceStatus::Payee),
                (InvoiceStatus::Envoyee, InvoiceTransition::Annuler) => Ok(InvoiceStatus::Annulee),

                _ => Err(format!(
                    "Invalid transition from {:?} via {:?}",
                    self, transition
                )),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub enum QuoteStatus {
        Brouillon,
        Envoye,
        Accepte,
        Refuse,
        Expire,
    }

    impl QuoteStatus {
        pub fn is_terminal(&self) -> bool {
            matches!(
                self,
                QuoteStatus::Accepte | QuoteStatus::Refuse | QuoteStatus::Expire
            )
        }

        pub fn can_be_edited(&self) -> bool {
            matches!(self, QuoteStatus::Brouillon)
        }
    }

    /// Valid transitions for the quote state machine
    #[derive(Debug, Clone, Copy)]
    pub enum QuoteTransition {
        Envoyer,
        Accepter,
        Refuser,
        Expirer,
    }

    impl QuoteStatus {
        pub fn transition(&self, transition: QuoteTransition) -> Result<QuoteStatus, String> {
            match (self, transition) {
                (QuoteStatus::Brouillon, QuoteTransition::Envoyer) => Ok(QuoteStatus::Envoye),

                (QuoteStatus::Envoye, QuoteTransition::Accepter) => Ok(QuoteStatus::Accepte),
                (QuoteStatus::Envoye, QuoteTransition::Refuser) => Ok(QuoteStatus::Refuse),
                (QuoteStatus::Envoye, QuoteTransition::Expirer) => Ok(QuoteStatus::Expire),

                _ => Err(format!(
                    "Invalid transition from {:?} via {:?}",
                    self, transition
                )),
            }
        }
    }
}

use status::{InvoiceStatus, InvoiceTransition, QuoteStatus, QuoteTransition};

// ============================================================================
// Invoice
// ============================================================================

/// An invoice with its ordered lines.
///
/// Totals are derived from the lines on demand; cent-level sums are exact
/// so no rounding happens at the document level.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Invoice {
    pub id: DocumentId,
    pub numero: String,
    pub client: String,
    pub date_emission: DateTime<Utc>,
    pub statut: InvoiceStatus,
    lines: Vec<InvoiceLine>,
}

impl Invoice {
    pub fn new(numero: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            numero: numero.into(),
            client: client.into(),
            date_emission: Utc::now(),
            statut: InvoiceStatus::Brouillon,
            lines: Vec::new(),
        }
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Insert a line, keeping the collection sorted by `ordre`.
    pub fn add_line(&mut self, line: InvoiceLine) {
        self.lines.push(line);
        self.lines.sort_by_key(|line| line.ordre);
    }

    /// Remove a line by position in display order.
    pub fn remove_line(&mut self, index: usize) -> Option<InvoiceLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Aggregate the line amounts. Exact in cents.
    pub fn totals(&self) -> NumericResult<LineTotals> {
        let mut montant_ht = Amount::ZERO;
        let mut montant_tva = Amount::ZERO;

        for line in &self.lines {
            montant_ht = montant_ht.checked_add(line.montant_ht)?;
            montant_tva = montant_tva.checked_add(line.montant_tva)?;
        }

        Ok(LineTotals {
            montant_ht,
            montant_tva,
            montant_ttc: montant_ht.checked_add(montant_tva)?,
        })
    }

    /// Re-derive every line from its inputs, then aggregate.
    pub fn recompute_totals(&mut self) -> NumericResult<LineTotals> {
        for line in &mut self.lines {
            line.recompute()?;
        }
        self.totals()
    }

    /// Advance the invoice status.
    pub fn apply(&mut self, transition: InvoiceTransition) -> Result<(), String> {
        self.statut = self.statut.transition(transition)?;
        Ok(())
    }

    /// Validate the document and every line.
    pub fn validate(&self) -> Result<(), String> {
        if self.numero.is_empty() {
            return Err("Invoice number cannot be empty".to_string());
        }
        for line in &self.lines {
            line.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Quote
// ============================================================================

/// A quote (devis) with its ordered lines.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quote {
    pub id: DocumentId,
    pub numero: String,
    pub client: String,
    pub date_emission: DateTime<Utc>,
    pub statut: QuoteStatus,
    lines: Vec<QuoteLine>,
}

impl Quote {
    pub fn new(numero: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            numero: numero.into(),
            client: client.into(),
            date_emission: Utc::now(),
            statut: QuoteStatus::Brouillon,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[QuoteLine] {
        &self.lines
    }

    pub fn add_line(&mut self, line: QuoteLine) {
        self.lines.push(line);
        self.lines.sort_by_key(|line| line.ordre);
    }

    pub fn totals(&self) -> NumericResult<LineTotals> {
        let mut montant_ht = Amount::ZERO;
        let mut montant_tva = Amount::ZERO;

        for line in &self.lines {
            montant_ht = montant_ht.checked_add(line.montant_ht)?;
            montant_tva = montant_tva.checked_add(line.montant_tva)?;
        }

        Ok(LineTotals {
            montant_ht,
            montant_tva,
            montant_ttc: montant_ht.checked_add(montant_tva)?,
        })
    }

    pub fn apply(&mut self, transition: QuoteTransition) -> Result<(), String> {
        self.statut = self.statut.transition(transition)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.numero.is_empty() {
            return Err("Quote number cannot be empty".to_string());
        }
        for line in &self.lines {
            line.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn invoice_with_lines() -> Invoice {
        let mut invoice = Invoice::new("FAC-2024-001", "Holding Delta");
        invoice.add_line(InvoiceLine::new("Conseil", 3, dec("10.33"), dec("20"), 1).unwrap());
        invoice.add_line(InvoiceLine::new("Support", 7, dec("1.43"), dec("20"), 0).unwrap());
        invoice
    }

    #[test]
    fn test_lines_kept_in_ordre() {
        let invoice = invoice_with_lines();
        let ordres: Vec<u32> = invoice.lines().iter().map(|line| line.ordre).collect();
        assert_eq!(ordres, vec![0, 1]);
        assert_eq!(invoice.lines()[0].designation, "Support");
    }

    #[test]
    fn test_invoice_totals_reconcile_with_lines() {
        let invoice = invoice_with_lines();
        let totals = invoice.totals().unwrap();

        // 30.99 + 10.01
        assert_eq!(totals.montant_ht.to_string(), "41.00");
        // 6.20 + 2.00
        assert_eq!(totals.montant_tva.to_string(), "8.20");
        assert_eq!(totals.montant_ttc.to_string(), "49.20");
    }

    #[test]
    fn test_empty_invoice_totals() {
        let invoice = Invoice::new("FAC-2024-002", "Holding Delta");
        let totals = invoice.totals().unwrap();
        assert_eq!(totals.montant_ttc, Amount::ZERO);
    }

    #[test]
    fn test_recompute_after_line_change() {
        let mut invoice = invoice_with_lines();
        // A form edit mutates the inputs; amounts must follow
        {
            let line = &mut invoice.lines[0];
            line.quantite = 14;
        }
        let totals = invoice.recompute_totals().unwrap();
        // Support becomes 14 x 1.43 = 20.02; HT = 20.02 + 30.99
        assert_eq!(totals.montant_ht.to_string(), "51.01");
    }

    #[test]
    fn test_invoice_status_machine() {
        let mut invoice = invoice_with_lines();
        assert!(invoice.statut.can_be_edited());
        assert!(invoice.statut.can_be_deleted());

        invoice.apply(InvoiceTransition::Envoyer).unwrap();
        assert_eq!(invoice.statut, InvoiceStatus::Envoyee);
        assert!(invoice.statut.can_be_edited());
        assert!(!invoice.statut.can_be_deleted());

        invoice.apply(InvoiceTransition::Encaisser).unwrap();
        assert_eq!(invoice.statut, InvoiceStatus::Payee);
        assert!(invoice.statut.is_terminal());
        assert!(!invoice.statut.can_be_edited());
        assert!(!invoice.statut.can_be_deleted());

        // Paid invoices reject every transition
        assert!(invoice.apply(InvoiceTransition::Annuler).is_err());
    }

    #[test]
    fn test_quote_status_machine() {
        let mut quote = Quote::new("DEV-2024-001", "Holding Delta");
        quote.add_line(QuoteLine::new("Audit", dec("1.5"), dec("800"), dec("20"), 0).unwrap());

        quote.apply(QuoteTransition::Envoyer).unwrap();
        quote.apply(QuoteTransition::Accepter).unwrap();
        assert_eq!(quote.statut, QuoteStatus::Accepte);
        assert!(quote.statut.is_terminal());

        assert!(quote.apply(QuoteTransition::Refuser).is_err());
    }

    #[test]
    fn test_invoice_validation() {
        let invoice = Invoice::new("", "Holding Delta");
        assert!(invoice.validate().is_err());

        let invoice = invoice_with_lines();
        assert!(invoice.validate().is_ok());
    }
}
