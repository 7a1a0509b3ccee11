// ============================================================================
// Domain Models Module
// Contains the financial document entities and value objects
// ============================================================================

pub mod document;
pub mod line;

pub use document::{DocumentId, Invoice, Quote};
pub use line::{InvoiceLine, LineId, QuoteLine};

// Re-export state machines
pub use document::status::{InvoiceStatus, InvoiceTransition, QuoteStatus, QuoteTransition};
