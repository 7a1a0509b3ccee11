// ============================================================================
// Interfaces Module
// Contains trait definitions and contracts
// ============================================================================

mod audit;

pub use audit::{AccessEvent, AuditSink, LoggingAuditSink, NoOpAuditSink};
